//! Rendering of approved scenarios for downstream steps.

use lynqx_core::ScenarioRecord;
use lynqx_error::{JsonError, LynqxResult};

/// Output format for exported scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum ExportFormat {
    /// One `ID: Name — Description — Expected` line per scenario
    #[default]
    #[display("text")]
    Text,
    /// Pretty-printed JSON array of scenario records
    #[display("json")]
    Json,
}

/// Render scenarios in the requested format.
///
/// Empty description or expected-result segments are left out of text
/// lines, so parsed-only records render as `ID: Name`.
///
/// # Errors
///
/// `JsonError` if serialization fails.
///
/// # Examples
///
/// ```
/// use lynqx_core::ScenarioRecord;
/// use lynqx_workflow::{ExportFormat, render_scenarios};
///
/// let record = ScenarioRecord::new("TS001", "Login").with_description("Valid credentials");
/// let text = render_scenarios(&[&record], ExportFormat::Text).unwrap();
/// assert_eq!(text, "TS001: Login — Valid credentials");
/// ```
pub fn render_scenarios(scenarios: &[&ScenarioRecord], format: ExportFormat) -> LynqxResult<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(scenarios)
            .map_err(|e| JsonError::new(format!("Failed to serialize scenarios: {}", e)).into()),
        ExportFormat::Text => Ok(scenarios
            .iter()
            .map(|s| text_line(s))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn text_line(scenario: &ScenarioRecord) -> String {
    let mut line = format!("{}: {}", scenario.id(), scenario.name());
    for segment in [scenario.description(), scenario.expected_result()] {
        if !segment.is_empty() {
            line.push_str(" — ");
            line.push_str(segment);
        }
    }
    line
}
