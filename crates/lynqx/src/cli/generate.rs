//! Headless generation command handler.

use super::OutputFormat;
use lynqx::{
    ExportFormat, LynqxConfig, LynqxResult, ScenarioRecord, WorkflowState, build_driver,
    build_prompt, generate_text, read_stories, render_scenarios,
};
use std::path::Path;
use tracing::info;

/// Generate scenarios for a story file and print them.
///
/// Runs the same steps as the interactive workflow up to review: submit the
/// stories, generate, parse. Failures are returned instead of shown inline.
pub async fn run_generate(
    config: &LynqxConfig,
    stories: &Path,
    format: OutputFormat,
) -> LynqxResult<()> {
    let driver = build_driver(config)?;

    let mut state = WorkflowState::new();
    state.submit_stories(read_stories(stories)?)?;

    info!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        stories = state.story_lines().len(),
        "Generating scenarios"
    );
    let prompt = build_prompt(&state.story_lines());
    let raw = generate_text(driver.as_ref(), &prompt).await?;
    state.set_generated_text(raw);
    state.ensure_scenarios();

    let scenarios: Vec<&ScenarioRecord> = state.scenarios().iter().collect();
    match format {
        OutputFormat::Json => {
            println!("{}", render_scenarios(&scenarios, ExportFormat::Json)?);
        }
        OutputFormat::Human if scenarios.is_empty() => {
            println!("No scenarios could be parsed from the response:\n");
            println!("{}", state.raw_generated_text());
        }
        OutputFormat::Human => {
            println!("{}", render_scenarios(&scenarios, ExportFormat::Text)?);
            println!("\n{} scenarios", scenarios.len());
        }
    }

    Ok(())
}
