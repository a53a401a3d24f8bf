//! Scenario extraction from free-form provider output.
//!
//! The provider is asked for one scenario per line but nothing enforces it,
//! so the parser reads the response with a small line grammar and skips
//! everything else:
//!
//! ```text
//! line := [list] [bold] id [bold] ':' [bold] rest
//! list := digits ('.' | ')') spaces
//! bold := '**'
//! id   := 'TS' digit digit digit
//! ```
//!
//! The scenario name is the part of `rest` before the first em-dash, or
//! before the first hyphen when there is no em-dash.

use lynqx_core::ScenarioRecord;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static SCENARIO_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)]\s*)?(?:\*\*)?(TS\d{3})(?:\*\*)?\s*:(?:\*\*)?\s*(.*)$")
        .expect("scenario line pattern is valid")
});

const EM_DASH: char = '—';
const HYPHEN: char = '-';

/// A line recognised as a scenario marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioLine<'a> {
    /// Identifier token, e.g. `TS001`
    pub id: &'a str,
    /// Scenario name, trimmed
    pub name: &'a str,
}

/// Recognise a single trimmed line.
///
/// Returns `None` for lines without a `TSxxx:` marker and for markers
/// followed by an empty name.
///
/// # Examples
///
/// ```
/// use lynqx_workflow::parse_line;
///
/// let line = parse_line("1. **TS001**: Login — valid credentials").unwrap();
/// assert_eq!(line.id, "TS001");
/// assert_eq!(line.name, "Login");
///
/// assert!(parse_line("Here are your scenarios:").is_none());
/// assert!(parse_line("TS0001: four digits").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ScenarioLine<'_>> {
    let captures = SCENARIO_LINE.captures(line)?;
    let id = captures.get(1)?.as_str();
    let rest = captures.get(2).map_or("", |m| m.as_str());

    let name = scenario_name(rest);
    if name.is_empty() {
        return None;
    }
    Some(ScenarioLine { id, name })
}

fn scenario_name(rest: &str) -> &str {
    let head = match rest.split_once(EM_DASH) {
        Some((head, _)) => head,
        None => rest.split_once(HYPHEN).map_or(rest, |(head, _)| head),
    };
    head.trim().trim_matches('*').trim()
}

/// Parse provider output into scenario records.
///
/// Non-matching lines are ignored. Names are unique case-insensitively: the
/// first occurrence wins and later duplicates are dropped silently. Every
/// record starts as a pending, positive scenario with no description.
///
/// # Examples
///
/// ```
/// use lynqx_workflow::parse_scenarios;
///
/// let raw = "1. **TS001**: Login — desc\nTS002: Login — other desc\nTS003: Logout - desc2";
/// let scenarios = parse_scenarios(raw);
///
/// let ids: Vec<&str> = scenarios.iter().map(|s| s.id().as_str()).collect();
/// assert_eq!(ids, vec!["TS001", "TS003"]);
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_scenarios(raw: &str) -> Vec<ScenarioRecord> {
    let mut seen = HashSet::new();
    let mut scenarios = Vec::new();

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some(parsed) = parse_line(line) else {
            continue;
        };

        if !seen.insert(parsed.name.to_lowercase()) {
            debug!(id = parsed.id, name = parsed.name, "Dropping duplicate scenario name");
            continue;
        }

        scenarios.push(ScenarioRecord::new(parsed.id, parsed.name));
    }

    debug!(count = scenarios.len(), "Parsed scenarios");
    scenarios
}
