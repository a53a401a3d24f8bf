//! Tests for the scenario line grammar and deduplication.

mod test_utils;

use lynqx_core::{ScenarioStatus, ScenarioType};
use lynqx_workflow::{parse_line, parse_scenarios};
use test_utils::SAMPLE_OUTPUT;

#[test]
fn test_parse_line_variants() {
    let cases = [
        ("TS001: Login — desc", "TS001", "Login"),
        ("1. TS002: Logout - desc", "TS002", "Logout"),
        ("12) TS003: Signup", "TS003", "Signup"),
        ("**TS004**: Reset — desc", "TS004", "Reset"),
        ("**TS005:** Bold colon — desc", "TS005", "Bold colon"),
        ("3. **TS006**: **Bold name** — desc", "TS006", "Bold name"),
        ("TS007 : Spaced colon", "TS007", "Spaced colon"),
    ];

    for (line, id, name) in cases {
        let parsed = parse_line(line).unwrap_or_else(|| panic!("no match for {line:?}"));
        assert_eq!(parsed.id, id, "id for {line:?}");
        assert_eq!(parsed.name, name, "name for {line:?}");
    }
}

#[test]
fn test_parse_line_rejects_non_scenario_lines() {
    for line in [
        "Here are the scenarios:",
        "TS01: too few digits",
        "TS0001: too many digits",
        "- TS001: bullet prefix",
        "Scenario TS001: not at line start",
        "ts001: lowercase marker",
        "TS001 missing colon",
    ] {
        assert!(parse_line(line).is_none(), "unexpected match for {line:?}");
    }
}

#[test]
fn test_parse_line_em_dash_wins_over_hyphen() {
    let parsed = parse_line("TS001: Log-in flow — check sign-in").unwrap();
    assert_eq!(parsed.name, "Log-in flow");
}

#[test]
fn test_parse_line_empty_name_is_ignored() {
    assert!(parse_line("TS001:").is_none());
    assert!(parse_line("TS001: — only a description").is_none());
    assert!(parse_line("TS001: ** - x").is_none());
}

#[test]
fn test_parse_scenarios_sample_output() {
    let scenarios = parse_scenarios(SAMPLE_OUTPUT);

    let summary: Vec<(&str, &str)> = scenarios
        .iter()
        .map(|s| (s.id().as_str(), s.name().as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("TS001", "Successful login"),
            ("TS002", "Invalid password"),
            ("TS004", "Password reset"),
        ]
    );

    for scenario in &scenarios {
        assert_eq!(scenario.status(), &ScenarioStatus::PendingReview);
        assert_eq!(scenario.scenario_type(), &ScenarioType::Positive);
        assert!(scenario.description().is_empty());
        assert!(scenario.expected_result().is_empty());
        assert!(scenario.related_story().is_none());
    }
}

#[test]
fn test_parse_scenarios_names_are_unique_case_insensitively() {
    let raw = "TS001: Login\nTS002: LOGIN\nTS003: login — again\nTS004: Logout";
    let scenarios = parse_scenarios(raw);

    let mut keys: Vec<String> = scenarios.iter().map(|s| s.name_key()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].id(), "TS001");
}

#[test]
fn test_parse_scenarios_is_idempotent() {
    assert_eq!(parse_scenarios(SAMPLE_OUTPUT), parse_scenarios(SAMPLE_OUTPUT));
}

#[test]
fn test_parse_scenarios_without_markers_is_empty() {
    assert!(parse_scenarios("").is_empty());
    assert!(parse_scenarios("I cannot help with that.\n\nSorry.").is_empty());
}

#[test]
fn test_parse_scenarios_trims_indented_lines() {
    let scenarios = parse_scenarios("   TS001: Indented — x\n\t2. TS002: Tabbed - y");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[1].name(), "Tabbed");
}
