//! Tests for story splitting and prompt construction.

use lynqx_workflow::{build_prompt, story_lines};

#[test]
fn test_story_lines_drop_blank_lines_and_keep_order() {
    let text = "\nStory C\n   \n\tStory A\n\nStory B\n\n";
    assert_eq!(story_lines(text), vec!["Story C", "\tStory A", "Story B"]);
}

#[test]
fn test_story_lines_handle_crlf() {
    let text = "First story\r\n\r\nSecond story\r\n";
    assert_eq!(story_lines(text), vec!["First story", "Second story"]);
}

#[test]
fn test_story_lines_blank_text_is_empty() {
    assert!(story_lines("  \n\t\n").is_empty());
}

#[test]
fn test_prompt_contains_every_story_in_order() {
    let prompt = build_prompt(&["As a user I log in", "As a user I log out"]);

    let first = prompt.find("1. As a user I log in").expect("first story present");
    let second = prompt.find("2. As a user I log out").expect("second story present");
    assert!(first < second);
}

#[test]
fn test_prompt_lists_required_fields_and_line_format() {
    let prompt = build_prompt(&["As an admin I delete users"]);

    for field in [
        "scenario_id",
        "scenario_name",
        "scenario_type",
        "description",
        "related_user_story",
        "status",
    ] {
        assert!(prompt.contains(field), "missing field {field}");
    }
    assert!(prompt.contains("2-3 test scenarios"));
    assert!(prompt.contains("TestCaseID: Description — Expected Result"));
}

#[test]
fn test_prompt_interpolates_stories_unmodified() {
    let story = "As a user I enter <script>alert('x')</script> — and 100% weird {braces}";
    let prompt = build_prompt(&[story]);
    assert!(prompt.contains(story));
}

#[test]
fn test_prompt_from_story_lines() {
    let text = "Story one\n\n\nStory two";
    let prompt = build_prompt(&story_lines(text));
    assert!(prompt.contains("1. Story one\n2. Story two"));
}
