//! Prompt construction from user stories.

/// Split story text into its non-blank lines, in order.
///
/// Lines are kept verbatim; only blank and whitespace-only lines are dropped.
///
/// # Examples
///
/// ```
/// use lynqx_workflow::story_lines;
///
/// let lines = story_lines("As a user I log in\n\n   \nAs a user I log out\n");
/// assert_eq!(lines, vec!["As a user I log in", "As a user I log out"]);
/// ```
pub fn story_lines(story_text: &str) -> Vec<&str> {
    story_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Build the scenario-generation prompt for the given stories.
///
/// Stories are interpolated as-is, numbered in their original order.
///
/// # Examples
///
/// ```
/// use lynqx_workflow::build_prompt;
///
/// let prompt = build_prompt(&["As a user I can reset my password"]);
/// assert!(prompt.contains("1. As a user I can reset my password"));
/// assert!(prompt.contains("TestCaseID: Description — Expected Result"));
/// ```
pub fn build_prompt<S: AsRef<str>>(stories: &[S]) -> String {
    let numbered = stories
        .iter()
        .enumerate()
        .map(|(i, story)| format!("{}. {}", i + 1, story.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an experienced manual QA engineer.\n\
         For each user story below, write 2-3 test scenarios.\n\
         \n\
         User stories:\n\
         {numbered}\n\
         \n\
         For every scenario include:\n\
         - scenario_id: TS followed by a three-digit number (TS001, TS002, ...)\n\
         - scenario_name: a short title, unique across all scenarios\n\
         - scenario_type: Positive, Negative or Edge Case\n\
         - description: what the scenario checks\n\
         - related_user_story: the user story it covers\n\
         - status: Pending Review\n\
         \n\
         Write each scenario on its own line in this format:\n\
         TestCaseID: Description — Expected Result\n\
         \n\
         For example:\n\
         TS001: Successful login — User signs in with valid credentials - Dashboard is shown\n"
    )
}
