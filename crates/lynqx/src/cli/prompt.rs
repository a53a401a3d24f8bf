//! Prompt preview command handler.

use lynqx::{
    LynqxResult, ValidationError, ValidationErrorKind, build_prompt, read_stories, story_lines,
};
use std::path::Path;

/// Print the generation prompt for a story file. Needs no credential.
pub fn print_prompt(stories: &Path) -> LynqxResult<()> {
    let text = read_stories(stories)?;
    let lines = story_lines(&text);
    if lines.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyStories).into());
    }

    println!("{}", build_prompt(&lines));
    Ok(())
}
