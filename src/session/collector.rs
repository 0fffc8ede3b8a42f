use super::input::LineSource;
use crate::error::Result;
use crate::format::{self, ChangeRecord};
use crate::ui;

/// Line that ends the description.
pub const DESCRIPTION_TERMINATOR: &str = ".";

/// The questions asked during a session, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Title,
    EditFiles,
    FileList,
    DescriptionLine,
    Notes,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Title => "Enter update title: ",
            Prompt::EditFiles => "Edit the file list? (y/n): ",
            Prompt::FileList => "Enter comma-separated list of files: ",
            Prompt::DescriptionLine => "",
            Prompt::Notes => "Enter additional notes: ",
        }
    }
}

fn ask(source: &mut dyn LineSource, prompt: Prompt) -> Result<Option<String>> {
    source.read_line(prompt.text())
}

/// Ask and treat end of input as an empty answer.
fn ask_or_empty(source: &mut dyn LineSource, prompt: Prompt) -> Result<String> {
    Ok(ask(source, prompt)?.unwrap_or_default())
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Walk the operator through one change record.
///
/// `detected` is the file list found in history. When it's non-empty the
/// operator may replace it; declining keeps it as-is. When it's empty the
/// file list is always asked for.
pub fn collect(source: &mut dyn LineSource, detected: Vec<String>) -> Result<ChangeRecord> {
    let title = ask_or_empty(source, Prompt::Title)?;

    let files = if detected.is_empty() {
        format::parse_file_list(&ask_or_empty(source, Prompt::FileList)?)
    } else {
        source.show("\nDetected changed files:")?;
        source.show(&ui::numbered_list(&detected))?;
        if is_affirmative(&ask_or_empty(source, Prompt::EditFiles)?) {
            format::parse_file_list(&ask_or_empty(source, Prompt::FileList)?)
        } else {
            detected
        }
    };

    source.show(
        "\nEnter description (multi-line, end with a single dot \".\" on its own line):",
    )?;
    let mut description = String::new();
    while let Some(line) = ask(source, Prompt::DescriptionLine)? {
        if line == DESCRIPTION_TERMINATOR {
            break;
        }
        description.push_str(&format::description_bullet(&line));
    }

    let notes = ask_or_empty(source, Prompt::Notes)?;

    Ok(ChangeRecord {
        title,
        description,
        files,
        notes,
    })
}
