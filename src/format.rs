use chrono::NaiveDate;

/// Everything the operator told us about one change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRecord {
    pub title: String,
    /// Already bulleted: one `- text\n` per line.
    pub description: String,
    pub files: Vec<String>,
    pub notes: String,
}

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Turn one description line into a bullet, newline included.
pub fn description_bullet(line: &str) -> String {
    format!("- {}\n", line)
}

/// Split a comma-separated file list, trimming entries and dropping empty ones.
pub fn parse_file_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render one entry block:
///
/// ```text
/// ### <date>
///
/// #### <title>
/// <description>
///
/// **Files:**
/// - <file>
///
/// **Notes:**
/// <notes>
///
/// ---
///
/// ```
pub fn render_entry(date: NaiveDate, record: &ChangeRecord) -> String {
    let files = record
        .files
        .iter()
        .map(|f| format!("- {}", f))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "### {}\n\n#### {}\n{}\n\n**Files:**\n{}\n\n**Notes:**\n{}\n\n---\n\n",
        format_date(date),
        record.title,
        record.description,
        files,
        record.notes
    )
}
