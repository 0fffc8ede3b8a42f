use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches `--name-status` lines for added, modified and deleted files.
/// Example: `M\tsrc/cache.rs`
static STATUS_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[AMD]\s+(.+)$").expect("Invalid status line regex"));

/// Collect the unique paths named in status lines, keeping first-seen order.
/// Commit subject lines, blank lines and rename/copy lines are skipped.
pub fn extract_changed_files(log: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for line in log.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(caps) = STATUS_LINE_REGEX.captures(line) {
            let path = &caps[1];
            if seen.insert(path.to_string()) {
                files.push(path.to_string());
            }
        }
    }

    files
}
