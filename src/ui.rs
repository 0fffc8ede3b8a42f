use std::io::IsTerminal;

fn enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn paint(s: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}

fn status_line(mark: &str, code: &str, label: &str, value: &str, color: bool) -> String {
    let mark = paint(mark, code, color);
    let label = paint(label, &format!("1;{}", code), color);
    format!("{} {} {}", mark, label, value)
}

fn render_numbered(items: &[String], color: bool) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", paint(&(i + 1).to_string(), "36", color), item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn banner(text: &str) -> String {
    format!("📝 {}", paint(text, "1", enabled()))
}

pub fn success_line(label: &str, value: &str) -> String {
    status_line("✓", "32", label, value, enabled())
}

pub fn error_line(label: &str, value: &str) -> String {
    status_line("✗", "31", label, value, enabled())
}

/// One line per file, numbered from 1.
pub fn numbered_list(items: &[String]) -> String {
    render_numbered(items, enabled())
}
