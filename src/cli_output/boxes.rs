//! Simple line-based building blocks for terminal output.
//!
//! Each helper appends to a `String` so views can be rendered and tested
//! without touching stdout.

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const UNKNOWN: &str = "?";
    pub const BULLET: &str = "•";
}

/// Main header.
///
/// ```text
/// ACTS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn push_header(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"═".repeat(LINE_WIDTH));
    out.push('\n');
}

/// Section heading.
///
/// ```text
/// COMMENTS
/// ────────────────────────────────────────────────────────────
/// ```
pub fn push_section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"─".repeat(LINE_WIDTH));
    out.push('\n');
}

/// Indented line with a leading icon.
///
/// ```text
///   ✓ API Service: UP
/// ```
pub fn push_line(out: &mut String, icon: &str, message: &str) {
    out.push_str(&format!("  {} {}\n", icon, message));
}

/// Indented `label: value` pair with the value column aligned.
pub fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<14}{}\n", format!("{}:", label), value));
}

/// Plain indented text.
pub fn push_text(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str(&format!("  {}\n", line));
    }
}
