//! CSV output formatting for CIDR blocks.

use super::terminal::format_field;
use crate::models::Ipv4;

/// CSV header line, aligned with the rows.
pub fn csv_header() -> String {
    format!(
        "{},{},{},{}",
        format_field("cidr", 20),
        format_field("first", 17),
        format_field("last", 17),
        format_field("size", 13),
    )
}

/// Render blocks as CSV lines, header first. No blocks gives no lines.
pub fn csv_lines(blocks: &[Ipv4]) -> Vec<String> {
    if blocks.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(blocks.len() + 1);
    lines.push(csv_header());
    lines.extend(blocks.iter().map(csv_row));
    lines
}

/// Format a single CSV row.
fn csv_row(block: &Ipv4) -> String {
    format!(
        "{cidr},{first},{last},{size}",
        cidr = format_field(block, 20),
        first = format_field(block.lo(), 17),
        last = format_field(block.hi(), 17),
        size = format_field(block.size(), 13),
    )
}
