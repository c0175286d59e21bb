//! Human-readable byte counts

const KB: u64 = 1_000;
const MB: u64 = KB * 1_000;
const GB: u64 = MB * 1_000;

/// Format a byte count with decimal units and two decimals, right-aligned
/// to six characters.
///
/// Thresholds are strict: exactly 1,000,000,000 bytes still reads as
/// `1000.00 MB`.
pub fn human_readable(bytes: u64) -> String {
    if bytes > GB {
        format!("{:6.2} GB", bytes as f64 / GB as f64)
    } else if bytes > MB {
        format!("{:6.2} MB", bytes as f64 / MB as f64)
    } else if bytes > KB {
        format!("{:6.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:6.2} B", bytes as f64)
    }
}
