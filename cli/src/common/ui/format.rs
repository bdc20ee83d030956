//! # dirkit Output Formatting Helpers
//!
//! File: cli/src/common/ui/format.rs
//!
//! Small text helpers shared by the `scaffold` and `tree` commands: horizontal
//! rules for banners and the human-readable file size used in tree output.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Width of the rules framing `dirkit tree` output.
pub const TREE_RULE_WIDTH: usize = 60;
/// Width of the rules framing `dirkit scaffold` output.
pub const SCAFFOLD_RULE_WIDTH: usize = 50;

/// Builds a horizontal rule made of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Formats a byte count as `B`, `KB`, `MB` or `GB` using 1024-based units.
///
/// Byte counts are printed exactly; larger units get one decimal place.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    }
}
