//! Output formatting utilities

use crate::domain::{Author, DiaryEntry};
use std::collections::BTreeMap;
use std::rc::Rc;

pub const LIST_SEPARATOR: &str = "------------------------------";
const STATS_SEPARATOR: &str = "--------------------------------------------";

/// Format a list of entries, one summary line each
pub fn format_entry_list(entries: &[&DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No entries found!".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{}\n{}\n", entry, LIST_SEPARATOR));
    }
    output
}

/// Numbered author list used when picking an existing author
pub fn format_author_choices(authors: &[Rc<Author>]) -> String {
    let mut output = String::new();
    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, author));
    }
    output
}

/// Per-author entry counts as a fixed-width table
pub fn format_statistics(statistics: &BTreeMap<String, usize>) -> String {
    if statistics.is_empty() {
        return "No entries found!".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", STATS_SEPARATOR));
    output.push_str("|          AUTHOR STATISTICS PAGE          |\n");
    output.push_str(&format!("{}\n", STATS_SEPARATOR));
    output.push_str(&format!("| {:<30} | {} |\n", "AUTHOR", "ENTRIES"));
    output.push_str(&format!("{}\n", STATS_SEPARATOR));
    for (email, count) in statistics {
        output.push_str(&format!("| {:<30} | {:<7} |\n", email, count));
        output.push_str(&format!("{}\n", STATS_SEPARATOR));
    }
    output
}
