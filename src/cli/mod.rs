//! CLI layer - Arguments, prompts and output

pub mod commands;
pub mod output;
pub mod parsing;
pub mod prompt;

pub use commands::Cli;
pub use output::{format_author_choices, format_entry_list, format_statistics};
pub use prompt::Prompter;
