//! Interactive console surface split across logical submodules.

mod prompts;
mod search;

pub use prompts::{prompt_line, yes_no_menu};
pub use search::run_search_loop;
