//! Parsing: editor markup or plain text into the block model.

mod blocks;
mod dom;
mod runs;

pub use blocks::parse_content;
pub use dom::{parse_markup, Element, Node};
pub use runs::{extract_run_groups, extract_runs};
