//! Merge history: where the log comes from and how it is read.

pub mod parser;
pub mod source;

pub use parser::{MergeEvent, parse_merge_log};
pub use source::{CommandSource, FileSource, HistorySource, StdinSource};
