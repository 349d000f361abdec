//! Filter implementations

pub mod level;
pub mod regex;
pub mod substring;

pub use level::LevelFilter;
pub use regex::RegexFilter;
pub use substring::SubstringFilter;

// Re-export the trait so `use logpipe::filters::*` is self-contained
pub use crate::core::Filter;
