mod formatter;

pub use formatter::{format, format_compact};
