mod analyze;
mod common;

pub use analyze::{AnalyzeArgs, process_analyze};
