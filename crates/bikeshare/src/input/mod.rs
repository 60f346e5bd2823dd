//! Input parsing and dataset loading.

mod loader;
mod parser;
mod source;

pub use loader::DatasetLoader;
pub use parser::{Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
