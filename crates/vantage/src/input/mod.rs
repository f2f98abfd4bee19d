//! Dataset loading: CSV-family parsing and source metadata.

mod loader;
mod source;

pub use loader::{Loader, LoaderConfig};
pub use source::{Dataset, SourceMetadata};
