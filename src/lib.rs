pub mod cli;
pub mod error;
pub mod intensity;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod slice;
pub mod types;
pub mod volume;
pub mod display_metadata;

// Re-export commonly used functions
pub use display_metadata::print_report;
pub use error::{GeometryError, ProcessError};
pub use pipeline::{convert, ConversionJob, ConversionReport};
