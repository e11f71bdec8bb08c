pub mod config;
pub mod error;
pub mod extractor;
pub mod parsers;
pub mod prompt;
pub mod results;

// Re-export commonly used types for convenience
pub use config::SnaggerConfig;
pub use error::{ParseError, SnagError};
pub use extractor::{Extractor, fetch_info};
pub use results::GameInfo;
