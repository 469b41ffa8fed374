//! Shared utilities: error taxonomy, console printing, verbose logging.

pub mod errors;
pub mod logger;
pub mod printer;

pub use errors::{ClassificationError, GenerationError, TraitError};
pub use logger::Logger;
pub use printer::{Printer, PrinterColor};
