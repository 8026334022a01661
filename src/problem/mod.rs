// Validating input and reporting what was found

mod present;
mod verdict;

// Re-export all public symbols
pub use present::*;
pub use verdict::*;
