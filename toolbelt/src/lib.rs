// Demo driver modules
pub mod error;
pub mod format;
pub mod report;
