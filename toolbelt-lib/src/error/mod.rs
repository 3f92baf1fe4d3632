use thiserror::Error;

/// Failures raised by the utilities that have a restricted input domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    #[error("chunk size must be positive, got {size}")]
    InvalidChunkSize { size: usize },
}
