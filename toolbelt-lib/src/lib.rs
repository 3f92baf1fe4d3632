//! Small, pure string and sequence helpers.
//!
//! Every function here is a standalone transformation: inputs are borrowed,
//! outputs are freshly allocated, and nothing holds state between calls.

pub mod array;
pub mod error;
pub mod math;
pub mod string;

pub use array::{chunk, unique, unique_by_eq};
pub use error::UtilError;
pub use math::sum;
pub use string::{capitalize, kebab_case};
