use std::collections::HashSet;
use std::hash::Hash;
use crate::error::UtilError;

/// Split `items` into consecutive chunks of `size` elements
///
/// The final chunk holds whatever remains, so its length is in `1..=size`.
/// An empty input produces no chunks.
///
/// # Errors
///
/// Returns [`UtilError::InvalidChunkSize`] if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, UtilError> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize { size });
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Keep the first occurrence of each distinct value, in input order
#[must_use]
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Like [`unique`], for types that only implement `PartialEq` (floats)
///
/// Comparison uses `==`, so a `NaN` never matches an earlier `NaN` and every
/// one of them is kept. Runs in quadratic time.
#[must_use]
pub fn unique_by_eq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
