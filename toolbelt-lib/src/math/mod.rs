use std::iter::Sum;

/// Add up every value and return the total
///
/// An empty input yields the additive identity of `T`. Integer overflow
/// behaves as `Iterator::sum` does for the chosen type.
#[must_use]
pub fn sum<T, I>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Sum<T>,
{
    values.into_iter().sum()
}

/// Variadic form of [`sum`]: `sum!(1, 10)` is `11`
#[macro_export]
macro_rules! sum {
    ($($value:expr),+ $(,)?) => {
        $crate::math::sum([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_two_arguments() {
        assert_eq!(sum([1, 10]), 11);
    }

    #[test]
    fn test_sum_macro() {
        assert_eq!(crate::sum!(1, 10), 11);
        assert_eq!(crate::sum!(1, 2, 3, 4,), 10);
        assert_eq!(crate::sum!(7), 7);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum::<i64, _>([]), 0);
        assert_eq!(sum::<f64, _>(Vec::new()), 0.0);
    }

    #[test]
    fn test_sum_slice_and_range() {
        let values = vec![3_u32, 4, 5];
        assert_eq!(sum(values.iter().copied()), 12);
        assert_eq!(sum(1..=10), 55);
    }

    #[test]
    fn test_sum_negative_and_float() {
        assert_eq!(sum([-5, 2, 3]), 0);
        assert!((sum([0.5, 0.25]) - 0.75_f64).abs() < f64::EPSILON);
    }
}
