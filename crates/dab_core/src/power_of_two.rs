/// Returns the smallest power of two that is greater than or equal to `value`.
///
/// A value of zero gives one, and an exact power of two is returned unchanged.
/// Returns `None` if no such power of two fits in a `usize`.
pub const fn next_power_of_two(value: usize) -> Option<usize> {
    let mut length: usize = 1;
    while length < value {
        length = match length.checked_mul(2) {
            Some(length) => length,
            None => return None,
        };
    }
    Some(length)
}

#[cfg(test)]
mod tests {
    use super::next_power_of_two;

    #[test]
    fn zero_gives_one() {
        assert_eq!(next_power_of_two(0), Some(1));
    }

    #[test]
    fn exact_powers_are_unchanged() {
        for shift in 0..usize::BITS {
            let value = 1usize << shift;
            assert_eq!(next_power_of_two(value), Some(value));
        }
    }

    #[test]
    fn result_is_tight_power_of_two() {
        for value in 1..=4096usize {
            let length = next_power_of_two(value).unwrap();
            assert!(length.is_power_of_two());
            assert!(length >= value);
            // Halving the result must fall below the input, otherwise a smaller power would fit.
            assert!(length == 1 || length/2 < value);
        }
    }

    #[test]
    fn dab_carrier_counts() {
        assert_eq!(next_power_of_two(1536), Some(2048));
        assert_eq!(next_power_of_two(384), Some(512));
        assert_eq!(next_power_of_two(192), Some(256));
        assert_eq!(next_power_of_two(768), Some(1024));
    }

    #[test]
    fn overflow_has_no_power_of_two() {
        let largest = 1usize << (usize::BITS-1);
        assert_eq!(next_power_of_two(largest), Some(largest));
        assert_eq!(next_power_of_two(largest+1), None);
        assert_eq!(next_power_of_two(usize::MAX), None);
    }
}
