use std::fmt::Display;

/// Width used by [`pad_with_zero`] when no size is given.
pub const DEFAULT_PAD_WIDTH: usize = 2;

/// Left pad the decimal form of `number` with `'0'` to at least `size` characters.
///
/// `None` and `Some(0)` both fall back to [`DEFAULT_PAD_WIDTH`]. Longer values are never
/// truncated.
///
/// ```
/// use giveth_test_utils::format::pad_with_zero;
///
/// assert_eq!(pad_with_zero(7, Some(3)), "007");
/// assert_eq!(pad_with_zero(7, None), "07");
/// assert_eq!(pad_with_zero(1234, Some(2)), "1234");
/// ```
pub fn pad_with_zero(number: impl Display, size: Option<usize>) -> String {
    let width = match size {
        None | Some(0) => DEFAULT_PAD_WIDTH,
        Some(size) => size,
    };

    format!("{:0>width$}", number.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_numbers() {
        assert_eq!(pad_with_zero(7, Some(3)), "007");
        assert_eq!(pad_with_zero(0, None), "00");
        assert_eq!(pad_with_zero(9u8, Some(0)), "09");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(pad_with_zero(1234, Some(2)), "1234");
        assert_eq!(pad_with_zero(12, Some(2)), "12");
    }

    /// The sign counts toward the width and the zeros go in front of it.
    #[test]
    fn pads_the_string_form_of_negative_numbers() {
        assert_eq!(pad_with_zero(-7, Some(3)), "0-7");
    }
}
