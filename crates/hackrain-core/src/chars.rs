//! Character constants for the rain and the banner.

/// Characters a falling line draws from.
pub const MATRIX_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Default banner shown above the rain.
pub const BANNER_TEXT: &str = "HACK FRIDAY";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(MATRIX_CHARS.len(), 36);
        assert!(MATRIX_CHARS.iter().all(|c| c.is_ascii_alphanumeric()));
    }
}
