//! Weighted-sum check digits for the 10- and 13-digit book number forms
//!
//! Both functions are pure and usable independently of parsing: the parser
//! calls them to verify a supplied check digit, the formatter to mint a
//! fresh one for the target form. Each tolerates being handed the sequence
//! with or without its trailing check digit and only ever reads the body.

/// Check digit for an SBN or ISBN-10 body.
///
/// Uses the first 9 entries of a 9- or 10-length slice, weighting position
/// `i` (0-indexed) by `10 - i`. The result is in `0..=10`, where 10 is
/// written as the letter 'X'.
pub fn check10(digits: &[u8]) -> u8 {
    let body = if digits.len() > 9 { &digits[..9] } else { digits };
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (10 - i as u32))
        .sum();
    ((11 - sum % 11) % 11) as u8
}

/// Check digit for an ISBN-13 body.
///
/// Uses the first 12 entries of a 12- or 13-length slice, with weights
/// alternating 1, 3, 1, 3, … The result is always in `0..=9`.
pub fn check13(digits: &[u8]) -> u8 {
    let body = if digits.len() > 12 { &digits[..12] } else { digits };
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                u32::from(d)
            } else {
                u32::from(d) * 3
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check10_known_value() {
        assert_eq!(check10(&[0, 3, 0, 6, 4, 0, 6, 1, 5]), 2);
    }

    #[test]
    fn test_check13_known_value() {
        assert_eq!(check13(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]), 7);
    }

    #[test]
    fn test_check10_ignores_supplied_check_digit() {
        assert_eq!(check10(&[0, 3, 0, 6, 4, 0, 6, 1, 5, 2]), 2);
        // a wrong trailing digit must not change the result
        assert_eq!(check10(&[0, 3, 0, 6, 4, 0, 6, 1, 5, 9]), 2);
    }

    #[test]
    fn test_check13_ignores_supplied_check_digit() {
        assert_eq!(check13(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5, 7]), 7);
        assert_eq!(check13(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5, 0]), 7);
    }

    #[test]
    fn test_check10_x_value() {
        // 0-8044-2957-?: the weighted sum leaves remainder 1, so the check
        // digit is ten, written 'X'
        assert_eq!(check10(&[0, 8, 0, 4, 4, 2, 9, 5, 7]), 10);
    }

    #[test]
    fn test_check10_multiple_of_eleven_sum() {
        // a body whose weighted sum is already a multiple of 11 gets check 0
        assert_eq!(check10(&[0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
    }
}
