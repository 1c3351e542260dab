/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Live formatting of North American phone numbers.
//!
//! The contact form reformats the phone input on every keystroke into
//! `DDD-DDD-DDDD`. Partial input is formatted as far as it goes, so typing
//! `12345` shows `123-45`.

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

const GROUPS: [usize; 3] = [3, 3, 4];

/// Keep only the ASCII digits of `value`.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Reformat raw input into `DDD-DDD-DDDD`.
///
/// Anything that is not an ASCII digit is dropped and digits past the tenth
/// are truncated. Applying the formatter to its own output returns the same
/// string.
pub fn format_phone(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(PHONE_DIGITS + 2);
    let mut rest = digits.as_slice();
    for size in GROUPS {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at(size.min(rest.len()));
        if !formatted.is_empty() {
            formatted.push('-');
        }
        formatted.extend(group);
        rest = tail;
    }
    formatted
}

/// True when `value` carries exactly [`PHONE_DIGITS`] digits.
pub fn is_complete_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_number() {
        assert_eq!(format_phone("1234567890"), "123-456-7890");
    }

    #[test]
    fn formats_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("1234"), "123-4");
        assert_eq!(format_phone("12345"), "123-45");
        assert_eq!(format_phone("123456"), "123-456");
        assert_eq!(format_phone("1234567"), "123-456-7");
    }

    #[test]
    fn strips_punctuation_and_letters() {
        assert_eq!(format_phone("(813) 921-1717"), "813-921-1717");
        assert_eq!(format_phone("+1 abc"), "1");
        assert_eq!(format_phone("phone"), "");
    }

    #[test]
    fn truncates_digits_past_ten() {
        assert_eq!(format_phone("123456789012345"), "123-456-7890");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Arabic-Indic digits are not phone digits for this form.
        assert_eq!(format_phone("١٢٣456"), "456");
    }

    #[test]
    fn reformatting_is_idempotent() {
        let samples = [
            "",
            "9",
            "12",
            "12345",
            "123-45",
            "1234567890",
            "123-456-7890",
            "  (555) 010-9999 ext 12",
            "--1--2--3--",
            "98765432109876",
        ];
        for sample in samples {
            let once = format_phone(sample);
            let twice = format_phone(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
            assert_eq!(phone_digits(&once), phone_digits(&twice));
        }
    }

    #[test]
    fn completeness_counts_digits_only() {
        assert!(is_complete_phone("123-456-7890"));
        assert!(is_complete_phone("(123) 456 7890"));
        assert!(!is_complete_phone("123-456-789"));
        assert!(!is_complete_phone("123-456-78901"));
        assert!(!is_complete_phone(""));
    }
}
