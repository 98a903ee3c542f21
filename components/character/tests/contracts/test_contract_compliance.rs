//! Contract compliance tests for character
//!
//! These pin the observable behaviour the tokenizer relies on.

use character::*;

fn u(c: char) -> u16 {
    c as u16
}

#[cfg(test)]
mod case_contract_tests {
    use super::*;

    /// Contract: ASCII letters round-trip through both conversions
    #[test]
    fn test_ascii_case_round_trip() {
        for c in ('a'..='z').chain('A'..='Z') {
            let c = u(c);
            assert_eq!(to_lower_case(to_upper_case(c)), to_lower_case(c));
            assert_eq!(to_upper_case(to_lower_case(c)), to_upper_case(c));
        }
    }

    /// Contract: nothing below 'A' has an upper case form
    #[test]
    fn test_below_mapping_range_unchanged() {
        for c in 0..0x41u16 {
            assert_eq!(to_upper_case(c), c);
        }
    }
}

#[cfg(test)]
mod predicate_contract_tests {
    use super::*;

    #[test]
    fn test_white_space_and_line_terminators() {
        assert!(is_white_space(0x0009));
        assert!(!is_white_space(0x0041));
        assert!(is_line_terminator(0x2028));
        assert!(!is_line_terminator(0x0020));
    }

    #[test]
    fn test_identifier_boundaries() {
        assert!(is_identifier_start(u('$')));
        assert!(!is_identifier_start(u('5')));
        assert!(is_identifier_part(u('5')));
    }

    #[test]
    fn test_radix_digits() {
        assert!(!is_radix_digit(u('9'), 8));
        assert!(is_radix_digit(u('7'), 8));
        assert!(is_radix_digit(u('a'), 16));
        assert!(!is_radix_digit(u('g'), 16));
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digit(u('a')), 10);
        assert_eq!(digit(u('9')), 9);
    }

    /// Contract: digit() on a non-hex unit is fatal, never a plausible value
    #[test]
    #[should_panic]
    fn test_digit_contract_violation_is_fatal() {
        digit(u('g'));
    }

    /// Contract: predicates are total, unassigned units classify as nothing
    #[test]
    fn test_unassigned_classifies_as_nothing() {
        let unassigned = 0x0378;
        assert_eq!(general_category(unassigned), GeneralCategory::Unassigned);
        assert!(!is_unicode_letter(unassigned));
        assert!(!is_identifier_part(unassigned));
        assert!(!is_white_space(unassigned));
        assert!(is_non_escape_character(unassigned));
    }
}
