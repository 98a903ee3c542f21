//! Unit tests for lexical predicates
//!
//! Most checks here sweep every code unit, comparing a predicate against an
//! independent formulation of the same class.

use character::*;

fn u(c: char) -> u16 {
    c as u16
}

#[test]
fn test_white_space_is_exactly_the_listed_units() {
    let found: Vec<u16> = (0..=u16::MAX).filter(|&c| is_white_space(c)).collect();
    let mut expected = vec![TAB, VT, FF, SP, NBSP, 0x1680];
    expected.extend(0x2000..=0x200A);
    expected.extend([0x202F, 0x205F, 0x3000]);
    expected.sort_unstable();
    assert_eq!(found, expected);
}

#[test]
fn test_usp_is_space_separator_outside_latin1() {
    for c in 0x0100..=u16::MAX {
        let space_separator = general_category(c) == GeneralCategory::SpaceSeparator;
        assert_eq!(is_usp(c), space_separator, "mismatch at {:#06X}", c);
    }
}

#[test]
fn test_line_terminators_are_exactly_four() {
    let count = (0..=u16::MAX).filter(|&c| is_line_terminator(c)).count();
    assert_eq!(count, 4);
}

#[test]
fn test_character_escape_sequence_complement() {
    for c in 0..=u16::MAX {
        let excluded = is_line_terminator(c) || is_decimal_digit(c) || c == u('x') || c == u('u');
        assert_eq!(is_character_escape_sequence(c), !excluded, "mismatch at {:#06X}", c);
    }
}

#[test]
fn test_non_escape_and_escape_are_disjoint() {
    for c in 0..=u16::MAX {
        assert!(!(is_escape_character(c) && is_non_escape_character(c)));
    }
}

#[test]
fn test_identifier_part_contains_identifier_start() {
    for c in 0..=u16::MAX {
        if is_identifier_start(c) {
            assert!(is_identifier_part(c), "{:#06X} starts but cannot continue", c);
        }
    }
}

#[test]
fn test_identifier_ascii_table() {
    for b in 0u8..0x80 {
        let c = u16::from(b);
        let start = b.is_ascii_alphabetic() || b == b'$' || b == b'_' || b == b'\\';
        assert_eq!(is_identifier_start(c), start, "start mismatch at {:?}", b as char);
        assert_eq!(is_identifier_part(c), start || b.is_ascii_digit(), "part mismatch at {:?}", b as char);
    }
}

#[test]
fn test_regular_expression_char_classes_nest() {
    for c in 0..=u16::MAX {
        if is_regular_expression_first_char(c) {
            assert!(is_regular_expression_char(c));
        }
        if is_regular_expression_char(c) {
            assert!(is_regular_expression_class_char(c) || c == u(']'));
        }
    }
}

#[test]
fn test_radix_digit_agrees_with_digit_value() {
    for radix in 2..=36 {
        for c in 0..0x100u16 {
            let expected = radix_digit_value(c).map_or(false, |value| value < radix);
            assert_eq!(is_radix_digit(c, radix), expected, "c={:#04X} radix={}", c, radix);
        }
    }
}

#[test]
fn test_hex_digit_agrees_with_try_digit() {
    for c in 0..=u16::MAX {
        assert_eq!(is_hex_digit(c), try_digit(c).is_ok());
        if let Ok(value) = try_digit(c) {
            assert_eq!(Some(u32::from(value)), radix_digit_value(c));
        }
    }
}

#[test]
fn test_full_width_digits_are_unicode_digits_only() {
    let fullwidth_zero = 0xFF10;
    assert!(is_unicode_digit(fullwidth_zero));
    assert!(is_identifier_part(fullwidth_zero));
    assert!(!is_decimal_digit(fullwidth_zero));
    assert!(!is_hex_digit(fullwidth_zero));
    assert_eq!(try_digit(fullwidth_zero), Err(CharacterError::NotHexDigit(fullwidth_zero)));
}

#[test]
fn test_bom_is_not_classified_as_space_or_identifier() {
    assert!(!is_white_space(BOM));
    assert!(!is_identifier_part(BOM));
    assert_eq!(EOS, 0);
}
