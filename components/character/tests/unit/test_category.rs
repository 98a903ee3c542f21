//! Unit tests for the general category oracle

use character::{general_category, in_categories, CategorySet, GeneralCategory};

#[test]
fn test_oracle_is_total_over_code_units() {
    let mut letters = 0usize;
    for c in 0..=u16::MAX {
        if CategorySet::LETTER.contains_category(general_category(c)) {
            letters += 1;
        }
    }
    // The BMP holds tens of thousands of letters (CJK alone is over 20k).
    assert!(letters > 40_000);
}

#[test]
fn test_surrogate_block_is_uniform() {
    for c in 0xD800..=0xDFFF {
        assert_eq!(general_category(c), GeneralCategory::Surrogate);
    }
}

#[test]
fn test_private_use_block() {
    assert_eq!(general_category(0xE000), GeneralCategory::PrivateUse);
    assert_eq!(general_category(0xF8FF), GeneralCategory::PrivateUse);
    assert_eq!(general_category(0xF900), GeneralCategory::OtherLetter);
}

#[test]
fn test_noncharacters_are_unassigned() {
    assert_eq!(general_category(0xFFFE), GeneralCategory::Unassigned);
    assert_eq!(general_category(0xFFFF), GeneralCategory::Unassigned);
    assert_eq!(general_category(0xFDD0), GeneralCategory::Unassigned);
}

#[test]
fn test_in_categories_matches_set_membership() {
    let digits = GeneralCategory::DecimalNumber.set();
    assert!(in_categories(u16::from(b'7'), digits));
    assert!(in_categories(0x0967, digits)); // DEVANAGARI DIGIT ONE
    assert!(!in_categories(0x00B2, digits)); // SUPERSCRIPT TWO is No
    assert!(in_categories(0x00B2, GeneralCategory::OtherNumber.set()));
}

#[test]
fn test_category_set_union() {
    let set = GeneralCategory::Control.set() | GeneralCategory::Format.set();
    assert!(in_categories(0x0000, set));
    assert!(in_categories(0x200C, set));
    assert!(!in_categories(u16::from(b'a'), set));
}
