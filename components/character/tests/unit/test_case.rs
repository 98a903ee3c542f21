//! Unit tests for case conversion

use character::{to_lower_case, to_lower_case_units, to_upper_case, to_upper_case_units};

#[test]
fn test_conversion_is_total() {
    for c in 0..=u16::MAX {
        let _ = to_upper_case(c);
        let _ = to_lower_case(c);
    }
}

#[test]
fn test_ascii_letters_round_trip() {
    for b in (b'a'..=b'z').chain(b'A'..=b'Z') {
        let c = u16::from(b);
        assert_eq!(to_lower_case(to_upper_case(c)), to_lower_case(c));
        assert_eq!(to_upper_case(to_lower_case(c)), to_upper_case(c));
        assert_eq!(to_upper_case(c), u16::from(b.to_ascii_uppercase()));
        assert_eq!(to_lower_case(c), u16::from(b.to_ascii_lowercase()));
    }
}

#[test]
fn test_ascii_non_letters_unchanged() {
    for b in 0u8..0x80 {
        if !b.is_ascii_alphabetic() {
            assert_eq!(to_upper_case(u16::from(b)), u16::from(b));
            assert_eq!(to_lower_case(u16::from(b)), u16::from(b));
        }
    }
}

#[test]
fn test_sharp_s_has_no_single_unit_upper() {
    assert_eq!(to_upper_case(0x00DF), 0x00DF);
    assert_eq!(to_lower_case(0x1E9E), 0x00DF);
}

#[test]
fn test_unit_buffers_map_each_unit() {
    let source: Vec<u16> = "Straße ΑΒΓ".encode_utf16().collect();
    let upper: Vec<u16> = "STRAßE ΑΒΓ".encode_utf16().collect();
    let lower: Vec<u16> = "straße αβγ".encode_utf16().collect();
    assert_eq!(to_upper_case_units(&source), upper);
    assert_eq!(to_lower_case_units(&source), lower);
    assert!(to_upper_case_units(&[]).is_empty());
}
