//! Lexical classification of UTF-16 code units.
//!
//! Every predicate here is total: any `u16`, assigned or not, classifies
//! without error. Surrogate pairs are the tokenizer's business; a lone
//! surrogate simply belongs to none of the interesting classes.

use crate::category::{in_categories, CategorySet, GeneralCategory};
use crate::error::{CharacterError, CharacterResult};

/// End of source
pub const EOS: u16 = 0x0000;

/// Zero width non-joiner
pub const ZWNJ: u16 = 0x200C;
/// Zero width joiner
pub const ZWJ: u16 = 0x200D;
/// Byte order mark
pub const BOM: u16 = 0xFEFF;

/// Tab
pub const TAB: u16 = 0x0009;
/// Vertical tab
pub const VT: u16 = 0x000B;
/// Form feed
pub const FF: u16 = 0x000C;
/// Space
pub const SP: u16 = 0x0020;
/// No-break space
pub const NBSP: u16 = 0x00A0;

/// Line feed
pub const LF: u16 = 0x000A;
/// Carriage return
pub const CR: u16 = 0x000D;
/// Line separator
pub const LS: u16 = 0x2028;
/// Paragraph separator
pub const PS: u16 = 0x2029;

const fn unit(c: u8) -> u16 {
    c as u16
}

/// Check if `c` is one of the "other" Unicode space separators (`USP`).
///
/// These are the `Zs` code units outside the ASCII/Latin-1 range.
#[inline]
pub fn is_usp(c: u16) -> bool {
    matches!(c, 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000)
}

/// Check if `c` is `WhiteSpace`.
///
/// # Examples
///
/// ```
/// use character::is_white_space;
///
/// assert!(is_white_space(0x0009));
/// assert!(!is_white_space(0x0041));
/// ```
#[inline]
pub fn is_white_space(c: u16) -> bool {
    matches!(c, TAB | VT | FF | SP | NBSP) || is_usp(c)
}

/// Check if `c` is a `LineTerminator`.
#[inline]
pub fn is_line_terminator(c: u16) -> bool {
    matches!(c, LF | CR | LS | PS)
}

/// Check if `c` is an ASCII decimal digit.
#[inline]
pub fn is_decimal_digit(c: u16) -> bool {
    (unit(b'0')..=unit(b'9')).contains(&c)
}

/// Check if `c` is a `UnicodeLetter` (Lu, Ll, Lt, Lm, Lo or Nl).
#[inline]
pub fn is_unicode_letter(c: u16) -> bool {
    in_categories(c, CategorySet::LETTER)
}

/// Check if `c` is a `UnicodeCombiningMark` (Mn or Mc).
#[inline]
pub fn is_unicode_combining_mark(c: u16) -> bool {
    in_categories(c, CategorySet::COMBINING_MARK)
}

/// Check if `c` is a `UnicodeDigit` (Nd).
#[inline]
pub fn is_unicode_digit(c: u16) -> bool {
    in_categories(c, GeneralCategory::DecimalNumber.set())
}

/// Check if `c` is `UnicodeConnectorPunctuation` (Pc).
#[inline]
pub fn is_unicode_connector_punctuation(c: u16) -> bool {
    in_categories(c, GeneralCategory::ConnectorPunctuation.set())
}

/// Check if `c` is a hexadecimal digit.
#[inline]
pub fn is_hex_digit(c: u16) -> bool {
    is_decimal_digit(c)
        || (unit(b'A')..=unit(b'F')).contains(&c)
        || (unit(b'a')..=unit(b'f')).contains(&c)
}

/// Check if `c` is a digit in the given radix.
///
/// Letters are accepted in either case for radixes above 10.
///
/// `radix` must be in `2..=36`; callers validate it (see [`check_radix`]).
/// Outside that range the result is meaningless.
///
/// # Examples
///
/// ```
/// use character::is_radix_digit;
///
/// assert!(is_radix_digit(u16::from(b'7'), 8));
/// assert!(!is_radix_digit(u16::from(b'9'), 8));
/// assert!(is_radix_digit(u16::from(b'a'), 16));
/// assert!(!is_radix_digit(u16::from(b'g'), 16));
/// ```
pub fn is_radix_digit(c: u16, radix: u32) -> bool {
    debug_assert!((2..=36).contains(&radix), "radix {} out of range", radix);
    let c = u32::from(c);
    if radix <= 10 {
        return (u32::from(b'0')..u32::from(b'0') + radix).contains(&c);
    }
    let letters = radix - 10;
    (u32::from(b'0')..=u32::from(b'9')).contains(&c)
        || (u32::from(b'A')..u32::from(b'A') + letters).contains(&c)
        || (u32::from(b'a')..u32::from(b'a') + letters).contains(&c)
}

/// Validate a caller-supplied radix.
pub fn check_radix(radix: u32) -> CharacterResult<u32> {
    if (2..=36).contains(&radix) {
        Ok(radix)
    } else {
        Err(CharacterError::InvalidRadix(radix))
    }
}

/// Check if `c` is a `SingleEscapeCharacter`: one of `' " \ b f n r t v`.
#[inline]
pub fn is_single_escape_character(c: u16) -> bool {
    matches!(
        u8::try_from(c),
        Ok(b'\'' | b'"' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't' | b'v')
    )
}

/// Check if `c` is an `EscapeCharacter`.
#[inline]
pub fn is_escape_character(c: u16) -> bool {
    is_single_escape_character(c) || is_decimal_digit(c) || c == unit(b'x') || c == unit(b'u')
}

/// Check if `c` is a `NonEscapeCharacter`.
#[inline]
pub fn is_non_escape_character(c: u16) -> bool {
    !is_escape_character(c) && !is_line_terminator(c)
}

/// Check if `c` may follow a backslash as a `CharacterEscapeSequence`.
///
/// That is everything except line terminators, decimal digits, `x` and `u`.
#[inline]
pub fn is_character_escape_sequence(c: u16) -> bool {
    is_single_escape_character(c) || is_non_escape_character(c)
}

/// Check if `c` can start an identifier.
///
/// A backslash is accepted because it opens a `\uXXXX` escape; resolving the
/// escape is left to the tokenizer.
///
/// # Examples
///
/// ```
/// use character::is_identifier_start;
///
/// assert!(is_identifier_start(u16::from(b'$')));
/// assert!(!is_identifier_start(u16::from(b'5')));
/// ```
#[inline]
pub fn is_identifier_start(c: u16) -> bool {
    is_unicode_letter(c) || c == unit(b'$') || c == unit(b'_') || c == unit(b'\\')
}

/// Check if `c` can continue an identifier.
#[inline]
pub fn is_identifier_part(c: u16) -> bool {
    is_identifier_start(c)
        || is_unicode_combining_mark(c)
        || is_unicode_digit(c)
        || is_unicode_connector_punctuation(c)
        || c == ZWNJ
        || c == ZWJ
}

/// Check if `c` is a plain `RegularExpressionChar` in a literal body.
#[inline]
pub fn is_regular_expression_char(c: u16) -> bool {
    !is_line_terminator(c) && !matches!(u8::try_from(c), Ok(b'\\' | b'/' | b'['))
}

/// Check if `c` is a plain `RegularExpressionFirstChar`.
///
/// Same as [`is_regular_expression_char`] but `*` is also excluded, so that
/// `/*` is never read as an empty-bodied literal.
#[inline]
pub fn is_regular_expression_first_char(c: u16) -> bool {
    is_regular_expression_char(c) && c != unit(b'*')
}

/// Check if `c` is a plain `RegularExpressionClassChar` inside `[...]`.
#[inline]
pub fn is_regular_expression_class_char(c: u16) -> bool {
    !is_line_terminator(c) && c != unit(b']')
}

/// Numeric value of a hexadecimal digit.
///
/// # Panics
///
/// Panics if `c` is not a hex digit. Callers must check with
/// [`is_hex_digit`] first, or use [`try_digit`].
///
/// # Examples
///
/// ```
/// use character::digit;
///
/// assert_eq!(digit(u16::from(b'a')), 10);
/// assert_eq!(digit(u16::from(b'9')), 9);
/// ```
pub fn digit(c: u16) -> u8 {
    match try_digit(c) {
        Ok(value) => value,
        Err(err) => panic!("digit() contract violated: {}", err),
    }
}

/// Numeric value of a hexadecimal digit, or an error for anything else.
pub fn try_digit(c: u16) -> CharacterResult<u8> {
    match u8::try_from(c) {
        Ok(b @ b'0'..=b'9') => Ok(b - b'0'),
        Ok(b @ b'A'..=b'F') => Ok(b - b'A' + 10),
        Ok(b @ b'a'..=b'f') => Ok(b - b'a' + 10),
        _ => Err(CharacterError::NotHexDigit(c)),
    }
}

/// Value of `c` as a digit in radix 36 (`0-9`, then `a-z`/`A-Z` as 10..=35).
///
/// Returns `None` for anything else. Pair with [`is_radix_digit`] to reject
/// digits too large for a smaller radix.
pub fn radix_digit_value(c: u16) -> Option<u32> {
    match u8::try_from(c).ok()? {
        b @ b'0'..=b'9' => Some(u32::from(b - b'0')),
        b @ b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        b @ b'a'..=b'z' => Some(u32::from(b - b'a') + 10),
        _ => None,
    }
}
