//! Lexical character classes and case folding for UTF-16 code units.
//!
//! The tokenizer consults this crate for every code unit it scans: to find
//! whitespace and line breaks, to decide where identifiers start and stop,
//! to classify escape sequences and regular-expression bodies, and to fold
//! case when canonicalizing names.
//!
//! # Overview
//!
//! - [`general_category`] - Unicode general category oracle for the BMP
//! - [`CategorySet`] - bitset over [`GeneralCategory`]
//! - `is_*` predicates - lexical classes such as [`is_identifier_start`]
//! - [`digit`] / [`try_digit`] - hex digit values
//! - [`to_upper_case`] / [`to_lower_case`] - single-unit case mapping
//!
//! All functions are pure and read only immutable tables, so they can be
//! called from any number of threads without coordination.
//!
//! # Examples
//!
//! ```
//! use character::{is_identifier_part, is_identifier_start, to_upper_case};
//!
//! let source: Vec<u16> = "$value1 = 2".encode_utf16().collect();
//! let end = source
//!     .iter()
//!     .position(|&c| !is_identifier_part(c))
//!     .unwrap_or(source.len());
//!
//! assert!(is_identifier_start(source[0]));
//! assert_eq!(end, 7);
//! assert_eq!(to_upper_case(source[1]), u16::from(b'V'));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod case;
#[rustfmt::skip]
mod case_table;
mod category;
#[rustfmt::skip]
mod category_table;
mod classify;
mod error;

pub use case::{to_lower_case, to_lower_case_units, to_upper_case, to_upper_case_units};
pub use category::{general_category, in_categories, CategorySet, GeneralCategory, UNICODE_VERSION};
pub use classify::{
    check_radix, digit, is_character_escape_sequence, is_decimal_digit, is_escape_character,
    is_hex_digit, is_identifier_part, is_identifier_start, is_line_terminator,
    is_non_escape_character, is_radix_digit, is_regular_expression_char,
    is_regular_expression_class_char, is_regular_expression_first_char,
    is_single_escape_character, is_unicode_combining_mark, is_unicode_connector_punctuation,
    is_unicode_digit, is_unicode_letter, is_usp, is_white_space, radix_digit_value, try_digit,
    BOM, CR, EOS, FF, LF, LS, NBSP, PS, SP, TAB, VT, ZWJ, ZWNJ,
};
pub use error::{CharacterError, CharacterResult};
