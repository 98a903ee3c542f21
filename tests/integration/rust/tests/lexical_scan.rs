//! Lexical Scan Integration Tests
//!
//! Tests the character component through a scanner:
//! Source -> UTF-16 units -> character predicates -> Tokens

use integration_tests::scanner::{ScanError, Scanner, Token};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Helper function to scan a source string
fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize().expect("Scan failed")
}

fn identifier(source: &str) -> (Vec<u16>, Vec<u16>) {
    match scan(source).as_slice() {
        [Token::Identifier { units, folded }] => (units.clone(), folded.clone()),
        other => panic!("Expected a single identifier, got {:?}", other),
    }
}

/// Test: ASCII identifiers with `$` and `_`
#[test]
fn test_scan_ascii_identifiers() {
    let tokens = scan("$foo _bar9");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Identifier { units: u, .. } if *u == units("$foo")));
    assert!(matches!(&tokens[1], Token::Identifier { units: u, .. } if *u == units("_bar9")));
}

/// Test: Unicode letters, marks and joiners inside identifiers
#[test]
fn test_scan_unicode_identifier() {
    // Cyrillic, a combining acute accent and ZWNJ are all identifier parts
    let (scanned, _) = identifier("имя\u{0301}\u{200C}x");
    assert_eq!(scanned, units("имя\u{0301}\u{200C}x"));

    let (scanned, _) = identifier("λ\u{2040}μ");
    assert_eq!(scanned, units("λ\u{2040}μ"));
}

/// Test: Identifiers cannot start with a combining mark or digit
#[test]
fn test_scan_identifier_start_rules() {
    let tokens = scan("\u{0301}a");
    assert_eq!(tokens[0], Token::Punctuator(0x0301));

    let tokens = scan("9a");
    assert_eq!(tokens[0], Token::Number(9.0));
}

/// Test: Identifiers are case folded with simple mappings
#[test]
fn test_scan_identifier_folding() {
    let (_, folded) = identifier("ÀBCΣ");
    assert_eq!(folded, units("àbcσ"));

    // KELVIN SIGN folds to ASCII k
    let (_, folded) = identifier("\u{212A}ey");
    assert_eq!(folded, units("key"));
}

/// Test: Every Unicode space separator is skipped between tokens
#[test]
fn test_scan_whitespace_variety() {
    let tokens = scan("a\u{00A0}b\u{2003}c\u{3000}d\u{000B}e\u{000C}f\tg");
    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|t| matches!(t, Token::Identifier { .. })));
}

/// Test: Byte order mark is not whitespace
#[test]
fn test_scan_bom_is_punctuator() {
    let tokens = scan("a\u{FEFF}b");
    assert_eq!(tokens[1], Token::Punctuator(0xFEFF));
}

/// Test: All four line terminators
#[test]
fn test_scan_line_terminators() {
    let tokens = scan("a\nb\rc\u{2028}d\u{2029}");
    let terminators = tokens.iter().filter(|t| **t == Token::LineTerminator).count();
    assert_eq!(terminators, 4);
}

/// Test: Line comments end at any line terminator
#[test]
fn test_scan_line_comment() {
    let tokens = scan("a // comment\u{2028}b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Token::LineTerminator);
}

/// Test: Numeric literals in all radixes
#[test]
fn test_scan_numbers() {
    assert_eq!(scan("1234"), vec![Token::Number(1234.0)]);
    assert_eq!(scan("0xFf"), vec![Token::Number(255.0)]);
    assert_eq!(scan("0XfF"), vec![Token::Number(255.0)]);
    assert_eq!(scan("0o17"), vec![Token::Number(15.0)]);
    assert_eq!(scan("0b1011"), vec![Token::Number(11.0)]);
}

/// Test: Digits outside the radix end the literal
#[test]
fn test_scan_number_stops_at_radix() {
    let tokens = scan("0b102");
    assert_eq!(tokens, vec![Token::Number(2.0), Token::Number(2.0)]);
}

/// Test: Radix prefix without digits
#[test]
fn test_scan_missing_digits() {
    assert_eq!(Scanner::new("0x").tokenize(), Err(ScanError::MissingDigits(0)));
    assert_eq!(Scanner::new("a 0bz").tokenize(), Err(ScanError::MissingDigits(2)));
}

/// Test: Single escape characters in string literals
#[test]
fn test_scan_string_single_escapes() {
    let tokens = scan(r#""\b\f\n\r\t\v\"\'\\""#);
    assert_eq!(
        tokens,
        vec![Token::String(vec![
            0x0008, 0x000C, 0x000A, 0x000D, 0x0009, 0x000B, 0x0022, 0x0027, 0x005C
        ])]
    );
}

/// Test: Non-escape characters stand for themselves
#[test]
fn test_scan_string_non_escapes() {
    let tokens = scan("'\\q\\%\\é'");
    assert_eq!(tokens, vec![Token::String(units("q%é"))]);
}

/// Test: Hex and unicode escapes decode through digit values
#[test]
fn test_scan_string_hex_escapes() {
    let tokens = scan(r#""\x41\u00E9\uFFFF\0""#);
    assert_eq!(tokens, vec![Token::String(vec![0x0041, 0x00E9, 0xFFFF, 0x0000])]);
}

/// Test: Line continuation inside a string
#[test]
fn test_scan_string_line_continuation() {
    let tokens = scan("'a\\\u{2028}b'");
    assert_eq!(tokens, vec![Token::String(units("ab"))]);
}

/// Test: Escape errors
#[test]
fn test_scan_string_invalid_escapes() {
    assert_eq!(Scanner::new(r#""\u12G4""#).tokenize(), Err(ScanError::InvalidEscape(2)));
    assert_eq!(Scanner::new(r#""\1""#).tokenize(), Err(ScanError::InvalidEscape(2)));
    assert_eq!(Scanner::new(r#""\xZ0""#).tokenize(), Err(ScanError::InvalidEscape(2)));
}

/// Test: Strings cannot span lines
#[test]
fn test_scan_unterminated_string() {
    assert_eq!(
        Scanner::new("'abc\ndef'").tokenize(),
        Err(ScanError::UnterminatedString(0))
    );
    assert_eq!(Scanner::new("\"abc").tokenize(), Err(ScanError::UnterminatedString(0)));
}

/// Test: Regular expression literal with class and escapes
#[test]
fn test_scan_regexp() {
    let tokens = scan(r"/a[/\]]*\/b/");
    assert_eq!(tokens, vec![Token::RegExp(units(r"a[/\]]*\/b"))]);
}

/// Test: Division after an operand is not a regular expression
#[test]
fn test_scan_division_after_operand() {
    let tokens = scan("a / b");
    assert_eq!(tokens[1], Token::Punctuator(u16::from(b'/')));

    let tokens = scan("(x) / 2");
    assert_eq!(tokens[3], Token::Punctuator(u16::from(b'/')));
}

/// Test: Regular expressions cannot start with `*` or span lines
#[test]
fn test_scan_regexp_errors() {
    assert_eq!(Scanner::new("/*a/").tokenize(), Err(ScanError::UnterminatedRegExp(0)));
    assert_eq!(Scanner::new("/a\n/").tokenize(), Err(ScanError::UnterminatedRegExp(0)));
    assert_eq!(Scanner::new("/[a\n]/").tokenize(), Err(ScanError::UnterminatedRegExp(0)));
}
