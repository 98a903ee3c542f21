//! A minimal tokenizer stub used to exercise the character predicates the
//! way a real scanner consults them: one UTF-16 code unit at a time.

use character::{
    digit, is_character_escape_sequence, is_decimal_digit, is_hex_digit, is_identifier_part,
    is_identifier_start, is_line_terminator, is_radix_digit, is_regular_expression_char,
    is_regular_expression_class_char, is_regular_expression_first_char, is_white_space,
    radix_digit_value, to_lower_case,
};

/// Token produced by the scanner stub
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier with its code units and its case-folded form
    Identifier { units: Vec<u16>, folded: Vec<u16> },
    /// Numeric literal
    Number(f64),
    /// String literal after escape processing
    String(Vec<u16>),
    /// Regular expression body (without slashes)
    RegExp(Vec<u16>),
    /// Any other single code unit
    Punctuator(u16),
    /// Line terminator (one token per terminator)
    LineTerminator,
}

/// Scanner error
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// String literal not closed before a line terminator or end of input
    UnterminatedString(usize),
    /// Escape not permitted in a string literal (e.g. `\u` without 4 hex digits)
    InvalidEscape(usize),
    /// Regular expression literal not closed on its line
    UnterminatedRegExp(usize),
    /// Prefix such as `0x` with no digits after it
    MissingDigits(usize),
}

/// Scanner over UTF-16 code units
pub struct Scanner {
    units: Vec<u16>,
    position: usize,
    /// Tracks if the previous significant token can end an expression,
    /// which decides whether `/` starts a regular expression
    after_operand: bool,
}

const fn unit(c: u8) -> u16 {
    c as u16
}

impl Scanner {
    /// Create a new scanner for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            units: source.encode_utf16().collect(),
            position: 0,
            after_operand: false,
        }
    }

    /// Scan the whole input
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u16> {
        self.units.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u16> {
        self.units.get(self.position + offset).copied()
    }

    fn advance(&mut self) -> Option<u16> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    fn skip_while(&mut self, pred: impl Fn(u16) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.position += 1;
        }
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.skip_while(is_white_space);
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        if is_line_terminator(c) {
            self.advance();
            return Ok(Some(Token::LineTerminator));
        }

        if c == unit(b'/') && self.peek_at(1) == Some(unit(b'/')) {
            self.skip_while(|c| !is_line_terminator(c));
            return self.next_token();
        }

        let token = if is_identifier_start(c) {
            self.scan_identifier()
        } else if is_decimal_digit(c) {
            self.scan_number()?
        } else if c == unit(b'"') || c == unit(b'\'') {
            self.scan_string(c)?
        } else if c == unit(b'/') && !self.after_operand {
            self.scan_regexp()?
        } else {
            self.advance();
            Token::Punctuator(c)
        };

        self.after_operand = match &token {
            Token::Identifier { .. } | Token::Number(_) | Token::String(_) | Token::RegExp(_) => true,
            Token::Punctuator(p) => *p == unit(b')') || *p == unit(b']'),
            Token::LineTerminator => false,
        };
        Ok(Some(token))
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.position;
        self.advance();
        self.skip_while(is_identifier_part);
        let units = self.units[start..self.position].to_vec();
        let folded = units.iter().map(|&c| to_lower_case(c)).collect();
        Token::Identifier { units, folded }
    }

    fn scan_number(&mut self) -> Result<Token, ScanError> {
        let start = self.position;
        let radix = match (self.peek(), self.peek_at(1).map(to_lower_case)) {
            (Some(zero), Some(x)) if zero == unit(b'0') && x == unit(b'x') => 16,
            (Some(zero), Some(o)) if zero == unit(b'0') && o == unit(b'o') => 8,
            (Some(zero), Some(b)) if zero == unit(b'0') && b == unit(b'b') => 2,
            _ => 10,
        };
        if radix != 10 {
            self.position += 2;
        }

        let digits_start = self.position;
        self.skip_while(|c| is_radix_digit(c, radix));
        if self.position == digits_start {
            return Err(ScanError::MissingDigits(start));
        }

        let value = self.units[digits_start..self.position]
            .iter()
            .filter_map(|&c| radix_digit_value(c))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
        Ok(Token::Number(value))
    }

    fn scan_string(&mut self, quote: u16) -> Result<Token, ScanError> {
        let start = self.position;
        self.advance();
        let mut value = Vec::new();
        loop {
            let c = match self.advance() {
                Some(c) if is_line_terminator(c) => return Err(ScanError::UnterminatedString(start)),
                Some(c) => c,
                None => return Err(ScanError::UnterminatedString(start)),
            };
            if c == quote {
                return Ok(Token::String(value));
            }
            if c != unit(b'\\') {
                value.push(c);
                continue;
            }

            let escape_at = self.position;
            let escaped = self.advance().ok_or(ScanError::UnterminatedString(start))?;
            if is_line_terminator(escaped) {
                // Line continuation contributes nothing
                continue;
            }
            if escaped == unit(b'u') {
                value.push(self.scan_hex_units(4, escape_at)?);
            } else if escaped == unit(b'x') {
                value.push(self.scan_hex_units(2, escape_at)?);
            } else if escaped == unit(b'0') && !self.peek().is_some_and(is_decimal_digit) {
                value.push(0);
            } else if is_character_escape_sequence(escaped) {
                value.push(single_escape_value(escaped));
            } else {
                return Err(ScanError::InvalidEscape(escape_at));
            }
        }
    }

    fn scan_hex_units(&mut self, count: usize, escape_at: usize) -> Result<u16, ScanError> {
        let mut value = 0u16;
        for _ in 0..count {
            match self.advance() {
                Some(c) if is_hex_digit(c) => value = value * 16 + u16::from(digit(c)),
                _ => return Err(ScanError::InvalidEscape(escape_at)),
            }
        }
        Ok(value)
    }

    fn scan_regexp(&mut self) -> Result<Token, ScanError> {
        let start = self.position;
        self.advance();
        let mut body = Vec::new();
        let mut in_class = false;
        let mut first = true;
        loop {
            let c = self.peek().ok_or(ScanError::UnterminatedRegExp(start))?;
            if is_line_terminator(c) {
                return Err(ScanError::UnterminatedRegExp(start));
            }
            if c == unit(b'\\') {
                body.push(c);
                self.advance();
                let escaped = self.advance().ok_or(ScanError::UnterminatedRegExp(start))?;
                if is_line_terminator(escaped) {
                    return Err(ScanError::UnterminatedRegExp(start));
                }
                body.push(escaped);
            } else if in_class {
                self.advance();
                body.push(c);
                if !is_regular_expression_class_char(c) {
                    in_class = false;
                }
            } else if c == unit(b'[') {
                self.advance();
                body.push(c);
                in_class = true;
            } else if c == unit(b'/') {
                if first {
                    return Err(ScanError::UnterminatedRegExp(start));
                }
                self.advance();
                return Ok(Token::RegExp(body));
            } else {
                let plain = if first {
                    is_regular_expression_first_char(c)
                } else {
                    is_regular_expression_char(c)
                };
                if !plain {
                    return Err(ScanError::UnterminatedRegExp(start));
                }
                self.advance();
                body.push(c);
            }
            first = false;
        }
    }
}

fn single_escape_value(c: u16) -> u16 {
    match u8::try_from(c) {
        Ok(b'b') => 0x0008,
        Ok(b'f') => 0x000C,
        Ok(b'n') => 0x000A,
        Ok(b'r') => 0x000D,
        Ok(b't') => 0x0009,
        Ok(b'v') => 0x000B,
        _ => c,
    }
}
