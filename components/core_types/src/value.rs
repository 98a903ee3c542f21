//! Language values carried by completion records.
//!
//! Only the primitive values a statement can produce are modelled here.
//! Objects live in the heap owned by the evaluator and are out of scope for
//! this crate.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

/// Shared, non-owning-in-spirit reference to a [`Value`].
///
/// The same value is observed by every statement frame a completion passes
/// through while it unwinds, so completions hold a reference-counted handle
/// rather than a unique allocation.
pub type ValueHandle = Rc<Value>;

/// Represents a primitive JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(String),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
}

impl Value {
    /// Wrap this value in a shareable handle.
    pub fn into_handle(self) -> ValueHandle {
        Rc::new(self)
    }

    /// Build a string value from UTF-16 code units, replacing lone surrogates.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// let units: Vec<u16> = "héllo".encode_utf16().collect();
    /// assert_eq!(Value::from_utf16(&units), Value::String("héllo".to_string()));
    /// ```
    pub fn from_utf16(units: &[u16]) -> Self {
        Value::String(String::from_utf16_lossy(units))
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// Falsy values are undefined, null, false, 0, -0, NaN, `""` and `0n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Smi(0).is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(Value::String("0".to_string()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::BigInt(n) => !n.is_zero(),
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
        }
    }
}

/// Follows JavaScript's `String()` conversion for primitives.
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Smi(42).to_string(), "42");
/// assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::BigInt(n) => write!(f, "{}n", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy_basic() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(!Value::BigInt(BigInt::from(0)).is_truthy());
        assert!(Value::BigInt(BigInt::from(-3)).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Double(2.0).to_string(), "2");
        assert_eq!(Value::Double(0.5).to_string(), "0.5");
        assert_eq!(Value::BigInt(BigInt::from(7)).to_string(), "7n");
    }

    #[test]
    fn test_handles_share_one_value() {
        let handle = Value::Smi(1).into_handle();
        let other = Rc::clone(&handle);
        assert!(Rc::ptr_eq(&handle, &other));
        assert_eq!(Rc::strong_count(&handle), 2);
    }

    #[test]
    fn test_from_utf16_replaces_lone_surrogates() {
        assert_eq!(
            Value::from_utf16(&[0x0061, 0xD800]),
            Value::String("a\u{FFFD}".to_string())
        );
    }
}
