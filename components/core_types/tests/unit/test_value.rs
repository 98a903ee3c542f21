//! Unit tests for Value

use core_types::{Value, ValueHandle};
use num_bigint::BigInt;
use std::rc::Rc;

#[cfg(test)]
mod value_is_truthy_tests {
    use super::*;

    #[test]
    fn test_undefined_and_null_are_falsy() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn test_numbers() {
        assert!(!Value::Smi(0).is_truthy());
        assert!(Value::Smi(-1).is_truthy());
        assert!(!Value::Double(0.0).is_truthy());
        assert!(!Value::Double(-0.0).is_truthy());
        assert!(!Value::Double(f64::NAN).is_truthy());
        assert!(Value::Double(f64::INFINITY).is_truthy());
    }

    #[test]
    fn test_strings() {
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::String("false".to_string()).is_truthy());
    }

    #[test]
    fn test_bigints() {
        assert!(!Value::BigInt(BigInt::from(0)).is_truthy());
        assert!(Value::BigInt(BigInt::from(1)).is_truthy());
    }
}

#[cfg(test)]
mod value_to_string_tests {
    use super::*;

    #[test]
    fn test_primitives_to_string() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Smi(-7).to_string(), "-7");
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn test_double_to_string() {
        assert_eq!(Value::Double(42.0).to_string(), "42");
        assert_eq!(Value::Double(1.5).to_string(), "1.5");
        assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Double(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_bigint_to_string() {
        assert_eq!(Value::BigInt(BigInt::from(-12)).to_string(), "-12n");
    }
}

#[cfg(test)]
mod value_type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_each_variant() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Boolean(false).type_of(), "boolean");
        assert_eq!(Value::Smi(1).type_of(), "number");
        assert_eq!(Value::Double(1.0).type_of(), "number");
        assert_eq!(Value::String(String::new()).type_of(), "string");
        assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), "bigint");
    }
}

#[cfg(test)]
mod value_handle_tests {
    use super::*;

    #[test]
    fn test_handle_clones_share_allocation() {
        let handle: ValueHandle = Value::String("shared".to_string()).into_handle();
        let frames: Vec<ValueHandle> = (0..3).map(|_| Rc::clone(&handle)).collect();
        assert!(frames.iter().all(|h| Rc::ptr_eq(h, &handle)));
        assert_eq!(Rc::strong_count(&handle), 4);
    }

    #[test]
    fn test_from_utf16() {
        let units: Vec<u16> = "ΑΒΓ".encode_utf16().collect();
        assert_eq!(Value::from_utf16(&units), Value::String("ΑΒΓ".to_string()));
    }
}
