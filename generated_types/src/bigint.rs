//! Conversions between the wire-level [`BigInt`] message and
//! [`num::BigInt`].

use std::fmt;

use num::bigint::{ParseBigIntError, Sign};

use crate::BigInt;

impl BigInt {
    /// Decodes the arbitrary-precision value this message carries.
    pub fn get(&self) -> num::BigInt {
        let sign = if self.neg { Sign::Minus } else { Sign::Plus };
        num::BigInt::from_bytes_be(sign, &self.abs)
    }

    /// Parses a decimal string into the wire representation.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigIntError> {
        let value: num::BigInt = s.parse()?;
        Ok(value.into())
    }
}

impl From<num::BigInt> for BigInt {
    fn from(value: num::BigInt) -> Self {
        let (sign, abs) = value.to_bytes_be();
        Self {
            neg: sign == Sign::Minus,
            abs,
        }
    }
}

impl From<&BigInt> for num::BigInt {
    fn from(value: &BigInt) -> Self {
        value.get()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let value = num::BigInt::from(42_000_000_000_i64);
        let price = BigInt::from(value.clone());

        assert_eq!(price.get(), value);
    }

    #[test]
    fn from_decimal_str() {
        let price = BigInt::from_decimal_str("42000000001").unwrap();

        assert_eq!(price.get(), num::BigInt::from(42_000_000_001_i64));
        assert!(BigInt::from_decimal_str("not a number").is_err());
    }

    #[test]
    fn display_decimal() {
        let price = BigInt::from(num::BigInt::from(42_000_000_002_i64));

        assert_eq!(price.to_string(), "42000000002");
    }

    #[test]
    fn magnitude_bytes() {
        // char 'd' has ascii code 100
        let value = BigInt {
            neg: false,
            abs: vec![b'd'],
        };

        assert_eq!(value.to_string(), "100");
    }

    #[test]
    fn negative() {
        let value = BigInt::from_decimal_str("-100000000000000000000000").unwrap();

        assert!(value.neg);
        assert_eq!(value.to_string(), "-100000000000000000000000");
    }

    #[test]
    fn zero_has_empty_magnitude() {
        let zero = BigInt::default();

        assert_eq!(zero.get(), num::BigInt::from(0));
        assert_eq!(zero.to_string(), "0");
    }
}
