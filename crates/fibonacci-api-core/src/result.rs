//! Response records returned by the calculator.
//!
//! Fibonacci values are written as bare JSON integer literals of any length,
//! so clients receive exact numbers rather than strings or lossy floats.

use num_bigint::BigUint;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Result of `GET /fibonacci/{n}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleResult {
    /// The requested index.
    pub input: i64,
    /// F(input).
    #[serde(serialize_with = "serialize_integer")]
    pub fibonacci: BigUint,
    /// Elapsed computation time, rounded to 6 decimal places.
    pub calculation_time_seconds: f64,
}

/// Result of `GET /fibonacci/sequence/{count}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResult {
    /// The requested number of terms.
    pub count: i64,
    /// F(0) through F(count - 1), in index order.
    #[serde(serialize_with = "serialize_integers")]
    pub sequence: Vec<BigUint>,
    /// Elapsed time for the whole sequence, rounded to 6 decimal places.
    pub calculation_time_seconds: f64,
}

struct Integer<'a>(&'a BigUint);

impl Serialize for Integer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.to_str_radix(10)).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

fn serialize_integer<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    Integer(value).serialize(serializer)
}

fn serialize_integers<S: Serializer>(
    values: &[BigUint],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&Integer(value))?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_result_json() {
        let result = SingleResult {
            input: 10,
            fibonacci: BigUint::from(55u32),
            calculation_time_seconds: 0.000_012,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["input"], 10);
        assert_eq!(json["fibonacci"], 55);
        assert_eq!(json["calculation_time_seconds"], 0.000_012);
    }

    #[test]
    fn test_large_integer_stays_exact() {
        let value: BigUint = "354224848179261915075".parse().unwrap();
        let result = SingleResult {
            input: 100,
            fibonacci: value,
            calculation_time_seconds: 0.0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""fibonacci":354224848179261915075,"#));
    }

    #[test]
    fn test_sequence_result_json() {
        let result = SequenceResult {
            count: 5,
            sequence: [0u32, 1, 1, 2, 3].into_iter().map(BigUint::from).collect(),
            calculation_time_seconds: 0.0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"count":5,"sequence":[0,1,1,2,3],"calculation_time_seconds":0.0}"#
        );
    }
}
