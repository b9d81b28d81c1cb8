//! Validated dimension sequences.
//!
//! A sequence `p[0..=n]` describes `n` matrices where `A_i` has shape
//! `p[i-1] x p[i]`. Once constructed a [`Dimensions`] is immutable and every
//! entry is known to be a positive integer.

use serde_json::Value;

use crate::error::SolveError;

/// Ordered sequence of positive matrix dimensions, length `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions(Vec<u64>);

impl Dimensions {
    /// Validate a raw sequence.
    ///
    /// Fails with [`SolveError::TooFewDimensions`] when fewer than two entries
    /// are given and with [`SolveError::InvalidDimension`] on a zero entry.
    pub fn new(p: Vec<u64>) -> Result<Self, SolveError> {
        if p.len() < 2 {
            return Err(SolveError::TooFewDimensions { len: p.len() });
        }
        if let Some(index) = p.iter().position(|&d| d == 0) {
            return Err(SolveError::InvalidDimension {
                index,
                value: "0".to_string(),
            });
        }
        Ok(Self(p))
    }

    /// Validate a JSON array such as `[10, 30, 5, 60]`.
    ///
    /// Nested arrays and objects are rejected as [`SolveError::NotASequence`];
    /// strings, booleans, fractional or non-positive numbers as
    /// [`SolveError::InvalidDimension`].
    pub fn from_json(value: &Value) -> Result<Self, SolveError> {
        let items = value.as_array().ok_or(SolveError::NotASequence)?;
        if items.len() < 2 {
            return Err(SolveError::TooFewDimensions { len: items.len() });
        }
        let mut p = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Array(_) | Value::Object(_) => return Err(SolveError::NotASequence),
                Value::Number(num) => match num.as_u64() {
                    Some(d) if d > 0 => p.push(d),
                    _ => {
                        return Err(SolveError::InvalidDimension {
                            index,
                            value: num.to_string(),
                        })
                    }
                },
                other => {
                    return Err(SolveError::InvalidDimension {
                        index,
                        value: other.to_string(),
                    })
                }
            }
        }
        Self::new(p)
    }

    /// Extract and validate the `dimensions` field of a request body.
    pub fn from_request(body: &Value) -> Result<Self, SolveError> {
        let dims = body
            .as_object()
            .and_then(|obj| obj.get("dimensions"))
            .ok_or(SolveError::MissingDimensions)?;
        Self::from_json(dims)
    }

    /// Number of matrices `n`.
    #[inline]
    pub fn n(&self) -> usize {
        self.0.len() - 1
    }

    /// Shape `(rows, cols)` of matrix `A_i`, for `1 <= i <= n`.
    #[inline]
    pub fn shape(&self, i: usize) -> (u64, u64) {
        (self.0[i - 1], self.0[i])
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl std::ops::Index<usize> for Dimensions {
    type Output = u64;

    fn index(&self, idx: usize) -> &u64 {
        &self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_follow_adjacent_entries() {
        let d = Dimensions::new(vec![10, 30, 5, 60]).unwrap();
        assert_eq!(d.n(), 3);
        assert_eq!(d.shape(1), (10, 30));
        assert_eq!(d.shape(3), (5, 60));
    }

    #[test]
    fn rejects_short_and_zero() {
        assert_eq!(
            Dimensions::new(vec![5]),
            Err(SolveError::TooFewDimensions { len: 1 })
        );
        assert!(matches!(
            Dimensions::new(vec![5, 0, 3]),
            Err(SolveError::InvalidDimension { index: 1, .. })
        ));
    }

    #[test]
    fn json_rejects_bad_entries() {
        let cases = [
            json!([10, -2, 5]),
            json!([10, 2.5, 5]),
            json!([10, "3", 5]),
            json!([10, null]),
        ];
        for c in cases {
            assert!(
                matches!(
                    Dimensions::from_json(&c),
                    Err(SolveError::InvalidDimension { .. })
                ),
                "accepted {c}"
            );
        }
        assert_eq!(
            Dimensions::from_json(&json!([10, [2, 3]])),
            Err(SolveError::NotASequence)
        );
        assert_eq!(
            Dimensions::from_json(&json!("10,20")),
            Err(SolveError::NotASequence)
        );
    }

    #[test]
    fn request_requires_field() {
        assert_eq!(
            Dimensions::from_request(&json!({ "dims": [1, 2] })),
            Err(SolveError::MissingDimensions)
        );
        assert_eq!(
            Dimensions::from_request(&json!([1, 2])),
            Err(SolveError::MissingDimensions)
        );
        let d = Dimensions::from_request(&json!({ "dimensions": [5, 10] })).unwrap();
        assert_eq!(d.as_slice(), &[5, 10]);
    }
}
