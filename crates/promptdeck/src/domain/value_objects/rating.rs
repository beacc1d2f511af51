//! Rating - Star rating attached to a feedback submission

use serde_json::Value;

use crate::domain::errors::DomainError;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Star rating in the range 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating)
        }
    }

    /// Interpret a raw JSON value from a submission.
    ///
    /// `null` and empty strings mean "no rating". Integers, integral floats,
    /// and strings holding an integer are accepted; everything else is
    /// rejected.
    pub fn from_json(value: &Value) -> Result<Option<Self>, DomainError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Self::new(i).map(Some);
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.is_finite() => Self::new(f as i64).map(Some),
                    _ => Err(DomainError::InvalidRating),
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<i64>()
                    .map_err(|_| DomainError::InvalidRating)
                    .and_then(Self::new)
                    .map(Some)
            }
            _ => Err(DomainError::InvalidRating),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// `value` filled stars followed by `5 - value` empty ones
    pub fn stars(&self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX - self.0) as usize;
        let mut line = String::with_capacity((filled + empty) * FILLED_STAR.len_utf8());
        line.extend(std::iter::repeat(FILLED_STAR).take(filled));
        line.extend(std::iter::repeat(EMPTY_STAR).take(empty));
        line
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
