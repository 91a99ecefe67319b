//! Post entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry-issued post identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const FIRST: Self = Self(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id a decoded numeric value names, if any.
    ///
    /// Only exact non-negative integers within `u64` range name an id;
    /// fractions, negatives, infinities and NaN name none.
    pub fn from_number(value: f64) -> Option<Self> {
        let in_range = value >= 0.0 && value < u64::MAX as f64;
        (in_range && value.fract() == 0.0).then(|| Self(value as u64))
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short text post
///
/// Serializes as `{"id", "content", "created", "removed"}` with `created`
/// in milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
    pub removed: bool,
}

impl Post {
    pub fn is_live(&self) -> bool {
        !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_created_as_epoch_millis() {
        let post = Post {
            id: PostId::new(1),
            content: "hello".into(),
            created: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            removed: false,
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "content": "hello",
                "created": 1_700_000_000_123_i64,
                "removed": false
            })
        );
    }

    #[test]
    fn post_id_from_number() {
        assert_eq!(PostId::from_number(42.0), Some(PostId::new(42)));
        assert_eq!(PostId::from_number(0.0), Some(PostId::new(0)));
        assert_eq!(PostId::from_number(1e2), Some(PostId::new(100)));
        assert_eq!(PostId::from_number(1.5), None);
        assert_eq!(PostId::from_number(-3.0), None);
        assert_eq!(PostId::from_number(f64::INFINITY), None);
        assert_eq!(PostId::from_number(f64::NAN), None);
        assert_eq!(PostId::from_number(1e20), None);
    }
}
