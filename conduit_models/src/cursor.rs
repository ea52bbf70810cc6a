//! Opaque resume points for cursor based paging.
//!
//! A [`Cursor`] wraps a single ordering key. The key never crosses the API
//! boundary directly: callers only ever see the string produced by
//! [`Cursor::encode`] and hand it back to [`Cursor::decode`] to resume.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// An ordering key which can be used as the value of a [`Cursor`].
///
/// Implementations must provide a stable encoding: the same logical value
/// always encodes to the same string, and [`CursorValue::decode_value`] is
/// its inverse.
pub trait CursorValue: Sized + Clone + Ord {
    fn encode_value(&self) -> String;
    fn decode_value(encoded: &str) -> Result<Self, CursorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("Failed to parse cursor {0:?}.")]
    Parse(String),
    #[error("Cannot encode a cursor without a value.")]
    NullValue,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor<T>(Option<T>);

impl<T: CursorValue> Cursor<T> {
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// A cursor which does not wrap any value. Encoding it fails with
    /// [`CursorError::NullValue`].
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.0
    }

    pub fn encode(&self) -> Result<String, CursorError> {
        self.0
            .as_ref()
            .map(CursorValue::encode_value)
            .ok_or(CursorError::NullValue)
    }

    /// Decodes a cursor string received from a client.
    ///
    /// A missing string means "no cursor" and is not an error.
    pub fn decode(encoded: Option<&str>) -> Result<Option<T>, CursorError> {
        encoded.map(T::decode_value).transpose()
    }
}

impl<T: CursorValue> From<T> for Cursor<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: CursorValue> From<Option<T>> for Cursor<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

/// Timestamps are encoded as milliseconds since the unix epoch and always
/// decoded into UTC.
impl CursorValue for DateTime<Utc> {
    fn encode_value(&self) -> String {
        self.timestamp_millis().to_string()
    }

    fn decode_value(encoded: &str) -> Result<Self, CursorError> {
        encoded
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| CursorError::Parse(encoded.into()))
    }
}

impl CursorValue for i64 {
    fn encode_value(&self) -> String {
        self.to_string()
    }

    fn decode_value(encoded: &str) -> Result<Self, CursorError> {
        encoded
            .parse()
            .map_err(|_| CursorError::Parse(encoded.into()))
    }
}
