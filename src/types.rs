//! Core types for the recognition engine.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque identifier for a caller (viewer, sender, or recipient).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallerId(pub String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        CallerId(id.into())
    }
}

impl fmt::Debug for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallerId({})", self.0)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CallerId {
    fn from(s: &str) -> Self {
        CallerId(s.to_string())
    }
}

impl From<String> for CallerId {
    fn from(s: String) -> Self {
        CallerId(s)
    }
}

/// Unique identifier for a recognition (assigned by the service).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecognitionId(pub u64);

impl fmt::Debug for RecognitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecognitionId({})", self.0)
    }
}

impl fmt::Display for RecognitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_micros() as i64)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Role of a caller within the organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Lead,
}

/// Who may see a recognition in general listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
    Anonymous,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "PUBLIC",
            Visibility::Private => "PRIVATE",
            Visibility::Anonymous => "ANONYMOUS",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Visibility::Public),
            "PRIVATE" => Ok(Visibility::Private),
            "ANONYMOUS" => Ok(Visibility::Anonymous),
            other => Err(EngineError::InvalidVisibility(other.to_string())),
        }
    }
}

/// A resolved caller record, owned by the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    pub id: CallerId,
    pub name: String,
    pub role: Role,
    pub team: String,
}

/// A recognition message from one caller to another.
///
/// Immutable once appended to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    /// Unique identifier (assigned by the service).
    pub id: RecognitionId,

    /// Canonical id of the resolved sender.
    pub sender_id: CallerId,

    /// Recipient as supplied by the caller; existence is not checked.
    pub recipient_id: CallerId,

    /// Message body. May be empty.
    pub message: String,

    /// Emoji shorthand. May be empty.
    pub emoji: String,

    /// Read scope for general listings.
    pub visibility: Visibility,

    /// When the recognition was created (assigned by the service).
    pub created_at: Timestamp,
}

/// Request-shaped input for creating a recognition.
///
/// `visibility` is raw text from the host and is validated by the service
/// before anything is written.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionDraft {
    pub sender_id: CallerId,
    pub recipient_id: CallerId,
    pub message: String,
    pub emoji: String,
    pub visibility: String,
}

impl RecognitionDraft {
    pub fn new(
        sender_id: impl Into<CallerId>,
        recipient_id: impl Into<CallerId>,
        message: impl Into<String>,
        emoji: impl Into<String>,
        visibility: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
            message: message.into(),
            emoji: emoji.into(),
            visibility: visibility.into(),
        }
    }
}
