use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// A postable event/post record with scheduling fields and the participants
/// linked to it. Field names stay camelCase on the wire and in the persisted
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// Free-text classifier, e.g. "post" or "event". Searched by
    /// case-insensitive substring.
    pub activity_type: String,
    pub description: String,
    /// `YYYY-MM-DD`. Syntax-checked on create only; calendar validity is not
    /// enforced.
    pub date: String,
    /// `HH:MM` by convention.
    pub time: String,
    /// Minutes, stored as a string-encoded positive integer.
    pub duration: String,
    /// Embedded snapshots, copied at link time. Later edits to the source
    /// participant do not propagate here.
    pub participants: Vec<Participant>,
    pub created_at: u64,
    /// Absent until the first mutation, then refreshed on every mutation.
    pub updated_at: Option<u64>,
}

/// Client-supplied fields for creating or updating an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    pub activity_type: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub duration: String,
}
