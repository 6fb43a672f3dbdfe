use serde::{Deserialize, Serialize};

/// A named entity that can be linked to zero or more activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// Client-supplied fields for creating or renaming a participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantPayload {
    pub name: String,
}
