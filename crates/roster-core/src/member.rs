use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// A member record as stored in the `members` collection.
///
/// Field names on the wire match the stored documents (`_id`, `firstName`,
/// `lastName`, `email`). Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl Member {
    /// Create a member without an id. Adapters assign one on insert.
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: String::new(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    /// Builder-style id setter.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Parse a member from an arbitrary JSON value.
    ///
    /// Unknown fields are ignored so that documents written by other tools
    /// still load.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(RosterError::BadRequest(
                "member must be a JSON object".into(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// First and last name joined by a single space, parts taken verbatim.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Project to the shape returned by the member lookup endpoint.
    pub fn summary(&self) -> MemberSummary {
        MemberSummary {
            id: self.id.clone(),
            name: self.display_name(),
            email: self.email.clone(),
        }
    }
}

/// Public projection of a member: identifier, display name, and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

/// Database information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbInfo {
    pub db_name: String,
    pub member_count: u64,
}

/// Options for listing members in natural (insertion) order.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub skip: usize,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            skip: 0,
        }
    }
}

/// Result of a single write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutResult {
    pub ok: bool,
    pub id: String,
}
