//! Design version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author recorded when the caller does not supply one.
pub const DEFAULT_AUTHOR: &str = "designer";

/// One committed snapshot of the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DesignVersion {
    /// Store-assigned identifier. Never reused.
    pub id: i64,
    /// Sequential, user-facing revision number. Contiguous from 1.
    pub version_number: i32,
    /// Commit message.
    pub commit_message: String,
    /// URL of the PNG snapshot in the blob store.
    pub preview_url: Option<String>,
    /// Free-text author tag.
    pub created_by: String,
    /// When this version was committed.
    pub created_at: DateTime<Utc>,
}

impl DesignVersion {
    /// Whether a PNG snapshot is attached.
    pub fn has_preview(&self) -> bool {
        self.preview_url.is_some()
    }
}

/// Data for a version about to be committed.
///
/// The version number is not part of this struct: the repository assigns
/// it atomically with the insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVersion {
    /// Commit message. `None` yields `"Version {n}"`.
    pub commit_message: Option<String>,
    /// URL of an already uploaded snapshot.
    pub preview_url: Option<String>,
    /// Author tag. `None` yields [`DEFAULT_AUTHOR`].
    pub created_by: Option<String>,
}

impl NewVersion {
    /// The commit message to persist once the number `n` is known.
    pub fn resolved_message(&self, n: i32) -> String {
        match self.commit_message.as_deref() {
            Some(msg) if !msg.trim().is_empty() => msg.to_string(),
            _ => format!("Version {n}"),
        }
    }

    /// The author tag to persist.
    pub fn resolved_author(&self) -> String {
        match self.created_by.as_deref() {
            Some(author) if !author.trim().is_empty() => author.to_string(),
            _ => DEFAULT_AUTHOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_uses_number() {
        let new = NewVersion::default();
        assert_eq!(new.resolved_message(7), "Version 7");
        assert_eq!(new.resolved_author(), "designer");
    }

    #[test]
    fn test_blank_fields_fall_back_to_defaults() {
        let new = NewVersion {
            commit_message: Some("   ".into()),
            preview_url: None,
            created_by: Some(String::new()),
        };
        assert_eq!(new.resolved_message(2), "Version 2");
        assert_eq!(new.resolved_author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_given_values_are_kept_verbatim() {
        let new = NewVersion {
            commit_message: Some(" add logo ".into()),
            preview_url: None,
            created_by: Some("  alice".into()),
        };
        assert_eq!(new.resolved_message(3), " add logo ");
        assert_eq!(new.resolved_author(), "  alice");
    }

    #[test]
    fn test_serializes_camel_case() {
        let version = DesignVersion {
            id: 1,
            version_number: 1,
            commit_message: "init".into(),
            preview_url: None,
            created_by: "designer".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&version).expect("serialize");
        assert_eq!(json["versionNumber"], 1);
        assert_eq!(json["commitMessage"], "init");
        assert!(json["previewUrl"].is_null());
        assert!(json.get("createdAt").is_some());
    }
}
