//! Shallow field-level comparison of two versions.

use serde::{Deserialize, Serialize};

use super::model::DesignVersion;

/// Which compared fields differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionChanges {
    pub preview_url_changed: bool,
    pub commit_message_changed: bool,
}

/// Both versions plus their field-level differences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    pub version1: DesignVersion,
    pub version2: DesignVersion,
    pub changes: VersionChanges,
}

impl VersionDiff {
    /// Compare two versions. This is not a pixel diff.
    pub fn between(version1: DesignVersion, version2: DesignVersion) -> Self {
        let changes = VersionChanges {
            preview_url_changed: version1.preview_url != version2.preview_url,
            commit_message_changed: version1.commit_message != version2.commit_message,
        };
        Self {
            version1,
            version2,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn version(n: i32, message: &str, preview: Option<&str>) -> DesignVersion {
        DesignVersion {
            id: i64::from(n),
            version_number: n,
            commit_message: message.to_string(),
            preview_url: preview.map(String::from),
            created_by: "designer".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_identical_fields_report_no_changes() {
        let diff = VersionDiff::between(
            version(1, "same", Some("s3://a.png")),
            version(2, "same", Some("s3://a.png")),
        );
        assert!(!diff.changes.preview_url_changed);
        assert!(!diff.changes.commit_message_changed);
    }

    #[test]
    fn test_each_field_is_flagged_independently() {
        let diff = VersionDiff::between(version(1, "a", None), version(2, "a", Some("x")));
        assert!(diff.changes.preview_url_changed);
        assert!(!diff.changes.commit_message_changed);

        let diff = VersionDiff::between(version(1, "a", None), version(2, "b", None));
        assert!(!diff.changes.preview_url_changed);
        assert!(diff.changes.commit_message_changed);
    }

    #[test]
    fn test_json_shape() {
        let diff = VersionDiff::between(version(1, "a", None), version(2, "b", None));
        let json = serde_json::to_value(&diff).expect("serialize");
        assert_eq!(json["version1"]["versionNumber"], 1);
        assert_eq!(json["changes"]["commitMessageChanged"], true);
        assert_eq!(json["changes"]["previewUrlChanged"], false);
    }
}
