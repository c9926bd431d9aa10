use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub target: String,
    /// Creation instant. Records written by older deployments may lack it;
    /// the listing service skips those.
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// At-rest form used by the file backend (`links` collection).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SerializableShortLink {
    pub code: String,
    pub target: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<&ShortLink> for SerializableShortLink {
    fn from(link: &ShortLink) -> Self {
        SerializableShortLink {
            code: link.code.clone(),
            target: link.target.clone(),
            created_at: link.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

impl From<SerializableShortLink> for ShortLink {
    fn from(link: SerializableShortLink) -> Self {
        let created_at = link.created_at.and_then(|s| {
            chrono::DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .ok()
        });

        ShortLink {
            code: link.code,
            target: link.target,
            created_at,
        }
    }
}

/// Outcome of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same code already exists; nothing was written.
    Conflict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializable_round_trip() {
        let link = ShortLink {
            code: "abc123".to_string(),
            target: "http://example.com".to_string(),
            created_at: Some(chrono::Utc::now()),
        };

        let stored = SerializableShortLink::from(&link);
        let back = ShortLink::from(stored);

        assert_eq!(back.code, link.code);
        assert_eq!(back.target, link.target);
        assert!(back.created_at.is_some());
    }

    #[test]
    fn test_missing_created_at_survives_deserialization() {
        let json = r#"{"code": "legacy", "target": "http://example.com"}"#;
        let stored: SerializableShortLink = serde_json::from_str(json).unwrap();
        let link = ShortLink::from(stored);

        assert_eq!(link.code, "legacy");
        assert!(link.created_at.is_none());
    }

    #[test]
    fn test_unparseable_created_at_becomes_none() {
        let stored = SerializableShortLink {
            code: "bad".to_string(),
            target: "http://example.com".to_string(),
            created_at: Some("not-a-date".to_string()),
        };
        assert!(ShortLink::from(stored).created_at.is_none());
    }
}
