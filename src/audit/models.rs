use serde::{Deserialize, Serialize};

/// One observed inbound request. Lives only in the in-memory ring until
/// evicted or carried out in an archive batch; never persisted on its own.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RequestLogRecord {
    pub method: String,
    pub path: String,
    /// Payload as received, lossy UTF-8. Empty for body-less requests.
    pub body: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl RequestLogRecord {
    pub fn capture(method: &str, path: &str, body: &[u8]) -> Self {
        RequestLogRecord {
            method: method.to_string(),
            path: path.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fields() {
        let record = RequestLogRecord::capture("POST", "/api/criar", b"{\"url\":\"x\"}");
        assert_eq!(record.method, "POST");
        assert_eq!(record.path, "/api/criar");
        assert_eq!(record.body, "{\"url\":\"x\"}");
    }

    #[test]
    fn test_capture_non_utf8_body_is_lossy() {
        let record = RequestLogRecord::capture("POST", "/", &[0xff, 0xfe]);
        assert!(!record.body.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let record = RequestLogRecord::capture("GET", "/abc123", b"");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"/abc123\""));
    }
}
