use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Parse a deadline from any of the accepted request forms: RFC 3339,
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Serde adapter for optional deadline fields in request bodies.
pub fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_deadline(&raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid deadline {raw:?}: {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline_rfc3339() {
        let parsed = parse_deadline("2024-06-01T12:30:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T12:30:00+00:00");

        let offset = parse_deadline("2024-06-01T12:30:00+02:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-06-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_deadline_naive_datetime() {
        let parsed = parse_deadline("2024-06-01T12:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }

    #[test]
    fn test_parse_deadline_bare_date() {
        let parsed = parse_deadline("2024-01-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        assert!(parse_deadline("someday").is_err());
        assert!(parse_deadline("").is_err());
        assert!(parse_deadline("2024-13-40").is_err());
    }

    #[test]
    fn test_deserialize_deadline_accepts_absent_field() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_deadline")]
            deadline: Option<DateTime<Utc>>,
        }

        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.deadline.is_none());

        let payload: Payload = serde_json::from_str(r#"{"deadline":"2024-01-01"}"#).unwrap();
        assert_eq!(
            payload.deadline.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }
}
