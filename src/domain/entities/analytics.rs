//! Usage counters attached to a short link or paste.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Timestamp format the service prints `Created:` fields in.
pub const CREATED_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Usage counters and creation time for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAnalytics {
    /// Visits attributed to people.
    pub views: u64,
    /// Fetches attributed to bots and scrapers.
    pub scrapes: u64,
    /// Creation time, minute precision.
    #[serde(serialize_with = "serialize_created")]
    pub created: NaiveDateTime,
}

impl LinkAnalytics {
    /// Creation time rendered the way the service prints it.
    pub fn created_display(&self) -> String {
        self.created.format(CREATED_FORMAT).to_string()
    }
}

fn serialize_created<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(CREATED_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> LinkAnalytics {
        LinkAnalytics {
            views: 5,
            scrapes: 2,
            created: NaiveDate::from_ymd_opt(2023, 2, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_created_display_uses_service_format() {
        assert_eq!(sample().created_display(), "01/02/2023 10:00");
    }

    #[test]
    fn test_serializes_created_in_service_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["views"], 5);
        assert_eq!(json["scrapes"], 2);
        assert_eq!(json["created"], "01/02/2023 10:00");
    }
}
