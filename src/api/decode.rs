//! Decoding of the service's plain-text analytics bodies.
//!
//! An analytics document carries `Views:`, `Scrapes:`, and `Created:` lines.
//! Decoding is keyed on the field names, so line order does not matter and
//! unknown lines are skipped; a document missing any of the three named
//! fields is a decode error.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::entities::{CREATED_FORMAT, LinkAnalytics};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsDecodeError {
    #[error("missing `{0}` field")]
    MissingField(&'static str),

    #[error("invalid `{field}` value `{value}`")]
    InvalidField { field: &'static str, value: String },
}

/// Decodes an analytics body into counters and a creation time.
pub fn decode_analytics(body: &str) -> Result<LinkAnalytics, AnalyticsDecodeError> {
    let mut views = None;
    let mut scrapes = None;
    let mut created = None;

    for line in body.lines() {
        // Split at the first colon; the `Created` value keeps its own.
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match label.trim() {
            "Views" => views = Some(parse_count("Views", value)?),
            "Scrapes" => scrapes = Some(parse_count("Scrapes", value)?),
            "Created" => {
                created = Some(NaiveDateTime::parse_from_str(value, CREATED_FORMAT).map_err(
                    |_| AnalyticsDecodeError::InvalidField {
                        field: "Created",
                        value: value.to_string(),
                    },
                )?);
            }
            _ => {}
        }
    }

    Ok(LinkAnalytics {
        views: views.ok_or(AnalyticsDecodeError::MissingField("Views"))?,
        scrapes: scrapes.ok_or(AnalyticsDecodeError::MissingField("Scrapes"))?,
        created: created.ok_or(AnalyticsDecodeError::MissingField("Created"))?,
    })
}

fn parse_count(field: &'static str, value: &str) -> Result<u64, AnalyticsDecodeError> {
    value
        .parse()
        .map_err(|_| AnalyticsDecodeError::InvalidField {
            field,
            value: value.to_string(),
        })
}
