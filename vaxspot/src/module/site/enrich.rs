//! Derived per-site values: distance and data freshness

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use thiserror::Error;

use super::distance::distance_miles;
use super::Coordinate;
use crate::module::feed::Site;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("site {site_id}: cannot parse {field} timestamp {value:?}")]
    Timestamp {
        site_id: String,
        field: &'static str,
        value: Option<String>,
    },

    #[error("site {0}: no coordinates")]
    MissingCoordinates(String),
}

/// A filtered site with its derived values
#[derive(Debug, Clone)]
pub struct EnrichedSite<'a> {
    pub site: &'a Site,
    pub distance_miles: f64,
    pub last_modified_ago: Duration,
    pub last_fetched_ago: Duration,
}

impl EnrichedSite<'_> {
    pub fn appointment_count(&self) -> usize {
        self.site.appointments.len()
    }
}

/// Parse a feed timestamp into UTC.
///
/// Offset-less values are read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn elapsed_since(
    site: &Site,
    field: &'static str,
    value: Option<&String>,
    now: DateTime<Utc>,
) -> Result<Duration, EnrichError> {
    value
        .and_then(|v| parse_timestamp(v))
        .map(|then| now - then)
        .ok_or_else(|| EnrichError::Timestamp {
            site_id: site.id.clone(),
            field,
            value: value.cloned(),
        })
}

pub fn enrich_site<'a>(
    site: &'a Site,
    reference: Coordinate,
    now: DateTime<Utc>,
) -> Result<EnrichedSite<'a>, EnrichError> {
    let coordinate = site
        .coordinate()
        .ok_or_else(|| EnrichError::MissingCoordinates(site.id.clone()))?;

    Ok(EnrichedSite {
        site,
        distance_miles: distance_miles(reference, coordinate),
        last_modified_ago: elapsed_since(
            site,
            "appointments_last_modified",
            site.appointments_last_modified.as_ref(),
            now,
        )?,
        last_fetched_ago: elapsed_since(
            site,
            "appointments_last_fetched",
            site.appointments_last_fetched.as_ref(),
            now,
        )?,
    })
}

/// Enrich every site against the same `now`. Fails on the first bad site.
pub fn enrich_sites<'a>(
    sites: &[&'a Site],
    reference: Coordinate,
    now: DateTime<Utc>,
) -> Result<Vec<EnrichedSite<'a>>, EnrichError> {
    sites
        .iter()
        .map(|&site| enrich_site(site, reference, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::site::filter::tests::{REF_LAT, REF_LON, site_north};
    use chrono::TimeZone;

    fn reference() -> Coordinate {
        Coordinate::new(REF_LAT, REF_LON)
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2021, 4, 20, 19, 7, 43).unwrap();

        assert_eq!(parse_timestamp("2021-04-20T19:07:43+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2021-04-20T12:07:43-07:00"), Some(expected));
        assert_eq!(parse_timestamp("2021-04-20T19:07:43Z"), Some(expected));
        assert_eq!(parse_timestamp("2021-04-20T19:07:43+0000"), Some(expected));
        assert_eq!(parse_timestamp("2021-04-20T19:07:43"), Some(expected));
        assert_eq!(parse_timestamp("2021-04-20 19:07:43"), Some(expected));

        let millis = parse_timestamp("2021-04-20T19:07:43.134+00:00").unwrap();
        assert_eq!(millis.timestamp_subsec_millis(), 134);

        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_enrich_site() {
        let now = Utc.with_ymd_and_hms(2021, 4, 20, 20, 0, 0).unwrap();
        let site = site_north("a", 10.0);

        let enriched = enrich_site(&site, reference(), now).unwrap();
        assert!((9.9..10.1).contains(&enriched.distance_miles));
        assert_eq!(enriched.last_modified_ago, Duration::hours(1));
        assert_eq!(enriched.last_fetched_ago, Duration::minutes(55));
        assert_eq!(enriched.appointment_count(), 2);
    }

    #[test]
    fn test_enrich_shares_now() {
        let now = Utc.with_ymd_and_hms(2021, 4, 20, 20, 0, 0).unwrap();
        let a = site_north("a", 10.0);
        let b = site_north("b", 20.0);

        let enriched = enrich_sites(&[&a, &b], reference(), now).unwrap();
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].last_modified_ago, enriched[1].last_modified_ago);
        assert!(enriched[0].distance_miles < enriched[1].distance_miles);
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let now = Utc::now();
        let mut site = site_north("a", 1.0);
        site.appointments_last_fetched = Some("not a date".to_string());

        let err = enrich_site(&site, reference(), now).unwrap_err();
        match err {
            EnrichError::Timestamp { site_id, field, value } => {
                assert_eq!(site_id, "a");
                assert_eq!(field, "appointments_last_fetched");
                assert_eq!(value.as_deref(), Some("not a date"));
            }
            other => panic!("unexpected error: {}", other),
        }

        site.appointments_last_fetched = None;
        assert!(enrich_sites(&[&site], reference(), now).is_err());
    }
}
