//! Availability, vaccine type and distance filtering

use std::collections::BTreeSet;

use super::distance::distance_miles;
use crate::config::{SearchConfig, vaccine_type};
use crate::module::feed::Site;

/// True if `desired` holds the wildcard or any of `site_types`
/// (compared lowercase).
pub fn has_desired_vaccine_type(site_types: &[String], desired: &BTreeSet<String>) -> bool {
    if desired.contains(vaccine_type::ALL) {
        return true;
    }
    site_types
        .iter()
        .any(|t| desired.contains(&t.to_lowercase()))
}

pub fn has_open_appointments(site: &Site) -> bool {
    site.appointments_available && !site.appointments.is_empty()
}

/// Sites without a location never pass.
pub fn within_threshold(site: &Site, config: &SearchConfig) -> bool {
    match site.coordinate() {
        Some(coordinate) => distance_miles(config.reference, coordinate) <= config.threshold_miles,
        None => {
            tracing::warn!("Site {} ({}) has no coordinates, skipping", site.id, site.name);
            false
        }
    }
}

/// Keep the sites worth reporting, in feed order.
pub fn filter_sites<'a>(sites: &'a [Site], config: &SearchConfig) -> Vec<&'a Site> {
    let available: Vec<&Site> = sites
        .iter()
        .filter(|site| has_open_appointments(site))
        .filter(|site| has_desired_vaccine_type(&site.vaccine_types, &config.desired_vaccine_types))
        .collect();

    tracing::debug!(
        "{} of {} sites have appointments of a desired type",
        available.len(),
        sites.len()
    );

    available
        .into_iter()
        .filter(|site| within_threshold(site, config))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::module::feed::Appointment;

    /// Reference point used by the default config
    pub(crate) const REF_LAT: f64 = 37.40758515947319;
    pub(crate) const REF_LON: f64 = -121.9368054864926;

    /// Roughly `miles` north of the reference point
    pub(crate) fn site_north(id: &str, miles: f64) -> Site {
        Site {
            id: id.to_string(),
            name: format!("Site {}", id),
            address: format!("{} Main St", id),
            postal_code: "95131".to_string(),
            url: format!("https://example.com/{}", id),
            coordinates: Some([REF_LON, REF_LAT + miles / 69.0]),
            appointments_available: true,
            appointments: vec![Appointment::default(), Appointment::default()],
            vaccine_types: vec!["pfizer".to_string()],
            appointments_last_modified: Some("2021-04-20T19:00:00+00:00".to_string()),
            appointments_last_fetched: Some("2021-04-20T19:05:00+00:00".to_string()),
        }
    }

    fn desired(types: &[&str]) -> BTreeSet<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vaccine_type_wildcard() {
        let d = desired(&["all"]);
        assert!(has_desired_vaccine_type(&[], &d));
        assert!(has_desired_vaccine_type(&["novavax".to_string()], &d));
    }

    #[test]
    fn test_vaccine_type_case_insensitive() {
        let d = desired(&["pfizer"]);
        assert!(has_desired_vaccine_type(&["Pfizer".to_string()], &d));
        assert!(has_desired_vaccine_type(
            &["moderna".to_string(), "PFIZER".to_string()],
            &d
        ));
        assert!(!has_desired_vaccine_type(&["Moderna".to_string()], &d));
        assert!(!has_desired_vaccine_type(&[], &d));
    }

    #[test]
    fn test_open_appointments() {
        let mut site = site_north("a", 1.0);
        assert!(has_open_appointments(&site));

        site.appointments.clear();
        assert!(!has_open_appointments(&site));

        let mut site = site_north("b", 1.0);
        site.appointments_available = false;
        assert!(!has_open_appointments(&site));
    }

    #[test]
    fn test_within_threshold() {
        let config = SearchConfig::default();
        assert!(within_threshold(&site_north("near", 49.0), &config));
        assert!(!within_threshold(&site_north("far", 51.0), &config));

        let mut nowhere = site_north("nowhere", 1.0);
        nowhere.coordinates = None;
        assert!(!within_threshold(&nowhere, &config));
    }

    #[test]
    fn test_filter_sites() {
        let mut unavailable = site_north("c", 5.0);
        unavailable.appointments_available = false;
        let mut wrong_type = site_north("d", 3.0);
        wrong_type.vaccine_types = vec!["jj".to_string()];

        let sites = vec![
            site_north("a", 10.0),
            site_north("b", 60.0),
            unavailable,
            wrong_type,
            site_north("e", 20.0),
        ];

        let config = SearchConfig {
            desired_vaccine_types: desired(&["pfizer", "moderna"]),
            ..SearchConfig::default()
        };
        let kept: Vec<&str> = filter_sites(&sites, &config)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "e"]);

        // Wildcard lets the jj site through
        let kept: Vec<&str> = filter_sites(&sites, &SearchConfig::default())
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "d", "e"]);
    }
}
