//! VaccineSpotter GeoJSON parser
//!
//! The state feeds are GeoJSON feature collections. Every feature carries
//! a point geometry and a flat `properties` object describing the site.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::FetchError;
use super::types::{Appointment, Site};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    properties: RawProperties,
}

/// GeoJSON positions may carry a third (altitude) value
#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Option<Vec<f64>>,
}

impl RawGeometry {
    fn lon_lat(&self) -> Option<[f64; 2]> {
        match self.coordinates.as_deref() {
            Some([longitude, latitude, ..]) => Some([*longitude, *latitude]),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAppointment {
    #[serde(default)]
    appointment_types: Option<Vec<String>>,
}

impl From<RawAppointment> for Appointment {
    fn from(raw: RawAppointment) -> Self {
        Appointment {
            appointment_types: raw.appointment_types.unwrap_or_default(),
        }
    }
}

/// Site ids are integers in the live feed, strings in some mirrors
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// `appointment_vaccine_types` is either a list or a `{"pfizer": true}` map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVaccineTypes {
    List(Vec<String>),
    Flags(BTreeMap<String, serde_json::Value>),
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    appointments_available: Option<bool>,
    #[serde(default)]
    appointments: Option<Vec<RawAppointment>>,
    #[serde(default)]
    appointment_vaccine_types: Option<RawVaccineTypes>,
    #[serde(default)]
    appointments_last_modified: Option<String>,
    #[serde(default)]
    appointments_last_fetched: Option<String>,
}

impl From<RawFeature> for Site {
    fn from(raw: RawFeature) -> Self {
        let props = raw.properties;

        let id = match props.id {
            Some(RawId::Number(n)) => n.to_string(),
            Some(RawId::Text(s)) => s,
            None => String::new(),
        };

        let vaccine_types = match props.appointment_vaccine_types {
            Some(RawVaccineTypes::List(types)) => types,
            Some(RawVaccineTypes::Flags(flags)) => flags
                .into_iter()
                .filter(|(_, offered)| offered.as_bool() == Some(true))
                .map(|(name, _)| name)
                .collect(),
            None => Vec::new(),
        };

        Site {
            id,
            name: props.name.unwrap_or_default(),
            address: props.address.unwrap_or_default(),
            postal_code: props.postal_code.unwrap_or_default(),
            url: props.url.unwrap_or_default(),
            coordinates: raw.geometry.as_ref().and_then(RawGeometry::lon_lat),
            appointments_available: props.appointments_available.unwrap_or(false),
            appointments: props
                .appointments
                .unwrap_or_default()
                .into_iter()
                .map(Appointment::from)
                .collect(),
            vaccine_types,
            appointments_last_modified: props.appointments_last_modified,
            appointments_last_fetched: props.appointments_last_fetched,
        }
    }
}

/// Parse a state feed body into sites, in feed order.
pub fn parse_feed(json: &str) -> Result<Vec<Site>, FetchError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    Ok(collection.features.into_iter().map(Site::from).collect())
}
