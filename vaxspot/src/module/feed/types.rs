//! VaccineSpotter feed data types

use crate::module::site::Coordinate;

/// One appointment slot listed by a site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appointment {
    /// Dose / category tags, e.g. "2nd_dose_only"
    pub appointment_types: Vec<String>,
}

/// A vaccination location from the feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub url: String,
    /// Feed order: `[longitude, latitude]`
    pub coordinates: Option<[f64; 2]>,
    pub appointments_available: bool,
    pub appointments: Vec<Appointment>,
    pub vaccine_types: Vec<String>,
    /// Raw ISO-8601 timestamp
    pub appointments_last_modified: Option<String>,
    /// Raw ISO-8601 timestamp
    pub appointments_last_fetched: Option<String>,
}

impl Site {
    /// Site location in (latitude, longitude) order.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinates
            .map(|[longitude, latitude]| Coordinate::new(latitude, longitude))
    }
}
