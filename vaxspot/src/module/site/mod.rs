//! Site selection: distance math, filtering and enrichment

pub mod distance;
pub mod enrich;
pub mod filter;

pub use distance::{Coordinate, distance_miles};
pub use enrich::{EnrichError, EnrichedSite, enrich_sites, parse_timestamp};
pub use filter::{filter_sites, has_desired_vaccine_type};
