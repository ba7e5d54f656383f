//! VaccineSpotter state feed
//!
//! Fetches one state's appointment availability feed and parses it into
//! [`Site`] records.

pub mod client;
pub mod error;
pub mod parser;
pub mod types;

pub use client::{FeedClient, is_success_status};
pub use error::FetchError;
pub use parser::parse_feed;
pub use types::{Appointment, Site};
