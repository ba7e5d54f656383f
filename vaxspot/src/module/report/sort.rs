use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::module::site::EnrichedSite;

/// Key a report section is ordered by. All orders are ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Nearest first
    #[serde(rename = "distance_away")]
    Distance,
    /// Most recently modified first
    #[serde(rename = "last_modified_ago")]
    LastModified,
    /// Most recently fetched first
    #[serde(rename = "last_fetched_ago")]
    LastFetched,
}

impl SortOrder {
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Distance => "distance_away",
            SortOrder::LastModified => "last_modified_ago",
            SortOrder::LastFetched => "last_fetched_ago",
        }
    }

    pub fn compare(&self, a: &EnrichedSite<'_>, b: &EnrichedSite<'_>) -> Ordering {
        match self {
            SortOrder::Distance => a.distance_miles.total_cmp(&b.distance_miles),
            SortOrder::LastModified => a.last_modified_ago.cmp(&b.last_modified_ago),
            SortOrder::LastFetched => a.last_fetched_ago.cmp(&b.last_fetched_ago),
        }
    }

    /// Stable: equal keys keep their current relative order.
    pub fn sort(&self, sites: &mut [EnrichedSite<'_>]) {
        sites.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
