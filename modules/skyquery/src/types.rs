use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single scheduled flight. All fields are present and non-empty for
/// every record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} from {} to {} on {} at {}",
            self.flight_number,
            self.origin,
            self.destination,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
        )
    }
}

/// The structured representation of a user's flight search constraints.
///
/// Each field is either a concrete value or unconstrained (`None`), and an
/// unconstrained field matches every record on that dimension. The interval
/// bounds are inclusive; `before_*` earlier than `after_*` is a legitimate
/// filter that matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub flight_number: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub before_date: Option<NaiveDate>,
    pub after_date: Option<NaiveDate>,
    pub before_time: Option<NaiveTime>,
    pub after_time: Option<NaiveTime>,
}
