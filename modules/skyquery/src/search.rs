//! Conjunctive filter evaluation against the flight store.

use crate::store::FlightStore;
use crate::types::{FlightRecord, QueryFilter};

/// Return the records matching every set clause of `filter`, in store order.
///
/// An unset filter field matches everything, so the empty filter returns the
/// whole store. Interval bounds are inclusive on both ends; a `before_*`
/// bound earlier than its `after_*` counterpart simply matches nothing.
pub fn search<'a>(filter: &QueryFilter, store: &'a FlightStore) -> Vec<&'a FlightRecord> {
    store
        .flights()
        .iter()
        .filter(|flight| matches(filter, flight))
        .collect()
}

fn matches(filter: &QueryFilter, flight: &FlightRecord) -> bool {
    filter
        .flight_number
        .as_deref()
        .map_or(true, |number| flight.flight_number == number)
        && filter
            .origin
            .as_deref()
            .map_or(true, |origin| eq_ignore_case(&flight.origin, origin))
        && filter
            .destination
            .as_deref()
            .map_or(true, |dest| eq_ignore_case(&flight.destination, dest))
        && filter.date.map_or(true, |date| flight.date == date)
        && filter.time.map_or(true, |time| flight.time == time)
        && filter.before_date.map_or(true, |bound| flight.date <= bound)
        && filter.after_date.map_or(true, |bound| flight.date >= bound)
        && filter.before_time.map_or(true, |bound| flight.time <= bound)
        && filter.after_time.map_or(true, |bound| flight.time >= bound)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
