//! The read-only flight store. Loaded once at process start, injected into
//! the pipeline, never mutated.

use chrono::{NaiveDate, NaiveTime};

use crate::types::FlightRecord;

pub struct FlightStore {
    flights: Vec<FlightRecord>,
}

impl FlightStore {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self { flights }
    }

    /// All records in load order.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// The static demo schedule.
    pub fn fixture() -> Self {
        Self::new(vec![
            record("AA101", "New York", "London", 2025, 3, 5, 10, 0),
            record("BA202", "London", "Paris", 2025, 3, 5, 12, 30),
            record("AF606", "Paris", "Dubai", 2025, 3, 3, 14, 55),
            record("DL303", "Atlanta", "Tokyo", 2025, 3, 6, 8, 15),
            record("UA404", "San Francisco", "Sydney", 2025, 3, 6, 22, 45),
            record("EK505", "Dubai", "New York", 2025, 3, 7, 9, 20),
            record("QF707", "Sydney", "Singapore", 2025, 3, 8, 6, 30),
        ])
    }
}

fn record(
    flight_number: &str,
    origin: &str,
    destination: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> FlightRecord {
    FlightRecord {
        flight_number: flight_number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"),
        time: NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time"),
    }
}
