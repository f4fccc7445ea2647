use chrono::{DateTime, Utc};

use crate::domain::booking::Booking;

/// Hotel-wide timezone offset used when the caller does not supply one.
pub const DEFAULT_TIMEZONE_OFFSET_MINUTES: i64 = 120;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// An inclusive range of integer days since 1970-01-01 in the hotel's
/// timezone. Once a query is resolved to a `DayRange` it is never converted
/// again, so a range can be handed down through the engine unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start_day: i64,
    pub end_day: i64,
}

impl DayRange {
    pub fn total_days(&self) -> i64 {
        self.end_day - self.start_day + 1
    }

    pub fn contains(&self, day: i64) -> bool {
        day >= self.start_day && day <= self.end_day
    }

    pub fn intersect(&self, other: &DayRange) -> Option<DayRange> {
        let start_day = self.start_day.max(other.start_day);
        let end_day = self.end_day.min(other.end_day);
        (start_day <= end_day).then_some(DayRange { start_day, end_day })
    }
}

/// Converts instants into integer day numbers. The timezone offset is a
/// single hotel-wide value, so two instants on the same calendar day in the
/// hotel's locale always map to the same integer no matter where the caller
/// runs. `now` is captured at construction; tests inject a fixed clock via
/// [`DayConverter::with_now`].
#[derive(Debug, Clone)]
pub struct DayConverter {
    pub timezone_offset_minutes: i64,
    now: DateTime<Utc>,
}

impl DayConverter {
    pub fn new(timezone_offset_minutes: i64) -> Self {
        Self::with_now(timezone_offset_minutes, Utc::now())
    }

    pub fn with_now(timezone_offset_minutes: i64, now: DateTime<Utc>) -> Self {
        Self {
            timezone_offset_minutes,
            now,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Number of whole days since the epoch after shifting the instant into
    /// the hotel's timezone. Euclidean division keeps pre-epoch instants on
    /// the correct day.
    pub fn day_from_instant(&self, instant: DateTime<Utc>) -> i64 {
        (instant.timestamp_millis() + self.timezone_offset_minutes * 60_000)
            .div_euclid(MILLIS_PER_DAY)
    }

    /// Normalizes an optional start/end pair into a day range:
    /// - a missing start falls back to now;
    /// - the end is honored only when present and not earlier than the
    ///   resolved start, otherwise it falls back to max(start, now).
    ///
    /// The result always satisfies `start_day <= end_day`.
    pub fn resolve_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> DayRange {
        let valid_start = start.unwrap_or(self.now);
        let valid_end = match end {
            Some(end) if end >= valid_start => end,
            _ => valid_start.max(self.now),
        };
        DayRange {
            start_day: self.day_from_instant(valid_start),
            end_day: self.day_from_instant(valid_end),
        }
    }

    /// The days a booking occupies. An open-ended booking has no check-out,
    /// so its end collapses to max(check-in, now) and the booking covers at
    /// least through the current day.
    pub fn booking_days(&self, booking: &Booking) -> DayRange {
        self.resolve_range(Some(booking.check_in), booking.check_out)
    }
}
