use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::booking::Booking;
use crate::domain::room::Room;
use crate::services::day_converter::{DayConverter, DayRange};

/// Marks every day of `range` covered by at least one booking. Bookings
/// outside the range are skipped, overlapping bookings mark each day once.
/// The map is recomputed per query and never cached on the room.
pub fn build_occupancy_map(
    bookings: &[Booking],
    range: DayRange,
    converter: &DayConverter,
) -> BTreeSet<i64> {
    let mut occupied = BTreeSet::new();
    for booking in bookings {
        let booked = converter.booking_days(booking);
        let Some(overlap) = range.intersect(&booked) else {
            continue;
        };
        for day in overlap.start_day..=overlap.end_day {
            occupied.insert(day);
        }
    }
    occupied
}

/// Whether the room has any booking covering the given day. A missing date
/// defaults to today.
pub fn is_occupied(room: &Room, date: Option<DateTime<Utc>>, converter: &DayConverter) -> bool {
    let start_day = converter.resolve_range(date, None).start_day;
    let single_day = DayRange {
        start_day,
        end_day: start_day,
    };
    !build_occupancy_map(&room.bookings, single_day, converter).is_empty()
}

/// Share of the range covered by bookings, rounded half-up to an integer
/// percentage. A room without bookings is 0% occupied for any range.
pub fn occupancy_percentage(
    room: &Room,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    converter: &DayConverter,
) -> u8 {
    occupancy_percentage_over(room, converter.resolve_range(start, end), converter)
}

pub fn occupancy_percentage_over(room: &Room, range: DayRange, converter: &DayConverter) -> u8 {
    let occupied = build_occupancy_map(&room.bookings, range, converter).len();
    (occupied as f64 / range.total_days() as f64 * 100.0).round() as u8
}
