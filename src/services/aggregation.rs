use chrono::{DateTime, Utc};

use crate::domain::room::Room;
use crate::services::day_converter::DayConverter;
use crate::services::occupancy::{build_occupancy_map, occupancy_percentage_over};

/// Rounded mean of the per-room occupancy percentages over the same
/// normalized day range, or `None` for an empty room set. Each room's
/// percentage is rounded before averaging, so this is not the pooled
/// occupied-room-days figure.
pub fn total_occupancy_percentage(
    rooms: &[Room],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    converter: &DayConverter,
) -> Option<u8> {
    if rooms.is_empty() {
        return None;
    }
    let range = converter.resolve_range(start, end);
    let summed: u32 = rooms
        .iter()
        .map(|room| u32::from(occupancy_percentage_over(room, range, converter)))
        .sum();
    Some((f64::from(summed) / rooms.len() as f64).round() as u8)
}

/// Rooms with no occupied day anywhere in the range, in input order.
/// `None` for an empty room set; `Some(vec![])` when no room qualifies.
pub fn available_rooms<'a>(
    rooms: &'a [Room],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    converter: &DayConverter,
) -> Option<Vec<&'a Room>> {
    if rooms.is_empty() {
        return None;
    }
    let range = converter.resolve_range(start, end);
    Some(
        rooms
            .iter()
            .filter(|room| build_occupancy_map(&room.bookings, range, converter).is_empty())
            .collect(),
    )
}

/// Rooms that are not booked for every day of the range, in input order.
/// Fully available rooms qualify too; only fully booked rooms are excluded.
pub fn partially_available_rooms<'a>(
    rooms: &'a [Room],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    converter: &DayConverter,
) -> Option<Vec<&'a Room>> {
    if rooms.is_empty() {
        return None;
    }
    let range = converter.resolve_range(start, end);
    let total_days = range.total_days() as usize;
    Some(
        rooms
            .iter()
            .filter(|room| build_occupancy_map(&room.bookings, range, converter).len() < total_days)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_booking, build_room_with_bookings, on_date};
    use chrono::Duration;

    fn converter() -> DayConverter {
        DayConverter::with_now(0, on_date(2026, 8, 29))
    }

    #[test]
    fn aggregations_return_none_for_an_empty_room_set() {
        let converter = converter();
        assert_eq!(total_occupancy_percentage(&[], None, None, &converter), None);
        assert_eq!(available_rooms(&[], None, None, &converter), None);
        assert_eq!(partially_available_rooms(&[], None, None, &converter), None);
    }

    #[test]
    fn total_percentage_averages_the_rounded_room_percentages() {
        let converter = converter();
        let now = converter.now();

        let fully_booked = build_room_with_bookings(vec![build_booking(now, Some(now))]);
        let empty = build_room_with_bookings(vec![]);

        let total = total_occupancy_percentage(
            &[fully_booked, empty],
            Some(now),
            Some(now),
            &converter,
        );
        assert_eq!(total, Some(50));
    }

    #[test]
    fn total_percentage_stays_within_bounds() {
        let converter = converter();
        let now = converter.now();

        let rooms = vec![
            build_room_with_bookings(vec![build_booking(now - Duration::days(9), None)]),
            build_room_with_bookings(vec![build_booking(now - Duration::days(3), Some(now))]),
            build_room_with_bookings(vec![]),
        ];

        let total = total_occupancy_percentage(
            &rooms,
            Some(now - Duration::days(9)),
            Some(now),
            &converter,
        )
        .unwrap();
        assert!(total <= 100);
    }

    #[test]
    fn available_rooms_keeps_only_fully_free_rooms_in_input_order() {
        let converter = converter();
        let now = converter.now();

        let free = build_room_with_bookings(vec![]);
        let booked = build_room_with_bookings(vec![build_booking(
            now - Duration::days(3),
            Some(now - Duration::days(1)),
        )]);
        let free_id = free.id.clone();

        let rooms = vec![free, booked];
        let result = available_rooms(
            &rooms,
            Some(now - Duration::days(2)),
            Some(now),
            &converter,
        )
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, free_id);
    }

    #[test]
    fn available_rooms_is_empty_when_every_room_overlaps_the_range() {
        let converter = converter();
        let now = converter.now();

        let rooms = vec![
            build_room_with_bookings(vec![build_booking(now - Duration::days(1), None)]),
            build_room_with_bookings(vec![build_booking(
                now - Duration::days(3),
                Some(now - Duration::days(1)),
            )]),
        ];

        let result = available_rooms(
            &rooms,
            Some(now - Duration::days(2)),
            Some(now - Duration::days(1)),
            &converter,
        )
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn available_rooms_preserves_the_order_of_the_input() {
        let converter = converter();
        let now = converter.now();

        let rooms = vec![
            build_room_with_bookings(vec![]),
            build_room_with_bookings(vec![]),
            build_room_with_bookings(vec![]),
        ];
        let ids: Vec<_> = rooms.iter().map(|room| room.id.clone()).collect();

        let result = available_rooms(
            &rooms,
            Some(now - Duration::days(8)),
            Some(now - Duration::days(4)),
            &converter,
        )
        .unwrap();
        let result_ids: Vec<_> = result.iter().map(|room| room.id.clone()).collect();
        assert_eq!(result_ids, ids);
    }

    #[test]
    fn partially_available_rooms_excludes_only_fully_booked_rooms() {
        let converter = converter();
        let now = converter.now();
        let start = now - Duration::days(4);

        let fully_booked = build_room_with_bookings(vec![build_booking(start, Some(now))]);
        let partially_booked = build_room_with_bookings(vec![build_booking(
            start,
            Some(now - Duration::days(2)),
        )]);
        let free = build_room_with_bookings(vec![]);
        let partial_id = partially_booked.id.clone();
        let free_id = free.id.clone();

        let rooms = vec![fully_booked, partially_booked, free];
        let result =
            partially_available_rooms(&rooms, Some(start), Some(now), &converter).unwrap();

        let result_ids: Vec<_> = result.iter().map(|room| room.id.clone()).collect();
        assert_eq!(result_ids, vec![partial_id, free_id]);
    }
}
