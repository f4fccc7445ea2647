use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::booking::Booking;
use crate::domain::room::Room;

pub fn on_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

pub fn on_date_and_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
        .and_utc()
}

pub fn build_booking(check_in: DateTime<Utc>, check_out: Option<DateTime<Utc>>) -> Booking {
    Booking::new("Guest", "guest@example.com", Some(check_in), check_out, 0)
}

pub fn build_room_with_bookings(bookings: Vec<Booking>) -> Room {
    let mut room = Room::new("Room", 0, 0);
    room.add_bookings(bookings);
    room
}
