use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::booking::Booking;
use crate::domain::room::Room;
use crate::services::day_converter::DEFAULT_TIMEZONE_OFFSET_MINUTES;

#[derive(Error, Debug)]
pub enum HotelYamlError {
    #[error("failed to read hotel yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse hotel yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid date in {path}: {value} (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate { path: PathBuf, value: String },
}

/// All rooms of one hotel plus the hotel's timezone offset.
#[derive(Debug, Clone)]
pub struct Hotel {
    pub timezone_offset_minutes: i64,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Deserialize)]
struct HotelRecord {
    timezone_offset_minutes: Option<i64>,
    rooms: Option<Vec<RoomRecord>>,
}

#[derive(Debug, Deserialize)]
struct RoomRecord {
    name: String,
    price: Option<i64>,
    discount: Option<i64>,
    bookings: Option<Vec<BookingRecord>>,
}

#[derive(Debug, Deserialize)]
struct BookingRecord {
    name: Option<String>,
    email: Option<String>,
    check_in: String,
    check_out: Option<String>,
    discount: Option<i64>,
}

/// Loads a hotel file: the timezone offset and the rooms with their
/// bookings, bookings attached in file order.
///
/// # Errors
/// - Returns an error when the file cannot be read or parsed.
/// - Returns an error when a check-in or check-out value is not a date.
pub fn load_hotel_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Hotel, HotelYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| HotelYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_hotel_from_yaml_str(&contents, path)
}

fn deserialize_hotel_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<Hotel, HotelYamlError> {
    let record: HotelRecord =
        serde_yaml::from_str(input).map_err(|source| HotelYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let rooms = record
        .rooms
        .unwrap_or_default()
        .into_iter()
        .map(|value| room_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Hotel {
        timezone_offset_minutes: record
            .timezone_offset_minutes
            .unwrap_or(DEFAULT_TIMEZONE_OFFSET_MINUTES),
        rooms,
    })
}

fn room_from_record(value: RoomRecord, origin_path: &Path) -> Result<Room, HotelYamlError> {
    let mut room = Room::new(
        &value.name,
        value.price.unwrap_or(0),
        value.discount.unwrap_or(0),
    );
    let bookings = value
        .bookings
        .unwrap_or_default()
        .into_iter()
        .map(|value| booking_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;
    room.add_bookings(bookings);
    Ok(room)
}

fn booking_from_record(
    value: BookingRecord,
    origin_path: &Path,
) -> Result<Booking, HotelYamlError> {
    let check_in = parse_instant(&value.check_in, origin_path)?;
    let check_out = value
        .check_out
        .map(|raw| parse_instant(&raw, origin_path))
        .transpose()?;
    Ok(Booking::new(
        value.name.as_deref().unwrap_or(""),
        value.email.as_deref().unwrap_or(""),
        Some(check_in),
        check_out,
        value.discount.unwrap_or(0),
    ))
}

fn parse_instant(value: &str, origin_path: &Path) -> Result<DateTime<Utc>, HotelYamlError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| HotelYamlError::InvalidDate {
            path: origin_path.to_path_buf(),
            value: value.to_string(),
        })
}
