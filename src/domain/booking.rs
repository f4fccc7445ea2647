use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::room::{Room, RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeeError {
    #[error("booking is not attached to any room")]
    NotAttached,
    #[error("booking is attached to a different room")]
    WrongRoom,
}

/// A stay in a single room. `check_out` of `None` means the guest has not
/// checked out yet, so the booking occupies every day through "now".
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub email: String,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub discount: u8,
    pub room: Option<RoomId>,
}

impl Booking {
    pub fn new(
        name: &str,
        email: &str,
        check_in: Option<DateTime<Utc>>,
        check_out: Option<DateTime<Utc>>,
        discount: i64,
    ) -> Self {
        Self {
            id: BookingId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            check_in: check_in.unwrap_or_else(Utc::now),
            check_out,
            discount: clamp_discount(discount),
            room: None,
        }
    }

    /// Total fee in the smallest currency unit, with the room discount and
    /// the booking discount applied on top of each other. The booking must
    /// be attached to `room`.
    pub fn fee(&self, room: &Room) -> Result<u32, FeeError> {
        match &self.room {
            None => Err(FeeError::NotAttached),
            Some(room_id) if *room_id != room.id => Err(FeeError::WrongRoom),
            Some(_) => {
                let gross = u64::from(room.price)
                    * (100 - u64::from(room.discount))
                    * (100 - u64::from(self.discount));
                Ok((gross as f64 / 10_000.0).round() as u32)
            }
        }
    }
}

pub(crate) fn clamp_discount(discount: i64) -> u8 {
    discount.clamp(0, 100) as u8
}
