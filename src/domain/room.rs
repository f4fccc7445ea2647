use uuid::Uuid;

use crate::domain::booking::{Booking, BookingId, clamp_discount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomId(pub String);

/// Selects a booking to detach, either by its position in the room's
/// booking list or by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingSelector<'a> {
    Position(usize),
    Id(&'a BookingId),
}

/// A room owns its bookings exclusively, in insertion order. Every owned
/// booking carries a back-reference to this room's id.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub price: u32,
    pub discount: u8,
    pub bookings: Vec<Booking>,
}

impl Room {
    pub fn new(name: &str, price: i64, discount: i64) -> Self {
        Self {
            id: RoomId(Uuid::new_v4().to_string()),
            name: name.to_string(),
            price: price.clamp(0, i64::from(u32::MAX)) as u32,
            discount: clamp_discount(discount),
            bookings: Vec::new(),
        }
    }

    pub fn add_booking(&mut self, mut booking: Booking) -> &mut Self {
        booking.room = Some(self.id.clone());
        self.bookings.push(booking);
        self
    }

    pub fn add_bookings(&mut self, bookings: Vec<Booking>) -> &mut Self {
        for booking in bookings {
            self.add_booking(booking);
        }
        self
    }

    /// Detaches a booking and returns it with its back-reference cleared.
    /// An out-of-range position or unknown id is a no-op returning `None`.
    pub fn remove_booking(&mut self, selector: BookingSelector) -> Option<Booking> {
        let index = match selector {
            BookingSelector::Position(index) if index < self.bookings.len() => index,
            BookingSelector::Position(_) => return None,
            BookingSelector::Id(id) => self.bookings.iter().position(|b| b.id == *id)?,
        };
        let mut removed = self.bookings.remove(index);
        removed.room = None;
        Some(removed)
    }
}
