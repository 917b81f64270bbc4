use crate::date_range::Dated;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Delivery Dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryDateId(pub u32);

impl From<u32> for DeliveryDateId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DeliveryDateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "delivery_date_{}", self.0)
    }
}

/// A delivery day with a fixed number of slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDate {
    pub id: DeliveryDateId,
    pub date: NaiveDate,
    pub slots: u32,
    pub booked: u32,
    pub active: bool,
}

impl DeliveryDate {
    /// Creates a new, active delivery date with nothing booked.
    pub fn new(id: DeliveryDateId, date: NaiveDate, slots: u32) -> Self {
        Self {
            id,
            date,
            slots,
            booked: 0,
            active: true,
        }
    }

    /// Free slots, `slots - booked`.
    ///
    /// Signed so an overbooked record reads as negative instead of wrapping.
    /// The delivery-date actor never stores such a record.
    pub fn available(&self) -> i64 {
        i64::from(self.slots) - i64::from(self.booked)
    }

    /// True when the date is active and has at least one free slot.
    pub fn is_bookable(&self) -> bool {
        self.active && self.available() > 0
    }
}

impl Dated for DeliveryDate {
    fn day(&self) -> NaiveDate {
        self.date
    }
}

/// Payload for scheduling or editing a delivery date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDateParams {
    pub date: NaiveDate,
    pub slots: u32,
    /// Slots already taken. Left out, a new date starts at zero and an edit
    /// keeps the bookings placed orders have made.
    #[serde(default)]
    pub booked: Option<u32>,
}

/// Actions on a delivery date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryDateAction {
    SetActive(bool),
    ToggleActive,
    /// Takes one slot; fails when the date is inactive or full.
    BookSlot,
    /// Gives one slot back. Releasing with nothing booked is a no-op.
    ReleaseSlot,
}
