//! ActorEntity trait implementation for the DeliveryDate domain type.
//!
//! Duplicate days are caught by [`ActorEntity::check_conflict`], which the
//! actor runs against every other stored date on add and on edit.

use super::error::DeliveryDateError;
use crate::framework::ActorEntity;
use crate::model::{DeliveryDate, DeliveryDateAction, DeliveryDateId, DeliveryDateParams};
use async_trait::async_trait;

/// Checks the slot count against the booked count the record will end up with.
fn validate(slots: u32, booked: u32) -> Result<(), DeliveryDateError> {
    if slots == 0 {
        return Err(DeliveryDateError::InvalidSlots);
    }
    if booked > slots {
        return Err(DeliveryDateError::Overbooked { booked, slots });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for DeliveryDate {
    type Id = DeliveryDateId;
    type Create = DeliveryDateParams;
    type Update = DeliveryDateParams;
    type Action = DeliveryDateAction;
    type ActionResult = DeliveryDate;
    type Context = ();
    type Error = DeliveryDateError;

    fn from_create_params(
        id: DeliveryDateId,
        params: DeliveryDateParams,
    ) -> Result<Self, Self::Error> {
        let booked = params.booked.unwrap_or(0);
        validate(params.slots, booked)?;
        Ok(Self {
            booked,
            ..Self::new(id, params.date, params.slots)
        })
    }

    fn check_conflict(&self, existing: &Self) -> Result<(), Self::Error> {
        if self.date == existing.date {
            return Err(DeliveryDateError::DuplicateDate(self.date));
        }
        Ok(())
    }

    /// Replaces day and slot count, and the booked count when one is given.
    /// The active flag is left alone.
    async fn on_update(&mut self, update: DeliveryDateParams, _ctx: &()) -> Result<(), Self::Error> {
        let booked = update.booked.unwrap_or(self.booked);
        validate(update.slots, booked)?;
        self.date = update.date;
        self.slots = update.slots;
        self.booked = booked;
        Ok(())
    }

    /// Days are switched off, never removed, so placed orders keep their date.
    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(DeliveryDateError::DeletionNotAllowed(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: DeliveryDateAction,
        _ctx: &(),
    ) -> Result<DeliveryDate, Self::Error> {
        match action {
            DeliveryDateAction::SetActive(active) => self.active = active,
            DeliveryDateAction::ToggleActive => self.active = !self.active,
            DeliveryDateAction::BookSlot => {
                if !self.active {
                    return Err(DeliveryDateError::Inactive(self.date));
                }
                if self.available() <= 0 {
                    return Err(DeliveryDateError::FullyBooked(self.date));
                }
                self.booked += 1;
            }
            DeliveryDateAction::ReleaseSlot => self.booked = self.booked.saturating_sub(1),
        }
        Ok(self.clone())
    }
}
