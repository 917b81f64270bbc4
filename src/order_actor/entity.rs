//! ActorEntity trait implementation for the Order domain type.
//!
//! Orchestration lives in the hooks: `on_create` checks the animal and cutting
//! style against their actors, then books the delivery slot, and
//! `handle_action` releases or re-books it when an order moves in or out of
//! Cancelled. A failed check or booking means no order is stored.

use super::error::OrderError;
use super::OrderContext;
use crate::clients::Repository;
use crate::delivery_date_actor::DeliveryDateError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderAction, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use tracing::{info, warn};

fn require(value: &str, field: &'static str) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::MissingField(field));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        require(&params.customer.name, "customer name")?;
        require(&params.customer.phone, "phone number")?;
        require(&params.customer.address, "delivery address")?;
        require(&params.size, "size")?;
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let animal = ctx.animals.get_by_id(self.animal_id).await?;
        if !animal.active {
            return Err(OrderError::Unavailable(animal.name));
        }
        let size = animal
            .size_label(&self.size)
            .ok_or_else(|| OrderError::UnknownSize {
                animal: animal.name.clone(),
                size: self.size.clone(),
            })?
            .to_string();
        let style = ctx.cutting_styles.get_by_id(self.cutting_style_id).await?;
        if !style.active {
            return Err(OrderError::Unavailable(style.name));
        }
        self.animal_name = animal.name;
        self.size = size;
        self.cutting_style = style.name;

        let date = ctx.delivery_dates.book_slot(self.delivery_date_id).await?;
        self.delivery_date = date.date;
        info!(order_id = %self.id, date = %date.date, left = date.available(), "Slot booked");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), Self::Error> {
        Err(OrderError::DeletionNotAllowed(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::SetStatus(to) => {
                let from = self.status;
                ctx.policy.check(from, to)?;
                if from == to {
                    return Ok(self.clone());
                }

                if to == OrderStatus::Cancelled {
                    match ctx.delivery_dates.release_slot(self.delivery_date_id).await {
                        Ok(_) => {}
                        // Date removed from the schedule; nothing to give back.
                        Err(DeliveryDateError::NotFound(id)) => {
                            warn!(order_id = %self.id, date_id = %id, "Delivery date gone, slot not released")
                        }
                        Err(e) => return Err(e.into()),
                    }
                } else if from == OrderStatus::Cancelled {
                    ctx.delivery_dates.book_slot(self.delivery_date_id).await?;
                }

                self.status = to;
                info!(order_id = %self.id, %from, %to, "Status changed");
                Ok(self.clone())
            }
        }
    }
}
