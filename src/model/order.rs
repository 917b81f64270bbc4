/// Represents a submitted customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status changes ([`OrderAction`])
use crate::date_range::Dated;
use crate::model::{AnimalId, CuttingStyleId, DeliveryDateId, PriceOptionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// Two vocabularies are in circulation for the same states; "Shipped" parses
/// as [`OrderStatus::Ready`] and "Canceled" as [`OrderStatus::Cancelled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    #[serde(alias = "Shipped")]
    Ready,
    Delivered,
    #[serde(alias = "Canceled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Delivered and Cancelled orders have reached the end of the line.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let status = match label.to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "confirmed" => OrderStatus::Confirmed,
            "processing" => OrderStatus::Processing,
            "ready" | "shipped" => OrderStatus::Ready,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => return Err(UnknownStatus(label.to_string())),
        };
        Ok(status)
    }
}

/// Customer contact and delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: ContactDetails,
    pub animal_id: AnimalId,
    pub animal_name: String,
    pub size: String,
    pub cutting_style_id: CuttingStyleId,
    pub cutting_style: String,
    pub divided: bool,
    pub delivery_date_id: DeliveryDateId,
    pub delivery_date: NaiveDate,
    pub price_option_id: Option<PriceOptionId>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub placed_on: NaiveDate,
    /// Account that placed the order, when the customer was signed in.
    pub placed_by: Option<String>,
}

impl Order {
    /// Creates a Pending order from a submission.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            customer: params.customer,
            animal_id: params.animal_id,
            animal_name: params.animal_name,
            size: params.size,
            cutting_style_id: params.cutting_style_id,
            cutting_style: params.cutting_style,
            divided: params.divided,
            delivery_date_id: params.delivery_date_id,
            delivery_date: params.delivery_date,
            price_option_id: params.price_option_id,
            total: params.total,
            status: OrderStatus::Pending,
            placed_on: params.placed_on,
            placed_by: params.placed_by,
        }
    }
}

/// Orders are filtered on the day they were placed.
impl Dated for Order {
    fn day(&self) -> NaiveDate {
        self.placed_on
    }
}

/// Payload for creating a new order, produced by a submitted
/// [`OrderDraft`](crate::draft::OrderDraft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: ContactDetails,
    pub animal_id: AnimalId,
    pub animal_name: String,
    pub size: String,
    pub cutting_style_id: CuttingStyleId,
    pub cutting_style: String,
    pub divided: bool,
    pub delivery_date_id: DeliveryDateId,
    pub delivery_date: NaiveDate,
    pub price_option_id: Option<PriceOptionId>,
    pub total: Decimal,
    pub placed_on: NaiveDate,
    #[serde(default)]
    pub placed_by: Option<String>,
}

/// Admin actions on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    SetStatus(OrderStatus),
}
