//! Admin order listing filter.

use crate::date_range::DateRange;
use crate::model::{Order, OrderStatus};

/// Status and placed-on date filter for the admin order list. The default matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    pub placed: DateRange,
}

impl OrderQuery {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn placed_within(mut self, range: DateRange) -> Self {
        self.placed = range;
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|status| order.status == status)
            && self.placed.contains(order.placed_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AnimalId, ContactDetails, CuttingStyleId, DeliveryDateId, OrderCreate, OrderId,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, d).unwrap()
    }

    fn placed(d: u32, status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId(d),
            OrderCreate {
                customer: ContactDetails {
                    name: "Alice".into(),
                    phone: "5551234567".into(),
                    address: "12 Market Street".into(),
                },
                animal_id: AnimalId(1),
                animal_name: "Lamb".into(),
                size: "Medium".into(),
                cutting_style_id: CuttingStyleId(1),
                cutting_style: "Traditional".into(),
                divided: false,
                delivery_date_id: DeliveryDateId(1),
                delivery_date: day(20),
                price_option_id: None,
                total: Decimal::ZERO,
                placed_on: day(d),
                placed_by: None,
            },
        );
        order.status = status;
        order
    }

    #[test]
    fn default_matches_everything() {
        let query = OrderQuery::default();
        assert!(OrderStatus::ALL
            .iter()
            .all(|&status| query.matches(&placed(3, status))));
    }

    #[test]
    fn status_and_window_both_apply() {
        let query = OrderQuery::default()
            .with_status(OrderStatus::Pending)
            .placed_within(DateRange::between(day(5), day(10)));

        assert!(query.matches(&placed(5, OrderStatus::Pending)));
        assert!(query.matches(&placed(10, OrderStatus::Pending)));
        assert!(!query.matches(&placed(11, OrderStatus::Pending)));
        assert!(!query.matches(&placed(7, OrderStatus::Confirmed)));
    }
}
