//! # Order Export
//!
//! The admin order list can be handed to an [`OrderExporter`]. The shop only
//! supplies the already-filtered orders; what the artifact is (a file, an
//! upload, a string) is up to the exporter.

use crate::model::Order;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Fetching the orders failed.
    #[error(transparent)]
    Orders(#[from] OrderError),
    #[error("Export failed: {0}")]
    Write(String),
}

#[async_trait]
pub trait OrderExporter: Send + Sync {
    type Artifact: Send;

    async fn export(&self, orders: &[Order]) -> Result<Self::Artifact, ExportError>;
}

/// Tab-separated text with a header row, ready to paste into a spreadsheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

const HEADER: [&str; 12] = [
    "Order",
    "Placed",
    "Status",
    "Customer",
    "Phone",
    "Address",
    "Animal",
    "Size",
    "Cutting style",
    "Divided",
    "Delivery",
    "Total",
];

/// Tabs and line breaks inside a field would shift columns.
fn cell(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

#[async_trait]
impl OrderExporter for TsvExporter {
    type Artifact = String;

    async fn export(&self, orders: &[Order]) -> Result<String, ExportError> {
        let mut out = HEADER.join("\t");
        out.push('\n');
        for order in orders {
            let row = [
                order.id.to_string(),
                order.placed_on.to_string(),
                order.status.to_string(),
                cell(&order.customer.name),
                cell(&order.customer.phone),
                cell(&order.customer.address),
                cell(&order.animal_name),
                cell(&order.size),
                cell(&order.cutting_style),
                if order.divided { "yes" } else { "no" }.to_string(),
                order.delivery_date.to_string(),
                order.total.to_string(),
            ];
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AnimalId, ContactDetails, CuttingStyleId, DeliveryDateId, OrderCreate, OrderId,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::new(
            OrderId(1),
            OrderCreate {
                customer: ContactDetails {
                    name: "Alice".into(),
                    phone: "555-123-4567".into(),
                    address: "1 Main St\nApt 2".into(),
                },
                animal_id: AnimalId(1),
                animal_name: "Lamb".into(),
                size: "Medium".into(),
                cutting_style_id: CuttingStyleId(1),
                cutting_style: "Traditional".into(),
                divided: true,
                delivery_date_id: DeliveryDateId(2),
                delivery_date: NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
                price_option_id: None,
                total: dec!(480.00),
                placed_on: NaiveDate::from_ymd_opt(2023, 12, 10).unwrap(),
                placed_by: None,
            },
        )
    }

    #[tokio::test]
    async fn one_row_per_order_after_header() {
        let text = TsvExporter.export(&[order()]).await.unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Order\tPlaced\tStatus"));
        assert_eq!(
            lines[1],
            "order_1\t2023-12-10\tPending\tAlice\t555-123-4567\t1 Main St Apt 2\tLamb\tMedium\tTraditional\tyes\t2023-12-20\t480.00"
        );
    }

    #[tokio::test]
    async fn empty_list_is_just_the_header() {
        let text = TsvExporter.export(&[]).await.unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
