//! # Meat Order demo
//!
//! Boots the shop from configuration, walks one customer through the order
//! draft, places the order, moves it along as an admin and prints the
//! exported order list.

use meat_order::auth::{Session, SessionGate, StaticIdentity};
use meat_order::config::ShopConfig;
use meat_order::date_range::DateRange;
use meat_order::draft::OrderDraft;
use meat_order::export::TsvExporter;
use meat_order::lifecycle::{setup_tracing, ShopSystem};
use meat_order::model::{ContactDetails, OrderStatus};
use meat_order::order_actor::OrderQuery;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let system = ShopSystem::start(&config).await?;
    let today = chrono::Local::now().date_naive();

    let identity = StaticIdentity::new(Session {
        user_id: "customer-1".to_string(),
        email: "alice@example.com".to_string(),
        full_name: Some("Alice".to_string()),
    });
    let mut gate = SessionGate::new();
    gate.sign_in(&identity).await?;

    // Customer flow
    let span = tracing::info_span!("customer_flow");
    let draft = async {
        let catalog = system.catalog().await?;
        let mut draft = OrderDraft::new();

        let Some(animal) = catalog.list_active_animals().first().map(|a| a.id) else {
            return Err("catalog has no active animals".into());
        };
        draft.select_animal(&catalog, animal)?;

        let sizes = catalog.sizes_for(animal)?;
        let size = sizes
            .iter()
            .find(|s| s.eq_ignore_ascii_case("medium"))
            .or(sizes.first())
            .cloned()
            .ok_or("animal has no sizes")?;
        draft.select_size(&catalog, &size)?;

        if let Some(option) = catalog.price_options_for(animal, &size)?.first() {
            draft.select_price_option(&catalog, option.id)?;
        }

        let style = catalog
            .active_cutting_styles()
            .first()
            .map(|s| s.id)
            .ok_or("no cutting styles")?;
        let date = catalog
            .bookable_dates()
            .first()
            .map(|d| d.id)
            .ok_or("no delivery slots left")?;
        draft.select_style_and_logistics(&catalog, style, true, date)?;

        // First attempt leaves the name blank and is refused.
        let mut contact = ContactDetails {
            name: String::new(),
            phone: "(555) 123-4567".to_string(),
            address: "12 Market Street".to_string(),
        };
        if let Err(e) = draft.capture_contact(contact.clone(), system.min_phone_digits()) {
            warn!(error = %e, "Contact details refused");
        }
        contact.name = "Alice".to_string();
        draft.capture_contact(contact, system.min_phone_digits())?;

        info!(step = %draft.step(), total = %draft.total(), "Draft complete");
        Ok::<_, Box<dyn std::error::Error>>(draft)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("place_order");
    let order_id = match system
        .place_order(draft, today, gate.session())
        .instrument(span)
        .await
    {
        Ok(id) => {
            info!(order_id = %id, "Order placed");
            id
        }
        Err(e) => {
            error!(error = %e, "Order failed");
            system.shutdown().await?;
            return Err(e.into());
        }
    };

    // Admin flow
    let span = tracing::info_span!("admin");
    async {
        for status in [OrderStatus::Confirmed, OrderStatus::Processing, OrderStatus::Ready] {
            let order = system.order_client.set_status(order_id, status).await?;
            info!(order_id = %order.id, status = %order.status, "Status updated");
        }

        let query = OrderQuery::default()
            .with_status(OrderStatus::Ready)
            .placed_within(DateRange::between(today, today));
        let sheet = system.order_client.export_orders(query, &TsvExporter).await?;
        println!("{sheet}");

        let history = system
            .order_client
            .track_orders(&gate, DateRange::unbounded())
            .await?;
        info!(count = history.len(), "Customer order history");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    gate.sign_out(&identity).await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
