//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`. Module paths are hidden; the resource actors tag every line
//! with an `entity_type` field instead.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # plus request payloads
//! RUST_LOG=meat_order::framework=debug,info cargo run
//! ```
//!
//! ## What a Placed Order Looks Like
//!
//! With `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order:create_order: Sending create_order to actor
//! INFO Action ok entity_type="DeliveryDate" id=delivery_date_2
//! INFO Slot booked order_id=order_1 date=2023-12-20 left=2
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! The booking happens inside `Order::on_create`, so the delivery-date
//! actor's `Action ok` line appears before the order's `Created` line. A full
//! day shows up as `WARN Action failed ... No delivery slots left on ...`
//! followed by `WARN on_create failed` on the order actor.
//!
//! With `RUST_LOG=debug`, client methods also log their payload once on
//! entry (`debug!(?params, ...)`) and the actors log every request they receive.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
