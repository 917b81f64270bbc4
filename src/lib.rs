//! # Meat Order
//!
//! > **The ordering core of a meat-delivery shop, built from resource actors.**
//!
//! Customers pick an animal, a size, an optional price package, a cutting
//! style and a delivery day, then leave their contact details. Admins keep the
//! catalog up to date and move orders through their statuses.
//!
//! ## 🏗️ Design
//!
//! Each kind of record (animals, cutting styles, price options, delivery
//! dates, orders) is owned by one [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. Requests are processed one at a time, so no
//! record is ever behind a lock. Everything else talks to the actors through
//! typed clients.
//!
//! The customer's half-finished order is an [`OrderDraft`](draft::OrderDraft):
//! a plain value checked against a [`Catalog`](catalog::Catalog) snapshot at
//! every step and consumed on submission.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client and the [`MockClient`](framework::mock::MockClient)
//! used to test one actor without the others.
//!
//! ### 2. The Records ([`model`]) and their actors
//! [`animal_actor`], [`cutting_style_actor`], [`price_option_actor`],
//! [`delivery_date_actor`] and [`order_actor`] each hold the
//! [`ActorEntity`](framework::ActorEntity) implementation and error type for
//! one record kind.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients and the [`Repository`](clients::Repository) surface
//! (`list`, `get_by_id`, `upsert`, `set_active`, `toggle_active`) shared by
//! the catalog lists. Only price options can be deleted.
//!
//! ### 4. The Customer Flow ([`catalog`], [`draft`], [`date_range`])
//! Derived catalog views, the order draft state machine and the inclusive
//! calendar-day filter used by every dated listing.
//!
//! ### 5. The Edges ([`auth`], [`export`], [`config`])
//! Traits for the identity provider and order export, and YAML configuration.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) starts and wires the actors, seeds the
//! catalog and shuts everything down; [`setup_tracing`](lifecycle::setup_tracing)
//! installs the log subscriber.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! MEAT_ORDER_CONFIG=./shop.yaml RUST_LOG=debug cargo run
//! ```

pub mod animal_actor;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod cutting_style_actor;
pub mod date_range;
pub mod delivery_date_actor;
pub mod draft;
pub mod export;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod price_option_actor;
