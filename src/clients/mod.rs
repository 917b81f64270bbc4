//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod animal_client;
pub mod cutting_style_client;
pub mod delivery_date_client;
pub mod order_client;
pub mod price_option_client;
pub mod repository;

pub use actor_client::*;
pub use animal_client::*;
pub use cutting_style_client::*;
pub use delivery_date_client::*;
pub use order_client::*;
pub use price_option_client::*;
pub use repository::*;
