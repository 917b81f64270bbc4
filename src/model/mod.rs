//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod animal;
pub mod catalog_action;
pub mod cutting_style;
pub mod delivery_date;
pub mod order;
pub mod price_option;

pub use animal::*;
pub use catalog_action::*;
pub use cutting_style::*;
pub use delivery_date::*;
pub use order::*;
pub use price_option::*;
