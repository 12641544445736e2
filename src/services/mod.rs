//! Storefront services: the static catalog, filtering, the cart and the
//! view state controller that ties them together.

pub mod cart;
pub mod catalog;
pub mod content;
pub mod filter;
pub mod view_state;

pub use cart::{cart_item_count, cart_total, Cart};
pub use catalog::Catalog;
pub use filter::filtered_products;
pub use view_state::{reduce, Action, StateSummary, ViewState};
