//! Storefront data model: catalog records, cart lines, panels and static copy.

pub mod cart_line;
pub mod category;
pub mod content;
pub mod product;
pub mod section;

pub use cart_line::CartLine;
pub use category::{Category, ALL_CATEGORY_ID};
pub use content::{ContactInfo, Highlight, Review, StoreContent};
pub use product::{Product, ProductId};
pub use section::Section;
