use crate::{
    models::{Product, ProductId, Section, ALL_CATEGORY_ID},
    services::{cart::Cart, catalog::Catalog, filter::filtered_products},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Session state driving what the storefront shows.
///
/// `selected_category` always names a category known to the catalog the
/// state is reduced against, and the cart never holds duplicate lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    active_section: Section,
    search_query: String,
    selected_category: String,
    cart: Cart,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: Section::default(),
            search_query: String::new(),
            selected_category: ALL_CATEGORY_ID.to_string(),
            cart: Cart::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state opened on `section`.
    pub fn starting_at(section: Section) -> Self {
        Self {
            active_section: section,
            ..Self::default()
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filtered_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filtered_products(
            catalog.products(),
            &self.search_query,
            &self.selected_category,
        )
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Selects a category tab. Ids unknown to `catalog` leave the selection
    /// unchanged and return `false`.
    pub fn set_selected_category(&mut self, catalog: &Catalog, category_id: &str) -> bool {
        if !catalog.has_category(category_id) {
            return false;
        }
        self.selected_category = category_id.to_string();
        true
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Serializable view of the state plus its derived values.
    pub fn summary(&self, catalog: &Catalog) -> StateSummary {
        StateSummary {
            active_section: self.active_section,
            search_query: self.search_query.clone(),
            selected_category: self.selected_category.clone(),
            filtered_product_ids: self
                .filtered_products(catalog)
                .iter()
                .map(|product| product.id)
                .collect(),
            cart: self.cart.clone(),
            cart_total: self.cart_total(),
            cart_item_count: self.cart_item_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub active_section: Section,
    pub search_query: String,
    pub selected_category: String,
    pub filtered_product_ids: Vec<ProductId>,
    pub cart: Cart,
    pub cart_total: u64,
    pub cart_item_count: u64,
}

/// A user interaction the storefront reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { section: Section },
    Search { query: String },
    SelectCategory { category: String },
    AddToCart { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    Increment { product_id: ProductId },
    Decrement { product_id: ProductId },
}

/// Applies `action` to `state` and returns the next state.
///
/// Every action is total: ids the catalog or cart does not know leave the
/// state as it was.
pub fn reduce(mut state: ViewState, action: &Action, catalog: &Catalog) -> ViewState {
    match action {
        Action::Navigate { section } => {
            debug!(from = %state.active_section, to = %section, "navigate");
            state.set_active_section(*section);
        }
        Action::Search { query } => {
            debug!(query = %query, "search query changed");
            state.set_search_query(query.clone());
        }
        Action::SelectCategory { category } => {
            if state.set_selected_category(catalog, category) {
                debug!(category = %category, "category selected");
            } else {
                warn!(category = %category, "ignoring unknown category");
            }
        }
        Action::AddToCart { product_id } => match catalog.product(*product_id) {
            Some(product) => {
                state.add_to_cart(product);
                debug!(
                    product_id = product.id,
                    quantity = state.cart.quantity(product.id),
                    "added to cart"
                );
            }
            None => warn!(product_id, "ignoring add of unknown product"),
        },
        Action::RemoveFromCart { product_id } => {
            state.remove_from_cart(*product_id);
            debug!(product_id, "removed from cart");
        }
        Action::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if *quantity < 0 {
                warn!(product_id, quantity, "negative quantity clamped to zero");
            }
            state.update_quantity(*product_id, *quantity);
            debug!(product_id, quantity, "quantity updated");
        }
        Action::Increment { product_id } => {
            state.cart.increment(*product_id);
            debug!(product_id, quantity = state.cart.quantity(*product_id), "incremented");
        }
        Action::Decrement { product_id } => {
            state.cart.decrement(*product_id);
            debug!(product_id, quantity = state.cart.quantity(*product_id), "decremented");
        }
    }
    state
}
