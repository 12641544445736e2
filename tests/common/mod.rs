#![allow(dead_code)]

use minimal_shop::{
    models::{Category, Product},
    reduce, Action, Catalog, ViewState,
};

/// Small fixture catalog with prices chosen to make sums easy to read.
pub fn fixture_catalog() -> Catalog {
    Catalog::new(
        vec![
            Product::new(10, "Oak Table", 10_000, "furniture", "img://table", "Solid oak"),
            Product::new(11, "Oak Chair", 2_500, "furniture", "img://chair", "Matches the table"),
            Product::new(12, "Glass Vase", 900, "decor", "img://vase", "Hand blown"),
            Product::new(13, "Floor Lamp", 4_000, "lighting", "img://lamp", "Warm light"),
        ],
        vec![
            Category::new("all", "Everything"),
            Category::new("furniture", "Furniture"),
            Category::new("decor", "Decor"),
            Category::new("lighting", "Lighting"),
        ],
    )
}

/// Folds `actions` over a fresh state.
pub fn run(catalog: &Catalog, actions: &[Action]) -> ViewState {
    actions
        .iter()
        .fold(ViewState::new(), |state, action| reduce(state, action, catalog))
}

pub fn add(product_id: u32) -> Action {
    Action::AddToCart { product_id }
}

pub fn cart_lines(state: &ViewState) -> Vec<(u32, u32)> {
    state
        .cart()
        .lines()
        .map(|line| (line.product_id(), line.quantity))
        .collect()
}
