use serde::{Deserialize, Serialize};

/// Stable identity of a catalog product.
pub type ProductId = u32;

/// A static catalog item.
///
/// Products are defined once when the catalog is built and never change
/// afterwards; cart lines carry their own copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole currency units, no minor part.
    pub price: u64,
    /// Id of the owning category, never the `all` wildcard.
    pub category: String,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// An empty query matches every product.
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn in_category(&self, category_id: &str) -> bool {
        category_id == super::category::ALL_CATEGORY_ID || self.category == category_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vase() -> Product {
        Product::new(
            1,
            "Минималистичная ваза",
            2490,
            "decor",
            "https://example.com/vase.jpg",
            "Элегантная керамическая ваза",
        )
    }

    #[test]
    fn test_name_matches_empty_query() {
        assert!(vase().name_matches(""));
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let product = vase();
        assert!(product.name_matches("ВАЗА"));
        assert!(product.name_matches("минимал"));
        assert!(!product.name_matches("стул"));
    }

    #[test]
    fn test_in_category_wildcard() {
        let product = vase();
        assert!(product.in_category("all"));
        assert!(product.in_category("decor"));
        assert!(!product.in_category("furniture"));
    }

    #[test]
    fn test_product_serialization() {
        let json = serde_json::to_value(vase()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 2490);
        assert_eq!(json["category"], "decor");
    }
}
