use crate::models::{Category, Product, ProductId, ALL_CATEGORY_ID};
use once_cell::sync::Lazy;
use serde::Serialize;

static MINIMAL_SHOP: Lazy<Catalog> = Lazy::new(|| Catalog::new(products(), categories()));

/// Immutable product and category lists.
///
/// The built-in catalog is compiled in and shared for the whole process;
/// tests can build their own with [`Catalog::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The Minimal Shop catalog.
    pub fn builtin() -> &'static Catalog {
        &MINIMAL_SHOP
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        id == ALL_CATEGORY_ID || self.category(id).is_some()
    }

    /// First `limit` products in catalog order, as shown on the home panel.
    pub fn featured(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }
}

const IMAGE_PARAMS: &str = "?w=400&h=400&fit=crop";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}{}", photo, IMAGE_PARAMS)
}

fn products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Минималистичная ваза",
            2490,
            "decor",
            unsplash("photo-1578500494198-246f612d3b3d"),
            "Элегантная керамическая ваза",
        ),
        Product::new(
            2,
            "Скандинавский стул",
            8990,
            "furniture",
            unsplash("photo-1506439773649-6e0eb8cfb237"),
            "Удобный стул из натурального дерева",
        ),
        Product::new(
            3,
            "Настольная лампа",
            3990,
            "lighting",
            unsplash("photo-1507473885765-e6ed057f782c"),
            "Лаконичная LED лампа",
        ),
        Product::new(
            4,
            "Хлопковое покрывало",
            4490,
            "textile",
            unsplash("photo-1522771739844-6a9f6d5f14af"),
            "Мягкое покрывало из органического хлопка",
        ),
        Product::new(
            5,
            "Книжная полка",
            12990,
            "furniture",
            unsplash("photo-1594620302200-9a762244a156"),
            "Настенная полка из дуба",
        ),
        Product::new(
            6,
            "Подушка декоративная",
            1990,
            "textile",
            unsplash("photo-1584100936595-c0654b55a2e2"),
            "Мягкая подушка с геометрическим узором",
        ),
        Product::new(
            7,
            "Керамическая тарелка",
            890,
            "decor",
            unsplash("photo-1610701596007-11502861dcfa"),
            "Ручная работа, уникальная глазурь",
        ),
        Product::new(
            8,
            "Торшер напольный",
            7990,
            "lighting",
            unsplash("photo-1513506003901-1e6a229e2d15"),
            "Регулируемый по высоте торшер",
        ),
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(ALL_CATEGORY_ID, "Все товары"),
        Category::new("furniture", "Мебель"),
        Category::new("decor", "Декор"),
        Category::new("lighting", "Освещение"),
        Category::new("textile", "Текстиль"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.categories()[0].is_wildcard());
    }

    #[test]
    fn test_product_ids_are_unique_and_positive() {
        let ids: HashSet<_> = Catalog::builtin().products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), Catalog::builtin().products().len());
        assert!(ids.iter().all(|id| *id > 0));
    }

    #[test]
    fn test_every_product_has_a_known_concrete_category() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let category = catalog
                .category(&product.category)
                .unwrap_or_else(|| panic!("unknown category {}", product.category));
            assert!(!category.is_wildcard());
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.product(5).unwrap().name, "Книжная полка");
        assert!(catalog.product(99).is_none());
    }

    #[test]
    fn test_has_category() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_category("all"));
        assert!(catalog.has_category("textile"));
        assert!(!catalog.has_category("garden"));
    }

    #[test]
    fn test_featured_clamps_to_catalog_size() {
        let catalog = Catalog::builtin();
        let featured: Vec<_> = catalog.featured(4).iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 3, 4]);
        assert_eq!(catalog.featured(100).len(), 8);
        assert!(catalog.featured(0).is_empty());
    }

    #[test]
    fn test_image_urls() {
        let vase = Catalog::builtin().product(1).unwrap();
        assert_eq!(
            vase.image,
            "https://images.unsplash.com/photo-1578500494198-246f612d3b3d?w=400&h=400&fit=crop"
        );
    }
}
