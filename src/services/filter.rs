use crate::models::Product;

/// Products whose name contains `query` (case-insensitive) and whose
/// category is `category_id`, or any category when it is `all`.
///
/// Catalog order is preserved. An unknown category yields an empty list.
pub fn filtered_products<'a>(
    products: &'a [Product],
    query: &str,
    category_id: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.in_category(category_id) && product.name_matches(query))
        .collect()
}
