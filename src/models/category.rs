use serde::{Deserialize, Serialize};

/// Reserved category id that matches every product.
pub const ALL_CATEGORY_ID: &str = "all";

/// A named grouping of products, shown as a tab in the catalog panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}
