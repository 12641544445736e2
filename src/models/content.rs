use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer review shown on the reviews panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1..=5 stars.
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
}

/// One of the selling points on the about panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub opening_hours: Vec<String>,
}

/// Static copy for the informational panels, header and footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContent {
    pub title: String,
    pub hero_heading: String,
    pub hero_tagline: String,
    /// Call to action under the hero, leading to the catalog.
    pub hero_cta: String,
    pub featured_heading: String,
    pub about: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub reviews: Vec<Review>,
    pub contacts: ContactInfo,
    /// Shown with the empty-cart message, leading back to the catalog.
    pub empty_cart_cta: String,
    pub footer: String,
    pub footer_links: Vec<String>,
}
