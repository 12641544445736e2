use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The six mutually exclusive storefront panels.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Cart,
    About,
    Reviews,
    Contacts,
}

impl Section {
    /// Navigation label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::Cart => "Корзина",
            Section::About => "О магазине",
            Section::Reviews => "Отзывы",
            Section::Contacts => "Контакты",
        }
    }

    /// Sections listed in the header nav. The cart is reached through the
    /// cart button instead.
    pub fn nav_entries() -> impl Iterator<Item = Section> {
        Section::iter().filter(|section| *section != Section::Cart)
    }
}
