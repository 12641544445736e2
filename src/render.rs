//! Plain-text rendering of the storefront panels.
//!
//! Rendering is a pure function of the view state, the catalog and the
//! static store content.

use crate::{
    format::{format_date, format_price, DEFAULT_CURRENCY_SYMBOL},
    models::{Product, Section, StoreContent},
    services::{Catalog, ViewState},
};

const RULE_WIDTH: usize = 64;
/// Products shown on the home panel unless configured otherwise.
pub const DEFAULT_FEATURED_LIMIT: usize = 4;

/// Display options taken from the application config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub currency_symbol: String,
    pub featured_limit: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

struct Page<'a> {
    lines: Vec<String>,
    settings: &'a RenderSettings,
}

impl<'a> Page<'a> {
    fn new(settings: &'a RenderSettings) -> Self {
        Self {
            lines: Vec::new(),
            settings,
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn rule(&mut self) {
        self.lines.push("─".repeat(RULE_WIDTH));
    }

    fn heading(&mut self, text: &str) {
        self.line(text);
        self.line("=".repeat(text.chars().count()));
    }

    fn price(&self, amount: u64) -> String {
        format_price(amount, &self.settings.currency_symbol)
    }

    fn product_card(&mut self, product: &Product) {
        let price = self.price(product.price);
        self.line(format!("[{}] {}  {}", product.id, product.name, price));
        self.line(format!("    {}", product.description));
        self.line(format!("    {}", product.image));
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Renders the header, the active panel and the footer.
pub fn render(
    state: &ViewState,
    catalog: &Catalog,
    content: &StoreContent,
    settings: &RenderSettings,
) -> String {
    let mut page = Page::new(settings);
    header(&mut page, state, content);
    page.blank();
    render_section(&mut page, state, catalog, content);
    page.blank();
    footer(&mut page, content);
    page.finish()
}

/// Renders only the active panel.
pub fn render_panel(
    state: &ViewState,
    catalog: &Catalog,
    content: &StoreContent,
    settings: &RenderSettings,
) -> String {
    let mut page = Page::new(settings);
    render_section(&mut page, state, catalog, content);
    page.finish()
}

fn render_section(page: &mut Page<'_>, state: &ViewState, catalog: &Catalog, content: &StoreContent) {
    match state.active_section() {
        Section::Home => home(page, catalog, content),
        Section::Catalog => catalog_panel(page, state, catalog),
        Section::Cart => cart_panel(page, state, content),
        Section::About => about(page, content),
        Section::Reviews => reviews(page, content),
        Section::Contacts => contacts(page, content),
    }
}

fn header(page: &mut Page<'_>, state: &ViewState, content: &StoreContent) {
    let active = state.active_section();
    let nav: Vec<String> = Section::nav_entries()
        .map(|section| {
            if section == active {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect();

    let count = state.cart_item_count();
    let cart_label = if active == Section::Cart {
        format!("[{}]", Section::Cart.label())
    } else {
        Section::Cart.label().to_string()
    };
    let cart = if count > 0 {
        format!("{} ({})", cart_label, count)
    } else {
        cart_label
    };

    page.line(format!("{}    {}    {}", content.title, nav.join("  "), cart));
    page.rule();
}

fn footer(page: &mut Page<'_>, content: &StoreContent) {
    page.rule();
    page.line(content.footer.as_str());
    if !content.footer_links.is_empty() {
        page.line(content.footer_links.join("  ·  "));
    }
}

fn call_to_action(page: &mut Page<'_>, text: &str) {
    page.line(format!("→ {} (go {})", text, Section::Catalog));
}

fn home(page: &mut Page<'_>, catalog: &Catalog, content: &StoreContent) {
    page.heading(&content.hero_heading);
    page.line(content.hero_tagline.as_str());
    call_to_action(page, &content.hero_cta);
    page.blank();
    page.heading(&content.featured_heading);
    for product in catalog.featured(page.settings.featured_limit) {
        page.product_card(product);
    }
}

fn catalog_panel(page: &mut Page<'_>, state: &ViewState, catalog: &Catalog) {
    page.heading(Section::Catalog.label());
    page.line("Найдите идеальные предметы для вашего пространства");
    page.blank();

    if state.search_query().is_empty() {
        page.line("Поиск: —");
    } else {
        page.line(format!("Поиск: {}", state.search_query()));
    }

    let tabs: Vec<String> = catalog
        .categories()
        .iter()
        .map(|category| {
            if category.id == state.selected_category() {
                format!("[{}]", category.name)
            } else {
                category.name.clone()
            }
        })
        .collect();
    page.line(tabs.join(" | "));
    page.blank();

    let products = state.filtered_products(catalog);
    if products.is_empty() {
        page.line("Товары не найдены");
        page.line("Попробуйте изменить параметры поиска");
        return;
    }
    for product in products {
        page.product_card(product);
    }
}

fn cart_panel(page: &mut Page<'_>, state: &ViewState, content: &StoreContent) {
    page.heading(Section::Cart.label());
    let cart = state.cart();
    if cart.is_empty() {
        page.line("Корзина пуста");
        page.line("Добавьте товары из каталога");
        call_to_action(page, &content.empty_cart_cta);
        return;
    }

    for line in cart.lines() {
        let unit = page.price(line.product.price);
        let total = page.price(line.line_total());
        page.line(format!("[{}] {}", line.product.id, line.product.name));
        page.line(format!("    {}", line.product.description));
        page.line(format!("    {} × {} = {}", unit, line.quantity, total));
    }
    page.blank();
    let total = page.price(state.cart_total());
    page.line(format!("Итого: {}", total));
}

fn about(page: &mut Page<'_>, content: &StoreContent) {
    page.heading(Section::About.label());
    for paragraph in &content.about {
        page.line(paragraph.as_str());
        page.blank();
    }
    for highlight in &content.highlights {
        page.line(format!("* {}: {}", highlight.title, highlight.text));
    }
}

fn reviews(page: &mut Page<'_>, content: &StoreContent) {
    page.heading(Section::Reviews.label());
    for review in &content.reviews {
        page.line(format!(
            "{}  {}  {}",
            review.author,
            format_date(review.date),
            "★".repeat(usize::from(review.rating))
        ));
        page.line(format!("    {}", review.text));
    }
}

fn contacts(page: &mut Page<'_>, content: &StoreContent) {
    page.heading(Section::Contacts.label());
    let info = &content.contacts;
    page.line(format!("Email: {}", info.email));
    page.line(format!("Телефон: {}", info.phone));
    page.line(format!("Адрес: {}", info.address));
    for hours in &info.opening_hours {
        page.line(format!("    {}", hours));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{content, reduce, Action};

    fn render_after(actions: &[Action]) -> String {
        let catalog = Catalog::builtin();
        let state = actions
            .iter()
            .fold(ViewState::new(), |state, action| reduce(state, action, catalog));
        render(&state, catalog, content::builtin(), &RenderSettings::default())
    }

    fn go(section: Section) -> Action {
        Action::Navigate { section }
    }

    #[test]
    fn test_home_shows_featured_products() {
        let out = render_after(&[]);
        assert!(out.contains("MINIMAL SHOP"));
        assert!(out.contains("[Главная]"));
        assert!(out.contains("Хлопковое покрывало"));
        assert!(!out.contains("Книжная полка"));
    }

    #[test]
    fn test_badge_hidden_for_empty_cart() {
        let out = render_after(&[]);
        assert!(!out.contains("Корзина ("));
        let out = render_after(&[
            Action::AddToCart { product_id: 1 },
            Action::AddToCart { product_id: 1 },
        ]);
        assert!(out.contains("Корзина (2)"));
    }

    #[test]
    fn test_catalog_no_results_state() {
        let out = render_after(&[
            go(Section::Catalog),
            Action::Search {
                query: "диван".into(),
            },
        ]);
        assert!(out.contains("Товары не найдены"));
    }

    #[test]
    fn test_catalog_marks_selected_tab() {
        let out = render_after(&[
            go(Section::Catalog),
            Action::SelectCategory {
                category: "textile".into(),
            },
        ]);
        assert!(out.contains("[Текстиль]"));
        assert!(out.contains("Подушка декоративная"));
        assert!(!out.contains("Минималистичная ваза"));
    }

    #[test]
    fn test_empty_cart_panel() {
        let out = render_after(&[go(Section::Cart)]);
        assert!(out.contains("Корзина пуста"));
        assert!(out.contains("→ Перейти в каталог (go catalog)"));
    }

    #[test]
    fn test_filled_cart_has_no_catalog_prompt() {
        let out = render_after(&[Action::AddToCart { product_id: 1 }, go(Section::Cart)]);
        assert!(!out.contains("Перейти в каталог"));
    }

    #[test]
    fn test_home_hero_links_to_catalog() {
        let out = render_after(&[]);
        assert!(out.contains("→ Смотреть каталог (go catalog)"));
    }

    #[test]
    fn test_footer_lists_policy_links() {
        let out = render_after(&[go(Section::About)]);
        assert!(out.contains("© 2024 Minimal Shop. Все права защищены."));
        assert!(out.contains("Политика конфиденциальности  ·  Условия использования"));
    }

    #[test]
    fn test_cart_panel_totals() {
        let out = render_after(&[
            Action::AddToCart { product_id: 1 },
            Action::AddToCart { product_id: 2 },
            Action::AddToCart { product_id: 1 },
            go(Section::Cart),
        ]);
        assert!(out.contains("2490 ₽ × 2 = 4980 ₽"));
        assert!(out.contains("Итого: 13\u{a0}970 ₽"));
    }

    #[test]
    fn test_reviews_panel() {
        let out = render_after(&[go(Section::Reviews)]);
        assert!(out.contains("Анна Петрова  15 ноября 2024  ★★★★★"));
    }

    #[test]
    fn test_contacts_panel() {
        let out = render_after(&[go(Section::Contacts)]);
        assert!(out.contains("hello@minimalshop.ru"));
        assert!(out.contains("Сб-Вс: 11:00 - 18:00"));
    }

    #[test]
    fn test_about_panel() {
        let out = render_after(&[go(Section::About)]);
        assert!(out.contains("* Гарантия: 14 дней на возврат без вопросов"));
    }

    #[test]
    fn test_panel_omits_header() {
        let catalog = Catalog::builtin();
        let state = ViewState::starting_at(Section::Contacts);
        let out = render_panel(&state, catalog, content::builtin(), &RenderSettings::default());
        assert!(!out.contains("MINIMAL SHOP"));
        assert!(out.starts_with("Контакты"));
    }
}
