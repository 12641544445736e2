use crate::models::{ContactInfo, Highlight, Review, StoreContent};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static MINIMAL_SHOP_CONTENT: Lazy<StoreContent> = Lazy::new(minimal_shop);

/// Copy for the home, about, reviews and contacts panels.
pub fn builtin() -> &'static StoreContent {
    &MINIMAL_SHOP_CONTENT
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn minimal_shop() -> StoreContent {
    StoreContent {
        title: "MINIMAL SHOP".to_string(),
        hero_heading: "Красота в простоте".to_string(),
        hero_tagline: "Тщательно отобранные предметы для современного минималистичного дома"
            .to_string(),
        hero_cta: "Смотреть каталог".to_string(),
        featured_heading: "Популярные товары".to_string(),
        about: vec![
            "Мы верим, что красота заключается в простоте. Наш магазин предлагает тщательно \
             отобранную коллекцию минималистичных предметов интерьера, которые помогут создать \
             гармоничное пространство в вашем доме."
                .to_string(),
            "Каждый товар в нашем каталоге выбран с особым вниманием к качеству, \
             функциональности и дизайну. Мы работаем только с проверенными производителями, \
             которые разделяют нашу философию минимализма и устойчивого развития."
                .to_string(),
        ],
        highlights: vec![
            Highlight {
                title: "Качество".to_string(),
                text: "Только проверенные бренды и материалы".to_string(),
            },
            Highlight {
                title: "Доставка".to_string(),
                text: "Бережная доставка по всей России".to_string(),
            },
            Highlight {
                title: "Гарантия".to_string(),
                text: "14 дней на возврат без вопросов".to_string(),
            },
        ],
        reviews: vec![
            Review {
                author: "Анна Петрова".to_string(),
                rating: 5,
                text: "Потрясающее качество! Ваза превзошла все ожидания. Минималистичный \
                       дизайн идеально вписался в интерьер."
                    .to_string(),
                date: date(2024, 11, 15),
            },
            Review {
                author: "Дмитрий Соколов".to_string(),
                rating: 5,
                text: "Заказывал стул и лампу. Оба товара отличного качества, быстрая доставка. \
                       Рекомендую!"
                    .to_string(),
                date: date(2024, 11, 3),
            },
            Review {
                author: "Мария Иванова".to_string(),
                rating: 5,
                text: "Очень довольна покупкой! Покрывало мягкое, приятное к телу. Цвет точно \
                       как на фото."
                    .to_string(),
                date: date(2024, 10, 28),
            },
        ],
        contacts: ContactInfo {
            email: "hello@minimalshop.ru".to_string(),
            phone: "+7 (495) 123-45-67".to_string(),
            address: "Москва, ул. Примерная, д. 10".to_string(),
            opening_hours: vec![
                "Пн-Пт: 10:00 - 20:00".to_string(),
                "Сб-Вс: 11:00 - 18:00".to_string(),
            ],
        },
        empty_cart_cta: "Перейти в каталог".to_string(),
        footer: "© 2024 Minimal Shop. Все права защищены.".to_string(),
        footer_links: vec![
            "Политика конфиденциальности".to_string(),
            "Условия использования".to_string(),
        ],
    }
}
