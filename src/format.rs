//! ru-RU display formatting for prices and dates.

use chrono::{Datelike, NaiveDate};

/// Group separator used by the ru-RU locale.
pub const GROUP_SEPARATOR: char = '\u{00A0}';

/// Default currency symbol, printed after the amount.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

// ru-RU leaves four-digit numbers ungrouped.
const MIN_GROUPED_DIGITS: usize = 5;

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Formats `amount` with ru-RU digit grouping, e.g. `12 990`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Formats a price as `<grouped amount> <symbol>`.
pub fn format_price(amount: u64, symbol: &str) -> String {
    format!("{} {}", format_amount(amount), symbol)
}

/// Formats a date the way the reviews panel shows it, e.g. `15 ноября 2024`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
