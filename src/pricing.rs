//! Tiered domestic and per-country international pricing.
//!
//! The tier boundaries and rates are contractual billing constants carried
//! over from the operator's rate card; they are looked up, never derived.

use chrono::{Days, Local, NaiveDate};

use crate::domain::{CountryCode, DailyPrice, Message};

/// Domestic rate card: inclusive character ceiling to price in yen.
/// First tier spans 70 characters, every later tier 67.
const DOMESTIC_TIERS: &[(u32, f64)] = &[
    (70, 3.3),
    (134, 6.6),
    (201, 9.9),
    (268, 13.2),
    (335, 16.5),
    (402, 19.8),
    (469, 23.1),
    (536, 26.4),
    (603, 29.7),
    (670, 33.0),
];

/// Price applied beyond the last domestic tier; there is no higher tier.
const DOMESTIC_PRICE_CAP: f64 = 33.0;

/// Flat per-unit international rates by destination country.
const INTERNATIONAL_RATES: &[(&str, f64)] = &[
    ("US", 50.0),
    ("GB", 60.0),
    ("CN", 70.0),
    ("KR", 50.0),
    ("TH", 80.0),
];

/// Rate used for destinations missing from [`INTERNATIONAL_RATES`].
pub const DEFAULT_INTERNATIONAL_RATE: f64 = 100.0;

/// Characters per international billing unit.
const INTERNATIONAL_UNIT_CHARS: u32 = 70;

/// Trailing window used by the billing dashboard's daily chart.
pub const DEFAULT_DAILY_WINDOW_DAYS: u32 = 7;

/// Domestic price in yen for a message of `character_count` characters.
///
/// Counts beyond the last tier are clamped to its price.
pub fn domestic_price(character_count: u32) -> f64 {
    DOMESTIC_TIERS
        .iter()
        .find(|(ceiling, _)| character_count <= *ceiling)
        .map(|(_, price)| *price)
        .unwrap_or(DOMESTIC_PRICE_CAP)
}

/// International price for `character_count` characters to `country`.
///
/// A flat per-country rate times `ceil(character_count / 70)` units; unknown
/// or absent destinations silently use [`DEFAULT_INTERNATIONAL_RATE`].
pub fn international_price(character_count: u32, country: Option<&CountryCode>) -> f64 {
    let rate = country
        .and_then(|code| {
            INTERNATIONAL_RATES
                .iter()
                .find(|(known, _)| *known == code.as_str())
                .map(|(_, rate)| *rate)
        })
        .unwrap_or(DEFAULT_INTERNATIONAL_RATE);
    let units = character_count.div_ceil(INTERNATIONAL_UNIT_CHARS);
    rate * f64::from(units)
}

/// Raw (tag-unaware) character count of message content.
///
/// This is the pricing fallback when no `character_count` was recorded at
/// send time. It deliberately differs from
/// [`effective_length`](crate::meter::effective_length), which substitutes
/// tag placeholders: the original billing pipeline used the raw count here,
/// so displayed length and billed length can diverge for templates with
/// tags. Kept distinct pending product clarification.
pub fn raw_length(content: &str) -> u32 {
    content.chars().count() as u32
}

/// Price of one message, dispatching on its destination.
///
/// Uses the recorded `character_count` when present, else [`raw_length`] of
/// the content.
pub fn message_price(message: &Message) -> f64 {
    let count = message
        .character_count
        .unwrap_or_else(|| raw_length(&message.content));
    if message.is_international {
        international_price(count, message.country_code.as_ref())
    } else {
        domestic_price(count)
    }
}

/// Sum of prices over a collection, preferring each message's recorded
/// `price` over recomputing. Empty collections cost 0.
pub fn total_price(messages: &[Message]) -> f64 {
    messages
        .iter()
        .map(|message| message.price.unwrap_or_else(|| message_price(message)))
        .sum()
}

/// Mean price over a collection; 0 for an empty one.
pub fn average_price(messages: &[Message]) -> f64 {
    if messages.is_empty() {
        return 0.0;
    }
    total_price(messages) / messages.len() as f64
}

/// Per-day price totals for the trailing `days` days ending `today`,
/// oldest date first. Days with no messages yield price 0. Messages without
/// a `sent_on` date fall into no bucket.
pub fn daily_prices_on(messages: &[Message], days: u32, today: NaiveDate) -> Vec<DailyPrice> {
    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let price = messages
                .iter()
                .filter(|message| message.sent_on == Some(date))
                .map(|message| message.price.unwrap_or_else(|| message_price(message)))
                .sum();
            DailyPrice { date, price }
        })
        .collect()
}

/// [`daily_prices_on`] anchored at the local calendar date.
pub fn daily_prices(messages: &[Message], days: u32) -> Vec<DailyPrice> {
    daily_prices_on(messages, days, Local::now().date_naive())
}
