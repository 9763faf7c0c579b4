use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value::{CountryCode, MessageId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single SMS campaign message as held by the console's message store.
///
/// `character_count` and `price`, when present, are the counts the billing
/// pipeline computed at send time; pricing prefers them over recomputing
/// from `content`. Absent fields fall back to the raw (tag-unaware) content
/// length — see [`message_price`](crate::pricing::message_price).
pub struct Message {
    /// Raw message template, possibly containing `{tag}` placeholders.
    pub content: String,
    /// Whether the recipient number is outside the home country.
    pub is_international: bool,
    /// Destination country for international messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<CountryCode>,
    /// Billable character count recorded at send time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_count: Option<u32>,
    /// Price recorded at send time, in yen, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Calendar date the message was sent on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_on: Option<NaiveDate>,
}

impl Message {
    /// Create a domestic message with nothing precomputed.
    pub fn domestic(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_international: false,
            country_code: None,
            character_count: None,
            price: None,
            sent_on: None,
        }
    }

    /// Create an international message bound for `country`.
    pub fn international(content: impl Into<String>, country: CountryCode) -> Self {
        Self {
            content: content.into(),
            is_international: true,
            country_code: Some(country),
            character_count: None,
            price: None,
            sent_on: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A message together with its repository-assigned id.
pub struct MessageRecord {
    pub id: MessageId,
    pub message: Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// One day's summed price in a [`daily_prices`](crate::pricing::daily_prices)
/// report. `date` serializes as `YYYY-MM-DD`.
pub struct DailyPrice {
    pub date: NaiveDate,
    pub price: f64,
}
