//! SMS segmentation and tiered pricing calculator for broadcast campaigns.
//!
//! The crate is the billing core behind an SMS broadcast console: a domain
//! layer of strong types, a pure metering layer for lengths and segments,
//! and a pricing layer over the operator's rate card. Message templates may
//! carry `{tag}` placeholders (customer name, shortened URL, survey link);
//! metering charges each tag a fixed placeholder width instead of its final
//! substituted content.
//!
//! ```rust
//! use smsmeter::{LengthOptions, domestic_price, effective_length, segment_count};
//!
//! let opts = LengthOptions::default();
//! let text = "お得なお知らせ\n詳細は {URL1} から";
//!
//! let length = effective_length(text, &opts);
//! assert_eq!(length, 36);
//! assert_eq!(segment_count(text, &opts), 1);
//! assert_eq!(domestic_price(length), 3.3);
//! ```
#![forbid(unsafe_code)]

pub mod domain;
pub mod meter;
pub mod pricing;
pub mod store;

pub use domain::{
    Carrier, CountryCode, DailyPrice, LengthOptions, Message, MessageId, MessageRecord,
    ValidationError,
};
pub use meter::{
    character_limit, effective_length, is_length_exceeded, next_url_tag_index,
    normalize_url_tags, segment_count,
};
pub use pricing::{
    average_price, daily_prices, daily_prices_on, domestic_price, international_price,
    message_price, raw_length, total_price,
};
pub use store::{InMemoryMessageRepository, MessageRepository, StoreError};
