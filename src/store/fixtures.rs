//! Randomized demo messages for the console's mock backend.
//!
//! The RNG is always supplied by the caller so fixtures stay deterministic
//! under a seeded generator (`StdRng::seed_from_u64` in tests).

use chrono::{Days, NaiveDate};
use rand::{Rng, RngExt};

use crate::domain::{CountryCode, LengthOptions, Message};
use crate::meter;
use crate::pricing;

const SAMPLE_BODIES: &[&str] = &[
    "お客様感謝セール開催中！詳細はこちら {URL1}",
    "{customerName}様、ご予約を承りました。\n変更はこちら {URL1}",
    "アンケートにご協力ください {URL1}",
    "本日限定クーポンをお届けします",
    "お荷物を発送しました。配送状況: {URL1}",
    "Your verification code arrives shortly.",
];

const SAMPLE_COUNTRIES: &[&str] = &["US", "GB", "CN", "KR", "TH", "SG"];

/// Generate `count` demo messages dated within the trailing week before
/// `today`, with billable counts and prices precomputed the way the send
/// pipeline records them. Roughly one in five is international.
pub fn generate_messages<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    today: NaiveDate,
) -> Vec<Message> {
    (0..count)
        .map(|_| {
            let content = SAMPLE_BODIES[rng.random_range(0..SAMPLE_BODIES.len())];
            let mut message = if rng.random_bool(0.2) {
                let code = SAMPLE_COUNTRIES[rng.random_range(0..SAMPLE_COUNTRIES.len())];
                // The sample table only holds well-formed codes.
                match CountryCode::new(code) {
                    Ok(country) => Message::international(content, country),
                    Err(_) => Message::domestic(content),
                }
            } else {
                Message::domestic(content)
            };

            message.character_count =
                Some(meter::effective_length(content, &LengthOptions::default()));
            message.price = Some(pricing::message_price(&message));
            message.sent_on = today.checked_sub_days(Days::new(rng.random_range(0..7)));
            message
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_messages(&mut StdRng::seed_from_u64(7), 20, today());
        let b = generate_messages(&mut StdRng::seed_from_u64(7), 20, today());
        assert_eq!(a, b);
    }

    #[test]
    fn generated_messages_are_internally_consistent() {
        let messages = generate_messages(&mut StdRng::seed_from_u64(1), 50, today());
        assert_eq!(messages.len(), 50);

        for message in &messages {
            assert_eq!(
                message.character_count,
                Some(meter::effective_length(
                    &message.content,
                    &LengthOptions::default()
                ))
            );
            assert_eq!(message.price, Some(pricing::message_price(message)));
            assert_eq!(message.is_international, message.country_code.is_some());

            let sent_on = message.sent_on.expect("fixtures are always dated");
            assert!(sent_on <= today());
            assert!(sent_on >= today().checked_sub_days(Days::new(6)).unwrap());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_messages(&mut StdRng::seed_from_u64(1), 30, today());
        let b = generate_messages(&mut StdRng::seed_from_u64(2), 30, today());
        assert_ne!(a, b);
    }
}
