use crate::domain::LengthOptions;
use crate::meter::tags;

/// Characters carried by the first segment of a message.
pub const FIRST_SEGMENT_CAPACITY: u32 = 70;

/// Usable characters per continuation segment; the rest of each segment is
/// reserved for the multi-part SMS header.
pub const CONTINUATION_SEGMENT_CAPACITY: u32 = 66;

/// Unified per-message character ceiling.
pub const CHARACTER_LIMIT: u32 = 660;

/// Width one line break contributes; carriers encode it as a two-byte
/// control sequence.
const LINE_BREAK_WIDTH: u32 = 2;

/// Billable character count of a message template.
///
/// Line breaks count as 2, `{URL<n>}` tags as
/// [`URL_TAG_WIDTH`](crate::meter::URL_TAG_WIDTH), every other `{tag}` as
/// [`GENERIC_TAG_WIDTH`](crate::meter::GENERIC_TAG_WIDTH), and all remaining
/// text one per Unicode scalar value. Stray braces that form no tag stay
/// literal. The options are accepted for form compatibility and do not
/// change the result.
pub fn effective_length(text: &str, _options: &LengthOptions) -> u32 {
    let mut total = 0u32;
    let mut cursor = 0usize;
    for tag in tags::ANY_TAG.find_iter(text) {
        total += literal_width(&text[cursor..tag.start()]);
        total += tags::placeholder_width(tag.as_str());
        cursor = tag.end();
    }
    total + literal_width(&text[cursor..])
}

fn literal_width(text: &str) -> u32 {
    text.chars()
        .map(|c| if c == '\n' { LINE_BREAK_WIDTH } else { 1 })
        .sum()
}

/// Number of physical segments ("通") needed to deliver the message.
///
/// An empty message takes 0 segments, anything up to
/// [`FIRST_SEGMENT_CAPACITY`] takes 1, and every further
/// [`CONTINUATION_SEGMENT_CAPACITY`] characters (or part thereof) add one.
pub fn segment_count(text: &str, options: &LengthOptions) -> u32 {
    let length = effective_length(text, options);
    if length == 0 {
        return 0;
    }
    if length <= FIRST_SEGMENT_CAPACITY {
        return 1;
    }
    1 + (length - FIRST_SEGMENT_CAPACITY).div_ceil(CONTINUATION_SEGMENT_CAPACITY)
}

/// Per-message character ceiling for the given options.
///
/// Always [`CHARACTER_LIMIT`]: `enable_long_sms` and `carrier` are accepted
/// but deliberately ignored, matching the behavior the campaign forms rely
/// on. Flagged to product as dead configuration rather than silently fixed.
pub fn character_limit(_options: &LengthOptions) -> u32 {
    CHARACTER_LIMIT
}

/// Whether the message's billable length exceeds [`character_limit`].
pub fn is_length_exceeded(text: &str, options: &LengthOptions) -> bool {
    effective_length(text, options) > character_limit(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> LengthOptions {
        LengthOptions::default()
    }

    #[test]
    fn empty_text_has_zero_length_and_segments() {
        assert_eq!(effective_length("", &opts()), 0);
        assert_eq!(segment_count("", &opts()), 0);
    }

    #[test]
    fn plain_text_counts_scalar_values() {
        assert_eq!(effective_length("hello", &opts()), 5);
        assert_eq!(effective_length("こんにちは", &opts()), 5);
    }

    #[test]
    fn line_break_counts_as_two() {
        // 2 letters + 2 for the break + 2 letters.
        assert_eq!(effective_length("ab\ncd", &opts()), 6);
        assert_eq!(effective_length("\n\n", &opts()), 4);
    }

    #[test]
    fn url_tag_counts_as_twenty() {
        assert_eq!(effective_length("{URL1}", &opts()), 20);
        assert_eq!(effective_length("{URL}", &opts()), 20);
        assert_eq!(effective_length("go: {URL1} or {URL2}", &opts()), 48);
    }

    #[test]
    fn generic_tag_counts_as_nineteen() {
        assert_eq!(effective_length("{foo}", &opts()), 19);
        assert_eq!(effective_length("{customerName}様", &opts()), 20);
    }

    #[test]
    fn url_tag_with_letter_suffix_is_generic() {
        assert_eq!(effective_length("{URLx}", &opts()), 19);
    }

    #[test]
    fn repeated_tags_each_count() {
        assert_eq!(effective_length("{foo}{foo}", &opts()), 38);
    }

    #[test]
    fn stray_braces_stay_literal() {
        assert_eq!(effective_length("{", &opts()), 1);
        assert_eq!(effective_length("a}b{c", &opts()), 5);
        assert_eq!(effective_length("{}", &opts()), 2);
        assert_eq!(effective_length("{not closed", &opts()), 11);
    }

    #[test]
    fn single_segment_up_to_seventy() {
        assert_eq!(segment_count(&"a".repeat(70), &opts()), 1);
        assert_eq!(segment_count("a", &opts()), 1);
    }

    #[test]
    fn continuation_segments_carry_sixty_six() {
        for (length, segments) in [
            (71u32, 2u32),
            (136, 2),
            (137, 3),
            (202, 3),
            (203, 4),
            (350, 6),
            (660, 10),
        ] {
            let text = "a".repeat(length as usize);
            assert_eq!(
                segment_count(&text, &opts()),
                segments,
                "length {length} should need {segments} segments"
            );
        }
    }

    #[test]
    fn limit_is_unified_at_660() {
        assert_eq!(character_limit(&opts()), 660);
        let docomo = LengthOptions {
            enable_long_sms: true,
            carrier: Some(crate::domain::Carrier::Docomo),
        };
        assert_eq!(character_limit(&docomo), 660);
    }

    #[test]
    fn exceeded_check_compares_effective_length() {
        assert!(!is_length_exceeded(&"a".repeat(660), &opts()));
        assert!(is_length_exceeded(&"a".repeat(661), &opts()));
        // 33 URL tags at width 20 sit exactly on the ceiling; one more tips it.
        assert!(!is_length_exceeded(&"{URL1}".repeat(33), &opts()));
        assert!(is_length_exceeded(&"{URL1}".repeat(34), &opts()));
    }

    #[test]
    fn tag_substitution_feeds_segmentation() {
        // 60 literal chars + one URL tag = 80 -> two segments.
        let text = format!("{}{}", "a".repeat(60), "{URL1}");
        assert_eq!(effective_length(&text, &opts()), 80);
        assert_eq!(segment_count(&text, &opts()), 2);
    }
}
