//! Length, segmentation, and tag metering over message templates.
//!
//! Everything here is pure: raw template text plus [`LengthOptions`] in,
//! numbers out. The campaign forms call these on every keystroke.

mod length;
mod tags;

pub use length::{
    CHARACTER_LIMIT, CONTINUATION_SEGMENT_CAPACITY, FIRST_SEGMENT_CAPACITY, character_limit,
    effective_length, is_length_exceeded, segment_count,
};
pub use tags::{GENERIC_TAG_WIDTH, URL_TAG_WIDTH, next_url_tag_index, normalize_url_tags};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LengthOptions;

    #[test]
    fn normalized_text_meters_the_same_as_the_original() {
        let original = "check {URL9} and {URL3}\nbye";
        let normalized = normalize_url_tags(original);
        assert_eq!(normalized, "check {URL1} and {URL2}\nbye");
        assert_eq!(
            effective_length(original, &LengthOptions::default()),
            effective_length(&normalized, &LengthOptions::default()),
        );
    }

    #[test]
    fn suggested_index_never_collides() {
        let text = "a {URL} b {URL4}";
        let next = next_url_tag_index(text);
        assert_eq!(next, 5);
        assert!(!text.contains(&format!("{{URL{next}}}")));
    }
}
