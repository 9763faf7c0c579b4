use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Width a `{URL}`/`{URL<n>}` tag contributes to the billable length: the
/// fixed length of an `https` shortened link.
pub const URL_TAG_WIDTH: u32 = 20;

/// Width any other `{tag}` contributes: the fixed length of an `http`
/// shortened link, used for survey links and dynamic tokens.
pub const GENERIC_TAG_WIDTH: u32 = 19;

/// Any well-formed tag: `{identifier}` with one or more word characters.
/// Stray braces do not match and stay literal.
pub(crate) static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[A-Za-z0-9_]+\}").expect("tag pattern"));

/// URL tags only, capturing the optional index digits.
static URL_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{URL([0-9]*)\}").expect("url tag pattern"));

/// Whether a matched tag (including braces) is a URL tag.
///
/// The body must be exactly `URL` followed by zero or more digits;
/// `{URLx}` or `{url1}` are generic tags.
pub(crate) fn is_url_tag(tag: &str) -> bool {
    tag.strip_prefix("{URL")
        .and_then(|rest| rest.strip_suffix('}'))
        .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Billable width of one matched tag (including braces).
pub(crate) fn placeholder_width(tag: &str) -> u32 {
    if is_url_tag(tag) {
        URL_TAG_WIDTH
    } else {
        GENERIC_TAG_WIDTH
    }
}

/// Suggest the next free URL tag index for `text`.
///
/// Scans every `{URL<digits>}` occurrence; a bare `{URL}` counts as index 1.
/// Returns one past the highest index found, or 1 when there are no URL tags.
/// Advisory only; collisions are not enforced anywhere.
pub fn next_url_tag_index(text: &str) -> u64 {
    let highest = URL_TAG
        .captures_iter(text)
        .filter_map(|caps| {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            if digits.is_empty() {
                Some(1)
            } else {
                // A digit run too long for u64 is ignored rather than panicking.
                digits.parse::<u64>().ok()
            }
        })
        .max()
        .unwrap_or(0);
    // An index of u64::MAX would wrap; pin the suggestion there instead.
    highest.saturating_add(1)
}

/// Rewrite every URL tag to `{URL1}`, `{URL2}`, … in order of appearance,
/// discarding the original indices. Idempotent; all other text is untouched.
pub fn normalize_url_tags(text: &str) -> String {
    let mut next = 0u64;
    URL_TAG
        .replace_all(text, |_: &Captures<'_>| {
            next += 1;
            format!("{{URL{next}}}")
        })
        .into_owned()
}
