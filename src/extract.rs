//! Field extraction from listing fragments.
//!
//! Each field of a site profile is an ordered list of locator rules tried
//! in sequence; the first rule that yields a non-empty value wins, and a
//! field whose whole chain misses falls back to its sentinel. Extraction
//! of a fragment is total: malformed markup produces sentinel values,
//! never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::product::MISSING_TEXT;

/// Highest rating any platform hands out
const MAX_RATING: f64 = 5.0;

/// Currency symbols, thousand separators and whitespace stripped before
/// numeric parsing
static AMOUNT_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[₹$€£,\s]").expect("Invalid amount noise regex"));

/// Locator rule for a text field
#[derive(Debug, Clone, Copy)]
pub enum TextRule {
    /// Text content of the first element matching the selector
    Text(&'static str),
    /// Text of two required sub-elements joined with a space
    /// (e.g. Myntra's brand + product name)
    Joined(&'static str, &'static str),
}

/// Locator rule for a price field
#[derive(Debug, Clone, Copy)]
pub enum PriceRule {
    /// One element holds the full price text
    Text(&'static str),
    /// Integer and fractional parts live in separate sub-elements and
    /// are concatenated with a decimal point (Amazon's price markup)
    WholeFraction {
        whole: &'static str,
        fraction: &'static str,
    },
}

/// Locator rule for a rating field
#[derive(Debug, Clone, Copy)]
pub enum RatingRule {
    /// Element text is the rating itself
    Text(&'static str),
    /// Rating is the leading token of the text ("4.3 out of 5 stars")
    LeadingToken(&'static str),
}

/// Locator rule for an image field
#[derive(Debug, Clone, Copy)]
pub enum ImageRule {
    /// First matching element, trying each attribute in order. A
    /// `srcset` value is reduced to its first URL.
    Attr(&'static str, &'static [&'static str]),
}

/// Text of the first element matching `selector`, trimmed; `None` when
/// the selector is invalid, matches nothing, or matches only whitespace.
fn select_text(fragment: &ElementRef, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = fragment.select(&sel).next()?;
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    let text = text.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Attribute of the first element matching `selector`
fn select_attr(fragment: &ElementRef, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = fragment.select(&sel).next()?;
    let value = element.value().attr(attr)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Strip currency symbols and thousand separators, then parse as a
/// non-negative float. Anything unparseable is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = AMOUNT_NOISE_RE.replace_all(raw, "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Run a title chain; sentinel when no rule matches
pub fn extract_title(fragment: &ElementRef, rules: &[TextRule]) -> String {
    for rule in rules {
        match rule {
            TextRule::Text(selector) => {
                if let Some(text) = select_text(fragment, selector) {
                    return text;
                }
            }
            TextRule::Joined(first, second) => {
                if let (Some(a), Some(b)) =
                    (select_text(fragment, first), select_text(fragment, second))
                {
                    return format!("{} {}", a, b);
                }
            }
        }
    }
    MISSING_TEXT.to_string()
}

/// Run a link chain and resolve the href against the platform base URL;
/// sentinel when nothing matches or the href does not resolve.
pub fn extract_link(fragment: &ElementRef, selectors: &[&'static str], base: &str) -> String {
    for selector in selectors {
        if let Some(href) = select_attr(fragment, selector, "href") {
            if let Some(absolute) = resolve_url(base, &href) {
                return absolute;
            }
        }
    }
    MISSING_TEXT.to_string()
}

/// Run a price chain; `0.0` means "no usable price"
pub fn extract_price(fragment: &ElementRef, rules: &[PriceRule]) -> f64 {
    for rule in rules {
        let text = match rule {
            PriceRule::Text(selector) => select_text(fragment, selector),
            PriceRule::WholeFraction { whole, fraction } => {
                select_text(fragment, whole).map(|w| {
                    // Amazon sometimes renders the decimal point inside
                    // the whole-part element.
                    let w = w.trim_end_matches('.').to_string();
                    match select_text(fragment, fraction) {
                        Some(f) => format!("{}.{}", w, f),
                        None => w,
                    }
                })
            }
        };
        if let Some(price) = text.as_deref().and_then(parse_amount) {
            return price;
        }
    }
    0.0
}

/// Run a rating chain, clamped to `[0, 5]`; `0.0` means "unrated"
pub fn extract_rating(fragment: &ElementRef, rules: &[RatingRule]) -> f64 {
    for rule in rules {
        let text = match rule {
            RatingRule::Text(selector) => select_text(fragment, selector),
            RatingRule::LeadingToken(selector) => select_text(fragment, selector)
                .and_then(|t| t.split_whitespace().next().map(String::from)),
        };
        if let Some(rating) = text.as_deref().and_then(parse_amount) {
            return rating.clamp(0.0, MAX_RATING);
        }
    }
    0.0
}

/// Run an image chain; empty string when nothing matches
pub fn extract_image(fragment: &ElementRef, rules: &[ImageRule]) -> String {
    for rule in rules {
        let ImageRule::Attr(selector, attrs) = rule;
        for attr in *attrs {
            if let Some(value) = select_attr(fragment, selector, attr) {
                // srcset lists "url width" pairs; take the first URL
                let url = value.split_whitespace().next().unwrap_or(&value);
                if !url.is_empty() {
                    return url.to_string();
                }
            }
        }
    }
    String::new()
}

/// Resolve a potentially relative URL against a base URL
fn resolve_url(base: &str, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base_url = url::Url::parse(base).ok()?;
    base_url.join(href).ok().map(|u| u.to_string())
}
