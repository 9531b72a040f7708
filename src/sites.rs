//! Per-platform site profiles and source adapters.
//!
//! A `SiteProfile` is pure data: the container selector for listing
//! fragments plus the ordered locator chains for each field. Keeping the
//! fallback chains declarative makes adding a platform a data change,
//! not new branching.
//!
//! `search` is the adapter boundary: network failures, error statuses
//! and unmatched containers all degrade to an empty result list for that
//! platform only, so one broken source never hides the others.

use scraper::{ElementRef, Html, Selector};

use crate::extract::{self, ImageRule, PriceRule, RatingRule, TextRule};
use crate::fetch;
use crate::product::{Platform, ProductRecord};

/// Everything needed to turn one platform's result page into records
pub struct SiteProfile {
    pub platform: Platform,
    pub base_url: &'static str,
    /// Selects one listing fragment per product
    pub container: &'static str,
    pub title: &'static [TextRule],
    pub link: &'static [&'static str],
    pub price: &'static [PriceRule],
    pub rating: &'static [RatingRule],
    pub image: &'static [ImageRule],
}

// Amazon swaps its result markup often; the title and link chains carry
// the variants seen in the wild.
const AMAZON: SiteProfile = SiteProfile {
    platform: Platform::Amazon,
    base_url: "https://www.amazon.in",
    container: "div.s-main-slot div[data-component-type='s-search-result']",
    title: &[
        TextRule::Text("h2 a span"),
        TextRule::Text("span.a-size-base-plus"),
        TextRule::Text("span.a-text-normal"),
        TextRule::Text("h2 span"),
    ],
    link: &["h2 a", "a.a-link-normal", "a.a-text-normal"],
    price: &[PriceRule::WholeFraction {
        whole: "span.a-price-whole",
        fraction: "span.a-price-fraction",
    }],
    rating: &[RatingRule::LeadingToken("span.a-icon-alt")],
    image: &[ImageRule::Attr("img.s-image", &["src", "data-src", "srcset"])],
};

const FLIPKART: SiteProfile = SiteProfile {
    platform: Platform::Flipkart,
    base_url: "https://www.flipkart.com",
    container: "div._1AtVbE",
    title: &[TextRule::Text("a.IRpwTa"), TextRule::Text("a._1fQZEK")],
    link: &["a.IRpwTa", "a._1fQZEK"],
    price: &[PriceRule::Text("div._30jeq3")],
    rating: &[RatingRule::Text("div._3LWZlK")],
    image: &[
        ImageRule::Attr("img._396cs4", &["src"]),
        ImageRule::Attr("img._2r_T1I", &["src"]),
    ],
};

// Myntra titles are a brand element plus a product-name element.
const MYNTRA: SiteProfile = SiteProfile {
    platform: Platform::Myntra,
    base_url: "https://www.myntra.com",
    container: "li.product-base",
    title: &[TextRule::Joined("h3.product-brand", "h4.product-product")],
    link: &["a[href]"],
    price: &[
        PriceRule::Text("span.product-discountedPrice"),
        PriceRule::Text("span.product-price"),
    ],
    rating: &[RatingRule::Text("div.product-ratingsContainer")],
    image: &[ImageRule::Attr("img.img-responsive", &["src"])],
};

/// Profile for a platform
pub fn profile(platform: Platform) -> &'static SiteProfile {
    match platform {
        Platform::Amazon => &AMAZON,
        Platform::Flipkart => &FLIPKART,
        Platform::Myntra => &MYNTRA,
    }
}

/// Build the search URL for a platform and query
pub fn search_url(platform: Platform, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    match platform {
        Platform::Amazon => format!("https://www.amazon.in/s?k={}", encoded),
        Platform::Flipkart => format!("https://www.flipkart.com/search?q={}", encoded),
        // Myntra routes searches through a slugged path plus the raw query
        Platform::Myntra => format!(
            "https://www.myntra.com/{}?rawQuery={}",
            query.trim().replace(' ', "-"),
            encoded
        ),
    }
}

/// Extract one record from one listing fragment. Total: a fragment with
/// no usable fields yields an all-sentinel record.
fn extract_record(fragment: &ElementRef, profile: &SiteProfile) -> ProductRecord {
    ProductRecord {
        title: extract::extract_title(fragment, profile.title),
        price: extract::extract_price(fragment, profile.price),
        rating: extract::extract_rating(fragment, profile.rating),
        url: extract::extract_link(fragment, profile.link, profile.base_url),
        image: extract::extract_image(fragment, profile.image),
        platform: profile.platform,
    }
}

/// Parse a result page into records, capped at `max_results`, in
/// document order. Pure — tests feed frozen documents through this.
pub fn parse_results(html: &str, profile: &SiteProfile, max_results: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    let Ok(container) = Selector::parse(profile.container) else {
        return Vec::new();
    };

    document
        .select(&container)
        .take(max_results)
        .map(|fragment| extract_record(&fragment, profile))
        .collect()
}

/// Fetch and parse one platform's results for a query.
///
/// Never errors: any failure leaves this platform contributing zero
/// records while the rest of the query proceeds.
pub fn search(platform: Platform, query: &str, max_results: usize) -> Vec<ProductRecord> {
    let profile = profile(platform);
    let url = search_url(platform, query);

    match fetch::fetch_html(&url) {
        Ok(html) => parse_results(&html, profile, max_results),
        Err(e) => {
            eprintln!("  {} unavailable: {}", platform.label(), e);
            Vec::new()
        }
    }
}
