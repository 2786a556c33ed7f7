use crate::error::{PostError, Result};
use log::{info, warn};
use select::{
    document::Document,
    predicate::{Attr, Name, Predicate as _},
};

pub const FALLBACK_IMAGE_URL: &str = "https://picsum.photos/1000/666";

struct PreviewSource {
    element: &'static str,
    key: &'static str,
    value: &'static str,
    target: &'static str,
}

const fn meta(key: &'static str, value: &'static str) -> PreviewSource {
    PreviewSource {
        element: "meta",
        key,
        value,
        target: "content",
    }
}

// Checked in order; the first non-empty hit wins.
const PREVIEW_SOURCES: [PreviewSource; 7] = [
    meta("name", "twitter:image"),
    meta("name", "twitter:image:src"),
    meta("property", "og:image"),
    meta("property", "og:image:secure_url"),
    meta("property", "og:image:url"),
    PreviewSource {
        element: "link",
        key: "rel",
        value: "image_src",
        target: "href",
    },
    meta("name", "thumbnail"),
];

/// Returns the preview image advertised by `html`, if any.
pub fn find_preview_image(html: &str) -> Option<String> {
    let document = Document::from(html);
    PREVIEW_SOURCES.iter().find_map(|source| {
        document
            .find(Name(source.element).and(Attr(source.key, source.value)))
            .filter_map(|e| e.attr(source.target))
            .find(|content| !content.is_empty())
            .map(|content| content.to_string())
    })
}

async fn fetch_preview_image(url: &str) -> Result<String> {
    let scrape_failed = |reason: String| PostError::ScrapeFailed {
        url: url.to_string(),
        reason,
    };
    let html = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| scrape_failed(e.to_string()))?
        .text()
        .await
        .map_err(|e| scrape_failed(e.to_string()))?;
    find_preview_image(&html).ok_or_else(|| scrape_failed("no preview image tag".to_string()))
}

/// Never fails: any scraping problem degrades to [`FALLBACK_IMAGE_URL`].
pub async fn resolve_preview_image(url: &str) -> String {
    match fetch_preview_image(url).await {
        Ok(image_url) => {
            info!("preview image for {url}: {image_url}");
            image_url
        }
        Err(e) => {
            warn!("{e}; falling back to {FALLBACK_IMAGE_URL}");
            FALLBACK_IMAGE_URL.to_string()
        }
    }
}
