pub mod blob;
pub mod config;
pub mod error;
pub mod post;
pub mod preview;
pub mod session;
pub mod types;

use log::info;

pub use config::Config;
pub use error::{PostError, Result};
pub use types::{LinkPost, Session};

pub(crate) fn xrpc_url(service: &str, method: &str) -> String {
    format!("{service}/xrpc/{method}")
}

/// Shares `post` as a link card: log in, re-host the page's preview image,
/// then create the post record. Stops at the first step that fails.
pub async fn post_link(config: &Config, post: &LinkPost) -> Result<()> {
    let service = config.service.as_str();

    let session = session::create_session(service, &config.username, &config.password).await?;
    if !session.is_authenticated() {
        return Err(PostError::auth("no access token in response"));
    }

    let image_url = preview::resolve_preview_image(&post.link).await;
    let blob = blob::upload_image(service, &session.bearer_token, &image_url).await?;
    if blob.is_empty() {
        return Err(PostError::upload("no blob reference in response"));
    }
    info!("uploaded preview image {image_url}");

    let request = post::build_record(&session, post, blob);
    post::create_record(service, &session, &request).await
}
