use crate::error::{PostError, Result};
use crate::types::{
    BlobRef, CreateRecordRequest, Embed, External, Facet, LinkPost, PostRecord, Session,
    EXTERNAL_EMBED_TYPE, POST_COLLECTION,
};
use crate::xrpc_url;
use chrono::Utc;
use log::{error, info};
use reqwest::header::AUTHORIZATION;

const CREATE_RECORD: &str = "com.atproto.repo.createRecord";

/// Line break between the content and the hashtags; two bytes wide.
pub const TAG_SEPARATOR: &str = "\r\n";

/// Computes hashtag facets for `tags` once appended after `content_len`
/// bytes of content and the separator.
///
/// Offsets count bytes of each token as-is; hashtags outside ASCII are not
/// treated specially.
pub fn create_facets(tags: &str, content_len: usize) -> Vec<Facet> {
    let offset = content_len + TAG_SEPARATOR.len();
    let mut cursor = 0;
    let mut facets = Vec::new();
    for token in tags.split(' ') {
        let start = cursor;
        let end = start + token.len();
        if let Some(tag) = token.strip_prefix('#') {
            facets.push(Facet::tag(start + offset, end + offset, tag));
        }
        cursor = end + 1;
    }
    facets
}

pub fn post_text(post: &LinkPost) -> String {
    format!("{}{TAG_SEPARATOR}{}", post.content, post.tags)
}

/// Builds the record for `post`, stamped with the current UTC time.
pub fn build_record(session: &Session, post: &LinkPost, blob: BlobRef) -> CreateRecordRequest {
    let record = PostRecord {
        kind: POST_COLLECTION,
        text: post_text(post),
        facets: create_facets(&post.tags, post.content.len()),
        created_at: Utc::now(),
        embed: Embed {
            kind: EXTERNAL_EMBED_TYPE,
            external: External {
                uri: post.link.clone(),
                title: post.content.clone(),
                description: post.link.clone(),
                thumb: blob,
            },
        },
    };
    CreateRecordRequest {
        repo: session.account_id.clone(),
        collection: POST_COLLECTION,
        record,
    }
}

/// Submits the record. A rejected record is reported, not fatal.
pub async fn create_record(
    service: &str,
    session: &Session,
    request: &CreateRecordRequest,
) -> Result<()> {
    let response = reqwest::Client::new()
        .post(xrpc_url(service, CREATE_RECORD))
        .header(AUTHORIZATION, format!("Bearer {}", session.bearer_token))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            error!("Error: {e}");
            PostError::PostFailed {
                status: None,
                reason: e.to_string(),
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Error: {status} - {body}");
        return Err(PostError::PostFailed {
            status: Some(status),
            reason: format!("{status} - {body}"),
        });
    }

    info!("created record in {}", request.repo);
    Ok(())
}
