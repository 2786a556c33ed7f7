use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const POST_COLLECTION: &str = "app.bsky.feed.post";
pub const EXTERNAL_EMBED_TYPE: &str = "app.bsky.embed.external";

#[derive(Debug, Clone)]
pub struct LinkPost {
    pub content: String,
    pub link: String,
    pub tags: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub access_jwt: Option<String>,
    pub did: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub bearer_token: String,
    pub account_id: String,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.bearer_token.is_empty()
    }
}

impl From<CreateSessionResponse> for Session {
    fn from(response: CreateSessionResponse) -> Self {
        Self {
            bearer_token: response.access_jwt.unwrap_or_default(),
            account_id: response.did.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadBlobResponse {
    #[serde(default)]
    pub blob: Value,
}

/// Opaque handle to an uploaded blob, embedded verbatim into the post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BlobRef(pub Value);

impl BlobRef {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    pub byte_start: usize,
    pub byte_end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "$type")]
pub enum FacetFeature {
    #[serde(rename = "app.bsky.richtext.facet#tag")]
    Tag { tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub index: ByteSlice,
    pub features: Vec<FacetFeature>,
}

impl Facet {
    pub fn tag(byte_start: usize, byte_end: usize, tag: &str) -> Self {
        Self {
            index: ByteSlice {
                byte_start,
                byte_end,
            },
            features: vec![FacetFeature::Tag {
                tag: tag.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct External {
    pub uri: String,
    pub title: String,
    pub description: String,
    pub thumb: BlobRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    #[serde(rename = "$type")]
    pub kind: &'static str,
    pub external: External,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub kind: &'static str,
    pub text: String,
    pub facets: Vec<Facet>,
    pub created_at: DateTime<Utc>,
    pub embed: Embed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRecordRequest {
    pub repo: String,
    pub collection: &'static str,
    pub record: PostRecord,
}
