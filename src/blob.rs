use crate::error::{PostError, Result};
use crate::types::{BlobRef, UploadBlobResponse};
use crate::xrpc_url;
use log::{error, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

const UPLOAD_BLOB: &str = "com.atproto.repo.uploadBlob";

/// Infers the MIME type from the extension of the URL path alone.
pub fn image_mime_type(image_url: &str) -> &'static str {
    let path = image_url
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpeg" | "jpg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

async fn download_image(image_url: &str) -> Result<Vec<u8>> {
    let bytes = reqwest::get(image_url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| PostError::upload(format!("download of {image_url} failed: {e}")))?
        .bytes()
        .await
        .map_err(|e| PostError::upload(format!("download of {image_url} failed: {e}")))?;
    Ok(bytes.to_vec())
}

/// Re-hosts the image at `image_url` as a blob on the service.
pub async fn upload_image(service: &str, token: &str, image_url: &str) -> Result<BlobRef> {
    let mime_type = image_mime_type(image_url);
    let image = download_image(image_url).await?;
    info!("uploading {} bytes of {mime_type} from {image_url}", image.len());

    let response = reqwest::Client::new()
        .post(xrpc_url(service, UPLOAD_BLOB))
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, mime_type)
        .body(image)
        .send()
        .await
        .map_err(PostError::upload)?;

    let status = response.status();
    if !status.is_success() {
        error!("Error uploading image: {status}");
        return Err(PostError::upload(status));
    }

    let body = response.text().await.map_err(PostError::upload)?;
    let body: UploadBlobResponse = serde_json::from_str(&body).map_err(PostError::upload)?;
    Ok(BlobRef(body.blob))
}
