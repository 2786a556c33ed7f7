use crate::error::{PostError, Result};
use crate::types::{CreateSessionRequest, CreateSessionResponse, Session};
use crate::xrpc_url;
use log::{error, info};

const CREATE_SESSION: &str = "com.atproto.server.createSession";

/// Exchanges account credentials for a bearer token.
///
/// A missing `accessJwt` or `did` in the response yields an empty field;
/// callers check [`Session::is_authenticated`] before going on.
pub async fn create_session(service: &str, username: &str, password: &str) -> Result<Session> {
    let request = CreateSessionRequest {
        identifier: username,
        password,
    };
    let response = reqwest::Client::new()
        .post(xrpc_url(service, CREATE_SESSION))
        .json(&request)
        .send()
        .await
        .map_err(PostError::auth)?;

    let status = response.status();
    if !status.is_success() {
        error!("Error: {status}");
        return Err(PostError::auth(status));
    }

    let body = response.text().await.map_err(PostError::auth)?;
    let body: CreateSessionResponse = serde_json::from_str(&body).map_err(PostError::auth)?;
    let session = Session::from(body);
    info!("created session for {}", session.account_id);
    Ok(session)
}
