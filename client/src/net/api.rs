//! REST API helpers for communicating with the leads service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent to the host's
//! same-origin `/api` proxy.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 403 becomes
//! `ApiError::AuthDenied` so pages can route it to the re-login prompt instead
//! of the generic failure notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leads::{ApiError, Lead, LeadStatus, LoginRequest, NewLead};

/// Prefix under which the host proxies the leads service.
pub const API_PREFIX: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn with_auth(request: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", &bearer(token)),
        None => request,
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Fetch the full lead collection via `GET /leads`.
///
/// # Errors
///
/// `AuthDenied` on 403, `Rejected` on other error statuses, `Transport` when
/// the request fails, and `Malformed` when the body is not an array of leads.
pub async fn fetch_leads(token: Option<&str>) -> Result<Vec<Lead>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&api_url("/leads")), token)
            .send()
            .await
            .map_err(transport)?;
        leads::error::check_status(resp.status())?;
        let body = resp.text().await.map_err(transport)?;
        leads::decode_lead_collection(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Change one lead's status via `PATCH /leads/{id}`.
///
/// # Errors
///
/// `AuthDenied` on 403, `Rejected` on other error statuses, `Transport` when
/// the request fails.
pub async fn update_lead_status(token: Option<&str>, id: &str, status: LeadStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = leads::StatusUpdate { status };
        let resp = with_auth(gloo_net::http::Request::patch(&api_url(&leads::lead::lead_path(id))), token)
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        leads::error::check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, status);
        Err(unavailable())
    }
}

/// Submit the contact form via `POST /leads`.
///
/// # Errors
///
/// `Rejected` on error statuses, `Transport` when the request fails.
pub async fn create_lead(lead: &NewLead) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/leads"))
            .json(lead)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        leads::error::check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead;
        Err(unavailable())
    }
}

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// `Rejected`/`AuthDenied` when the credentials are refused, `Transport` when
/// the request fails, `Malformed` when the response carries no token.
pub async fn login(credentials: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/auth/login"))
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        leads::error::check_status(resp.status())?;
        let body: leads::LoginResponse = resp.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}
