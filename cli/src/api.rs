//! Async HTTP client for the leads service.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leads::error::check_status;
use leads::lead::lead_path;
use leads::{ApiError, Lead, LeadStatus, LoginRequest, LoginResponse, NewLead, StatusUpdate};

pub struct LeadsClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeadsClient {
    pub fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /auth/login`, returning the session token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        let response = self.http.post(self.url("/auth/login")).json(credentials).send().await.map_err(transport)?;
        check_status(response.status().as_u16())?;
        let body: LoginResponse = response.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
        if body.token.is_empty() {
            return Err(ApiError::Malformed("empty token".to_owned()));
        }
        Ok(body.token)
    }

    /// `GET /leads` with the bearer token.
    pub async fn fetch_leads(&self, token: &str) -> Result<Vec<Lead>, ApiError> {
        let response = self.http.get(self.url("/leads")).bearer_auth(token).send().await.map_err(transport)?;
        check_status(response.status().as_u16())?;
        let body = response.text().await.map_err(transport)?;
        leads::decode_lead_collection(&body)
    }

    /// `PATCH /leads/{id}` with `{"estado": status}`.
    pub async fn update_status(&self, token: &str, id: &str, status: LeadStatus) -> Result<(), ApiError> {
        let response = self
            .http
            .patch(self.url(&lead_path(id)))
            .bearer_auth(token)
            .json(&StatusUpdate { status })
            .send()
            .await
            .map_err(transport)?;
        check_status(response.status().as_u16())
    }

    /// `POST /leads`. Public; no token.
    pub async fn create_lead(&self, lead: &NewLead) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/leads")).json(lead).send().await.map_err(transport)?;
        check_status(response.status().as_u16())
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
