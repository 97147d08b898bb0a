//! Clustering server API client.
//!
//! One method per backend endpoint. Each method issues exactly one request
//! and maps the outcome onto [`ClusterError`]; deciding what to show the
//! user is left to the caller.

use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::http::{HttpClient, HttpConfig};
use crate::domain::exchange::{
    AddAddressRequest, DeleteAddressRequest, EditAddressRequest, parse_exchange_list,
};
use crate::domain::{
    ClusterError, ClusterResponse, ExchangeEntry, LoginRequest, OperationResult, RefreshRequest,
    RefreshResponse, UploadOption,
};

// ============================================================================
// Endpoints
// ============================================================================

pub const REFRESH_DB: &str = "/refreshDB";
pub const EXCH_LIST: &str = "/exchList";
pub const ADD_ADDR: &str = "/addAdr";
pub const EDIT_ADDR: &str = "/editAdr";
pub const DELETE_ADDR: &str = "/deleteAdr";
pub const LOG_IN: &str = "/logIn";
pub const LOG_OUT: &str = "/logOut";
pub const UPLOAD_JSON: &str = "/uploadJSON";
pub const SEARCH: &str = "/search";

// ============================================================================
// Cluster Client
// ============================================================================

/// Clustering server client
#[derive(Debug, Clone)]
pub struct ClusterClient {
    http: HttpClient,
    base_url: String,
}

impl ClusterClient {
    /// Create a new client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::ClientInit`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, ClusterError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url,
        })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Runs the clustering process for a block range.
    ///
    /// # Errors
    ///
    /// [`ClusterError::Unauthorized`] on 401, [`ClusterError::Http`] on any
    /// other non-success status.
    pub async fn refresh_db(&self, request: &RefreshRequest) -> Result<RefreshResponse, ClusterError> {
        let mut form = Form::new()
            .text("minHeight", request.min_height.to_string())
            .text("maxHeight", request.max_height.to_string())
            .text("scope", request.scope.to_string());
        if let Some(pwd) = &request.password_hash {
            form = form.text("pwd", pwd.clone());
        }

        debug!(
            min = request.min_height,
            max = request.max_height,
            scope = request.scope,
            "refreshing clustering database"
        );
        let builder = self.http.post(&self.url(REFRESH_DB)).multipart(form);
        self.send_json(builder).await
    }

    /// Fetches the exchange address list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or a body
    /// that is not a JSON object.
    pub async fn exch_list(&self) -> Result<Vec<ExchangeEntry>, ClusterError> {
        let body = self
            .send_json::<serde_json::Value>(self.http.get(&self.url(EXCH_LIST)))
            .await?;
        parse_exchange_list(body)
    }

    /// Adds an exchange address.
    ///
    /// # Errors
    ///
    /// See [`ClusterClient::send_operation`].
    pub async fn add_address(&self, address: &str, name: &str) -> Result<OperationResult, ClusterError> {
        let body = AddAddressRequest {
            new_addr: address,
            new_value: name,
        };
        self.send_operation(self.http.post(&self.url(ADD_ADDR)).json(&body))
            .await
    }

    /// Replaces the exchange entry stored under `target`.
    ///
    /// # Errors
    ///
    /// See [`ClusterClient::send_operation`].
    pub async fn edit_address(
        &self,
        target: &str,
        address: &str,
        name: &str,
    ) -> Result<OperationResult, ClusterError> {
        let body = EditAddressRequest {
            target_addr: target,
            new_addr: address,
            new_value: name,
        };
        self.send_operation(self.http.post(&self.url(EDIT_ADDR)).json(&body))
            .await
    }

    /// Deletes an exchange address.
    ///
    /// # Errors
    ///
    /// See [`ClusterClient::send_operation`].
    pub async fn delete_address(&self, target: &str) -> Result<OperationResult, ClusterError> {
        let body = DeleteAddressRequest { target_addr: target };
        self.send_operation(self.http.post(&self.url(DELETE_ADDR)).json(&body))
            .await
    }

    /// Logs in. The password is hashed before it leaves the process.
    ///
    /// # Errors
    ///
    /// See [`ClusterClient::send_operation`].
    pub async fn log_in(&self, password: &str) -> Result<OperationResult, ClusterError> {
        let body = LoginRequest::from_password(password);
        self.send_operation(self.http.post(&self.url(LOG_IN)).json(&body))
            .await
    }

    /// Ends the server session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn log_out(&self) -> Result<(), ClusterError> {
        let response = self.http.post(&self.url(LOG_OUT)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClusterError::from_status(status.as_u16()))
        }
    }

    /// Uploads an exchange list JSON file.
    ///
    /// # Errors
    ///
    /// See [`ClusterClient::send_operation`].
    pub async fn upload_json(
        &self,
        file_name: String,
        content: Vec<u8>,
        option: UploadOption,
    ) -> Result<OperationResult, ClusterError> {
        let part = Part::bytes(content)
            .file_name(file_name)
            .mime_str("application/json")?;
        let form = Form::new()
            .part("file", part)
            .text("option", option.as_str());
        self.send_operation(self.http.post(&self.url(UPLOAD_JSON)).multipart(form))
            .await
    }

    /// Fetches the cluster containing `address`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or an
    /// unparseable graph.
    pub async fn search_cluster(&self, address: &str) -> Result<ClusterResponse, ClusterError> {
        let builder = self
            .http
            .get(&self.url(SEARCH))
            .query(&[("targetAddr", address)]);
        self.send_json(builder).await
    }

    // ========================================================================
    // Response Handling
    // ========================================================================

    /// Sends a request whose successful response is a JSON document.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClusterError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "response received");
        if !status.is_success() {
            return Err(ClusterError::from_status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a management request answered with `{ "result": ... }`.
    ///
    /// A `result` body is honored even on an error status so the server's
    /// own message reaches the user, 401 included. Without one, 401 maps to
    /// [`ClusterError::Unauthorized`].
    async fn send_operation(&self, builder: RequestBuilder) -> Result<OperationResult, ClusterError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "operation response received");
        let body = response.text().await?;
        match serde_json::from_str::<OperationResult>(&body) {
            Ok(result) => Ok(result),
            Err(_) if !status.is_success() => Err(ClusterError::from_status(status.as_u16())),
            Err(e) => Err(e.into()),
        }
    }
}
