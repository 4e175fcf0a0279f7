//! Thin typed wrappers around the FamFin REST API.
//!
//! Every call goes through [`FamfinClient::send`], which attaches
//! credentials, applies the global 401 policy and maps non-2xx statuses to
//! [`ClientError::Status`].

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    config::client::ClientConfig,
    models::{
        ApiEnvelope, DashboardSummary, ErrorResponse, InviteMemberRequest, Member, MonthlyReport,
        ReportPeriod, User,
    },
};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    error::{ClientError, ClientResult},
    interceptor::UnauthorizedInterceptor,
    storage::{SharedStorage, TOKEN_KEY},
};

/// Source of the signed-in user's profile.
///
/// Implemented by [`FamfinClient`]; tests substitute scripted sources.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProfileSource {
    /// `GET /users/profile`, returning the raw envelope.
    async fn fetch_profile(&self) -> ClientResult<ApiEnvelope<User>>;
}

/// HTTP client for the FamFin API.
#[derive(Clone)]
pub struct FamfinClient {
    base_url: Url,
    http: Client,
    tokens: SharedStorage,
    interceptor: Option<Arc<UnauthorizedInterceptor>>,
}

impl fmt::Debug for FamfinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamfinClient")
            .field("base_url", &self.base_url.as_str())
            .field("interceptor", &self.interceptor.is_some())
            .finish_non_exhaustive()
    }
}

impl FamfinClient {
    /// Create a client for `config.api_base_url` with a default HTTP stack.
    ///
    /// # Errors
    /// Fails when the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, tokens: SharedStorage) -> ClientResult<Self> {
        Self::with_http_client(config, default_http_client()?, tokens)
    }

    /// Create a client on top of a caller-built [`reqwest::Client`], e.g.
    /// one with a persistent cookie jar.
    ///
    /// # Errors
    /// Fails when the base URL is invalid.
    pub fn with_http_client(
        config: &ClientConfig,
        http: Client,
        tokens: SharedStorage,
    ) -> ClientResult<Self> {
        Ok(Self {
            base_url: config.base_url()?,
            http,
            tokens,
            interceptor: None,
        })
    }

    /// Install the global 401 policy.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: UnauthorizedInterceptor) -> Self {
        self.interceptor = Some(Arc::new(interceptor));
        self
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Where the browser goes to start an external login with `provider`
    /// (e.g. `google`); the API redirects back to `/auth/callback`.
    ///
    /// # Errors
    /// Fails when the URL cannot be built.
    pub fn social_login_url(&self, provider: &str) -> ClientResult<Url> {
        self.endpoint(&["auth", provider])
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        match self.tokens.get_item(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => request.bearer_auth(token),
            Ok(_) => request,
            Err(err) => {
                warn!(error = %err, "failed to read auth token");
                request
            }
        }
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = self.prepare(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Some(interceptor) = &self.interceptor {
                interceptor.handle();
            }
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ErrorResponse::message_from_body(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            debug!(status = status.as_u16(), %message, "request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Retrieve the signed-in user's profile envelope.
    ///
    /// # Errors
    /// Transport, status and decode failures.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> ClientResult<ApiEnvelope<User>> {
        let url = self.endpoint(&["users", "profile"])?;
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }

    /// List the members of the family budget.
    ///
    /// # Errors
    /// Transport, status and decode failures; [`ClientError::MissingData`]
    /// when the envelope has no `data`.
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ClientResult<Vec<Member>> {
        let url = self.endpoint(&["members"])?;
        let response = self.send(self.http.get(url)).await?;
        let envelope: ApiEnvelope<Vec<Member>> = Self::decode(response).await?;
        envelope.data.ok_or(ClientError::MissingData)
    }

    /// Invite someone to the family budget.
    ///
    /// # Errors
    /// [`ClientError::InvalidRequest`] when the request fails local
    /// validation; otherwise transport and status failures.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn invite_member(&self, request: &InviteMemberRequest) -> ClientResult<()> {
        request.validate().map_err(ClientError::InvalidRequest)?;
        let url = self.endpoint(&["members", "invite"])?;
        self.send(self.http.post(url).json(request)).await?;
        Ok(())
    }

    /// Remove a member by membership id.
    ///
    /// # Errors
    /// Transport and status failures.
    #[instrument(skip(self))]
    pub async fn remove_member(&self, member_id: &str) -> ClientResult<()> {
        if member_id.trim().is_empty() {
            return Err(ClientError::InvalidRequest("member id must not be empty"));
        }
        let url = self.endpoint(&["members", member_id])?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Income, spending and savings for one month.
    ///
    /// # Errors
    /// Transport, status and decode failures.
    #[instrument(skip(self))]
    pub async fn monthly_report(&self, period: ReportPeriod) -> ClientResult<MonthlyReport> {
        let url = self.endpoint(&["reports", "monthly"])?;
        let response = self
            .send(self.http.get(url).query(&period.query()))
            .await?;
        Self::decode(response).await
    }

    /// Headline figures for the dashboard.
    ///
    /// # Errors
    /// Transport, status and decode failures.
    #[instrument(skip(self))]
    pub async fn dashboard_summary(&self) -> ClientResult<DashboardSummary> {
        let url = self.endpoint(&["reports", "summary"])?;
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProfileSource for FamfinClient {
    async fn fetch_profile(&self) -> ClientResult<ApiEnvelope<User>> {
        self.get_profile().await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_http_client() -> ClientResult<Client> {
    Ok(Client::builder().cookie_store(true).build()?)
}

#[cfg(target_arch = "wasm32")]
fn default_http_client() -> ClientResult<Client> {
    Ok(Client::new())
}
