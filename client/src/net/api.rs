//! REST client for the remote auth and task API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! SESSION TOKEN
//! =============
//! [`ApiClient`] holds no credentials. Task calls take the current token as an
//! argument so a login after page load is picked up by the very next call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, SignupRequest, Task, TaskDraft};

/// Remote API used when `TASKDESK_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://backend-2-cidd.onrender.com/api";

/// Header carrying the bearer credential on task calls.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Base URL baked in at compile time, without a trailing slash.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("TASKDESK_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/signup")
}

fn tasks_endpoint(base: &str) -> String {
    format!("{base}/tasks")
}

fn create_task_endpoint(base: &str) -> String {
    format!("{base}/tasks/createTask")
}

fn task_endpoint(base: &str, id: &str) -> String {
    format!("{base}/tasks/{id}")
}

/// `Authorization` value for `token`, or `None` when there is no session.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Extract `message` from a rejection body, if it is JSON and has one.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<super::types::MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Credential endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// `POST /auth/login`. A 2xx response is returned as-is; the caller
    /// decides what a missing token means.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
}

/// Task endpoints. `token` is the session token at the time of the call.
#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    async fn list_tasks(&self, token: Option<&str>) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, token: Option<&str>, draft: &TaskDraft) -> Result<Task, ApiError>;
    async fn update_task(&self, token: Option<&str>, id: &str, draft: &TaskDraft) -> Result<Task, ApiError>;
    async fn delete_task(&self, token: Option<&str>, id: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of [`AuthBackend`] and [`TaskBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self { base_url: api_base_url() }
    }
}

impl AuthBackend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&login_endpoint(&self.base_url)).json(request);
            let resp = browser::send(req).await?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (login_endpoint(&self.base_url), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&signup_endpoint(&self.base_url)).json(request);
            browser::send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (signup_endpoint(&self.base_url), request);
            Err(ApiError::Unavailable)
        }
    }
}

impl TaskBackend for ApiClient {
    async fn list_tasks(&self, token: Option<&str>) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&tasks_endpoint(&self.base_url));
            let resp = browser::send(browser::authorize(builder, token).build()).await?;
            browser::decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tasks_endpoint(&self.base_url), token);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_task(&self, token: Option<&str>, draft: &TaskDraft) -> Result<Task, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&create_task_endpoint(&self.base_url));
            let resp = browser::send(browser::authorize(builder, token).json(draft)).await?;
            browser::decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (create_task_endpoint(&self.base_url), token, draft);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_task(&self, token: Option<&str>, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::put(&task_endpoint(&self.base_url, id));
            let resp = browser::send(browser::authorize(builder, token).json(draft)).await?;
            browser::decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_endpoint(&self.base_url, id), token, draft);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_task(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::delete(&task_endpoint(&self.base_url, id));
            browser::send(browser::authorize(builder, token).build()).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_endpoint(&self.base_url, id), token);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{AUTHORIZATION_HEADER, bearer_header, rejection_message};
    use crate::net::error::ApiError;
    use crate::net::types::DataEnvelope;

    pub(super) fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match bearer_header(token) {
            Some(value) => builder.header(AUTHORIZATION_HEADER, &value),
            None => builder,
        }
    }

    /// Send a built request; non-2xx statuses become [`ApiError::Rejected`].
    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Rejected { status, message: rejection_message(&body) })
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn decode_data<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        decode::<DataEnvelope<T>>(resp).await.map(|env| env.data)
    }
}
