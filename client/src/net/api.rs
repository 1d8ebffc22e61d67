//! Browser implementation of the account service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): calls fail with a transport fault, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `ServiceFault`; the auth form turns it into a
//! notification instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pyqhub::account::{
    AccountService, AuthResponse, LOGIN_PATH, LoginPayload, SIGNUP_PATH, ServiceFault, SignupPayload, endpoint,
};
use pyqhub::config::{DEFAULT_API_BASE_URL, parse_base_url};

/// Base URL baked in at build time from `PYQHUB_API_BASE_URL`.
pub fn configured_base_url() -> String {
    base_url_or_default(option_env!("PYQHUB_API_BASE_URL"))
}

fn base_url_or_default(raw: Option<&str>) -> String {
    match parse_base_url(raw) {
        Ok(url) => url,
        Err(err) => {
            #[cfg(feature = "csr")]
            log::warn!("{err}; falling back to {DEFAULT_API_BASE_URL}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
            DEFAULT_API_BASE_URL.to_owned()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchAccountService {
    base_url: String,
}

impl Default for FetchAccountService {
    fn default() -> Self {
        Self::new(configured_base_url())
    }
}

impl FetchAccountService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn signup_url(&self) -> String {
        endpoint(&self.base_url, SIGNUP_PATH)
    }

    pub fn login_url(&self) -> String {
        endpoint(&self.base_url, LOGIN_PATH)
    }
}

#[cfg(feature = "csr")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<AuthResponse, ServiceFault> {
    let resp = request
        .map_err(|e| ServiceFault::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ServiceFault::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ServiceFault::Transport(e.to_string()))?;
    pyqhub::account::classify_response(status, &body)
}

#[cfg(not(feature = "csr"))]
pub(crate) fn unavailable() -> Result<AuthResponse, ServiceFault> {
    Err(ServiceFault::Transport("not available outside the browser".to_owned()))
}

#[async_trait::async_trait(?Send)]
impl AccountService for FetchAccountService {
    async fn signup(&self, payload: &SignupPayload) -> Result<AuthResponse, ServiceFault> {
        #[cfg(feature = "csr")]
        {
            send(gloo_net::http::Request::post(&self.signup_url()).json(payload)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            unavailable()
        }
    }

    async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse, ServiceFault> {
        #[cfg(feature = "csr")]
        {
            send(gloo_net::http::Request::post(&self.login_url()).json(payload)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            unavailable()
        }
    }
}
