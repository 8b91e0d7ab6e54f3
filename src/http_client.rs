use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::config::ApiConfig;

const AUTH_HEADER: &str = "x-auth-token";

pub fn build_http_client(cfg: &ApiConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("matchup_odds/", env!("CARGO_PKG_VERSION"))),
    );
    if let Some(key) = cfg.api_key.as_deref() {
        let mut value = HeaderValue::from_str(key).context("api key is not a valid header value")?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(AUTH_HEADER), value);
    }

    Client::builder()
        .timeout(cfg.timeout)
        .default_headers(headers)
        .build()
        .context("failed to build http client")
}
