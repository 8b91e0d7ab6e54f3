use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
    fetched_at: Instant,
}

/// Short-lived in-memory cache of response bodies keyed by URL.
///
/// Fresh entries are served without touching the network; stale ones are
/// revalidated with a conditional request.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fetch_text(&self, client: &Client, url: &str) -> Result<String> {
        if !self.enabled() {
            return fetch_uncached(client, url);
        }

        let cached_entry = self.lock().get(url).cloned();
        if let Some(entry) = cached_entry.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                debug!(url, "serving cached response");
                return Ok(entry.body.clone());
            }
        }

        let mut req = client.get(url);
        if let Some(entry) = cached_entry.as_ref() {
            if let Some(etag) = entry.etag.as_ref() {
                req = req.header(IF_NONE_MATCH, etag);
            }
            if let Some(last_modified) = entry.last_modified.as_ref() {
                req = req.header(IF_MODIFIED_SINCE, last_modified);
            }
        }

        let resp = req.send().context("request failed")?;
        let status = resp.status();
        if status == StatusCode::NOT_MODIFIED {
            if let Some(mut entry) = cached_entry {
                debug!(url, "cached response revalidated");
                let body = entry.body.clone();
                entry.fetched_at = Instant::now();
                self.store(url, entry);
                return Ok(body);
            }
            return Err(anyhow::anyhow!("received 304 without cache body"));
        }

        let etag = header_string(&resp, ETAG);
        let last_modified = header_string(&resp, LAST_MODIFIED);
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            return Err(anyhow::anyhow!("http {}: {}", status, body));
        }

        self.store(
            url,
            CacheEntry {
                body: body.clone(),
                etag,
                last_modified,
                fetched_at: Instant::now(),
            },
        );
        Ok(body)
    }

    fn store(&self, url: &str, entry: CacheEntry) {
        let mut entries = self.lock();
        entries.retain(|_, e| e.fetched_at.elapsed() < self.ttl.saturating_mul(4));
        entries.insert(url.to_string(), entry);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn fetch_uncached(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}

fn header_string(
    resp: &reqwest::blocking::Response,
    name: reqwest::header::HeaderName,
) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
