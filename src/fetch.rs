use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::fide_id;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Fetches a player's profile page. A 404 means the player does not exist and
/// is returned as `None` so batch callers can skip that id; every other
/// failure propagates.
pub fn fetch_profile(id: &str) -> Result<Option<String>> {
    let client = http_client()?;
    let url = fide_id::profile_url(id);
    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("request to {url} failed"))?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let response = response
        .error_for_status()
        .with_context(|| format!("fide profile request {url}"))?;
    let body = response.text().context("read fide profile body")?;
    Ok(Some(body))
}
