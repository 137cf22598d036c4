// src/core/net.rs

// HTTPS GET returning JSON arrays (reqwest, blocking)

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::consts::{API_BASE, AUTH_HEADER, HTTP_TIMEOUT_SECS};

pub struct TbaClient {
    http: Client,
    base: String,
}

impl TbaClient {
    pub fn new(auth_key: &str) -> Result<Self, Box<dyn Error>> {
        Self::with_base(API_BASE, auth_key)
    }

    /// Separate constructor so tests and mirrors can point elsewhere.
    pub fn with_base(base: &str, auth_key: &str) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_str(auth_key)?);

        let http = Client::builder()
            .user_agent(concat!("tba_scrape/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// GET {base}/{path}, decoding the body as a JSON array. The API
    /// serves `null` for some empty results; that decodes to an empty
    /// vec. Non-200 is an error; callers decide whether it is fatal.
    pub fn get_array<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Box<dyn Error>> {
        let url = format!("{}/{}", self.base, path);
        let resp = self.http.get(&url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status.as_u16(), url).into());
        }

        let body: Option<Vec<T>> = resp.json()?;
        Ok(body.unwrap_or_default())
    }
}
