// src/config/mod.rs

pub mod consts;
pub mod options;

use std::{env, error::Error};

use consts::AUTH_ENV;

/// API credential from the environment. Every request carries it, so a
/// missing key fails the run before any network traffic happens.
pub fn auth_key() -> Result<String, Box<dyn Error>> {
    match env::var(AUTH_ENV) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!(
            "{} is not set; create a read key on your TBA account page and export it",
            AUTH_ENV
        )
        .into()),
    }
}
