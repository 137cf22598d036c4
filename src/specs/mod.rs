// src/specs/mod.rs
//! # Endpoint specs
//!
//! One module per remote endpoint. Each spec knows *where the data
//! lives in the API* and *how to pull it into plain values*:
//!
//! - **Pure endpoint access**: request shape, response model, and the
//!   walk/stop rules for that endpoint (page until empty, year range).
//! - **Tolerant decoding** via serde models with defaults for fields
//!   the API omits.
//! - **Light shaping** into the row structs the rest of the pipeline
//!   consumes.
//!
//! What does **not** live here: persistence and the resume ledger
//! (`store`), scheduling and the worker pool (`runner`), report math
//! (`report`).
//!
//! Each spec exposes its transport as a one-method trait implemented
//! by `core::net::TbaClient`, so the specs are testable offline against
//! canned responses.
pub mod awards;
pub mod teams;
