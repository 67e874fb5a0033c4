//! # Leafdoc (leaf disease diagnosis client)
//!
//! `leafdoc` lets a user create a local account, log in, and upload a leaf
//! image to a prediction endpoint, rendering the returned diagnosis.
//!
//! ## Accounts and sessions
//!
//! Accounts live in a single record store (a JSON object keyed by email) kept
//! under one storage key; the logged-in user is a copy of that record kept
//! under a second key. Both go through the [`storage::Storage`] trait so the
//! CLI can persist them to a file while tests use memory.
//!
//! - **Plaintext credentials:** passwords are stored and compared as given.
//!   This is a local convenience gate, not an authentication system.
//! - **Client-trusted session:** the session marker has no expiry and no
//!   token; whoever can read the store is logged in.
//!
//! ## Prediction
//!
//! The prediction handler posts the selected image as `multipart/form-data`
//! (part name `file`) and renders `{plant, disease, confidence, cause, remedy}`.
//! Every failure collapses into one user-facing message; details go to the log.
//!
//! The [`api`] module is a development prediction server speaking the same
//! protocol, backed by a fixed-label classifier instead of a model.

pub mod api;
pub mod cli;
pub mod client;
pub mod diagnosis;
pub mod error;
pub mod handlers;
pub mod session;
pub mod storage;
pub mod view;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
