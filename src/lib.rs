//! # shipdesk
//!
//! Route protection for the shipdesk console. The crate holds the decisions the
//! web layer makes on every render and on every auth state change:
//!
//! - [`access`] looks up a page's required groups and decides what a protected
//!   route renders for the current [`session::SessionState`].
//! - [`session`] turns auth provider notifications into an accessor, published
//!   to shared state, and restores the destination captured before login.
//! - [`paths`] is the route table both the web app and the CLI validate the
//!   page registry against.
//!
//! Everything here is framework-free and pure apart from logging, so the same
//! code runs in the browser (via `shipdesk-web`) and in the `shipdesk` CLI.

pub mod access;
pub mod paths;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
