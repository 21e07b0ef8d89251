//! # BankID mock
//!
//! `bankid-mock` is a stand-in for the BankID relying-party API. It exposes the
//! route table a client of the real service talks to (`auth`, `sign`, `cancel`,
//! `qrcode`, `init`, `collect` and `status`) and answers every call with a
//! canned JSON acknowledgment.
//!
//! ## Behaviour
//!
//! - **Stateless:** nothing is stored. Order references and session ids are
//!   fixed placeholders and are never looked up.
//! - **Static status:** `status` always reports `pending`, `collect` always
//!   reports `complete`.
//! - **Two error kinds:** a wrong HTTP method answers `405`, a body that is not
//!   valid JSON answers `400` with the decoder message. Everything else succeeds.
//!
//! Optionally a directory of static assets is served for every path the route
//! table does not match, so a front-end can be hosted next to the mock.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
