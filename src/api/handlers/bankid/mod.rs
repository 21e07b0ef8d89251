//! Stub handlers for the BankID relying-party routes.
//!
//! Every handler answers with a canned [`BankIdResponse`]. Write routes decode
//! their body as a [`BankIdRequest`] so malformed JSON is still rejected, but
//! only `auth` reads anything from it.

pub mod auth;
pub mod cancel;
pub mod collect;
pub mod init;
pub mod qrcode;
pub mod sign;
pub mod status;

mod types;
pub use self::types::{BankIdRequest, BankIdResponse, OrderStatus};

pub const MOCK_ORDER_REF: &str = "mock-order-ref";
pub const MOCK_SIGN_ORDER_REF: &str = "mock-sign-order-ref";
pub const MOCK_SESSION_ID: &str = "mock-session-id";
pub const MOCK_QR_CODE: &str = "mock-qr-code-data";
