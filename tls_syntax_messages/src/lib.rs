//! TLS 1.3 record-layer and handshake messages (RFC 8446 §4, §5.1),
//! declared as [`tls_syntax`] records.
//!
//! Only the wire layout is modelled here. No field is interpreted.
//!
//! ```text
//! struct TlsPlaintext {
//!     content_type:           u8,
//!     legacy_record_version:  u16,
//!     fragment_len:           u16,
//!     fragment:               [u8; fragment_len],     // Handshake, if content_type == handshake
//! }
//!
//! struct Handshake {
//!     msg_type:               u8,
//!     msg_body_len:           u24,
//!     msg_body:               [u8; msg_body_len],     // ClientHello, ServerHello, ...
//! }
//! ```

pub mod config;
mod handshake;
pub mod inspect;
mod record;
mod types;

pub use handshake::*;
pub use record::*;
pub use types::*;
