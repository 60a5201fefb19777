//! # Wire format
//!
//! Values are encoded in the TLS presentation language (RFC 8446 §3).
//! Encoding is driven by the shape of the value's type, see [`Shape`].
//!
//! Integers are big-endian, with the width of their type.
//! Fixed-length sequences are the concatenation of their elements.
//! Records are the concatenation of their fields, in declaration order.
//! Neither carries a length or a tag.
//!
//! A variable-length sequence (a "vector") is prefixed with the byte length
//! of its body. The prefix width is declared per field (`head=N`), or otherwise
//! is the minimal number of bytes that represents the body length.
//!
//! ```text
//! struct Example {
//!     a:      u16,
//!     b:      Vec<u8>,        // #[tls("head=2")]
//!     c:      [u32; 4],
//! }
//!
//! struct Example::wire {
//!     a:          [u8; 2],
//!     b_len:      [u8; 2],
//!     b_body:     [u8; b_len],
//!     c:          [u8; 16],
//! }
//! ```
//!
//! `min=N` and `max=N` bound the byte length of a vector's body,
//! not the count of its elements.

mod annotation;
mod api;
mod decode;
mod encode;
mod error;
mod macros;
mod shape;
mod value;
mod wire;

pub use annotation::*;
pub use api::*;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use shape::*;
pub use value::*;
pub use wire::*;
