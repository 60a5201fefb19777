use crate::{ContentType, Handshake, ProtocolVersion};
use tls_syntax::{marshal, tls_struct, unmarshal, ErrorKind, Result};

/// The largest plaintext fragment, 2^14 bytes.
pub const MAX_FRAGMENT_LEN: usize = 1 << 14;

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct TlsPlaintext {
        pub content_type: ContentType,
        pub legacy_record_version: ProtocolVersion,
        #[tls("head=2,max=16384")]
        pub fragment: Vec<u8>,
    }
}

impl TlsPlaintext {
    pub fn handshake(hs: &Handshake) -> Result<Self> {
        Ok(Self {
            content_type: ContentType::Handshake,
            legacy_record_version: ProtocolVersion::TLS12,
            fragment: marshal(hs)?,
        })
    }

    /// The handshake message carried by this record.
    ///
    /// Handshake messages that span multiple records are not reassembled.
    pub fn unwrap_handshake(&self) -> Result<Handshake> {
        if self.content_type != ContentType::Handshake {
            return Err(ErrorKind::mismatch(format!(
                "expected a handshake record, found {:?}",
                self.content_type
            ))
            .into());
        }
        unmarshal(&self.fragment)
    }
}
