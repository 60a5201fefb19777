use crate::{CipherSuite, ExtensionType, HandshakeType, ProtocolVersion, Random};
use tls_syntax::{marshal, tls_struct, unmarshal, ErrorKind, Result, TlsType};

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct Handshake {
        pub msg_type: HandshakeType,
        #[tls("head=3")]
        pub msg_body: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct Extension {
        pub extension_type: ExtensionType,
        #[tls("head=2")]
        pub extension_data: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct ClientHello {
        pub legacy_version: ProtocolVersion,
        pub random: Random,
        #[tls("head=1,max=32")]
        pub legacy_session_id: Vec<u8>,
        #[tls("head=2,min=2")]
        pub cipher_suites: Vec<CipherSuite>,
        #[tls("head=1,min=1")]
        pub legacy_compression_methods: Vec<u8>,
        #[tls("head=2")]
        pub extensions: Vec<Extension>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct ServerHello {
        pub version: ProtocolVersion,
        pub random: Random,
        pub cipher_suite: CipherSuite,
        #[tls("head=2")]
        pub extensions: Vec<Extension>,
    }
}

/// A handshake message body, tagged with its [`HandshakeType`].
pub trait HandshakeBody: TlsType {
    const MSG_TYPE: HandshakeType;
}
impl HandshakeBody for ClientHello {
    const MSG_TYPE: HandshakeType = HandshakeType::ClientHello;
}
impl HandshakeBody for ServerHello {
    const MSG_TYPE: HandshakeType = HandshakeType::ServerHello;
}

impl Handshake {
    pub fn wrap<B: HandshakeBody>(body: &B) -> Result<Self> {
        Ok(Self {
            msg_type: B::MSG_TYPE,
            msg_body: marshal(body)?,
        })
    }

    pub fn unwrap_body<B: HandshakeBody>(&self) -> Result<B> {
        if self.msg_type != B::MSG_TYPE {
            return Err(ErrorKind::mismatch(format!(
                "expected {:?}, found {:?}",
                B::MSG_TYPE,
                self.msg_type
            ))
            .into());
        }
        unmarshal(&self.msg_body)
    }
}

impl ClientHello {
    pub fn extension(&self, extension_type: ExtensionType) -> Option<&Extension> {
        find_extension(&self.extensions, extension_type)
    }
}
impl ServerHello {
    pub fn extension(&self, extension_type: ExtensionType) -> Option<&Extension> {
        find_extension(&self.extensions, extension_type)
    }
}

fn find_extension(exts: &[Extension], extension_type: ExtensionType) -> Option<&Extension> {
    exts.iter().find(|ext| ext.extension_type == extension_type)
}
