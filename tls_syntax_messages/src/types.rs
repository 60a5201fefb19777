use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use tls_syntax::{tls_alias, ErrorKind, Result, TlsType, TypeDesc, TypeRef, Value};

/// Implements [`TlsType`] for a fieldless enum, as a named alias of its `repr` integer.
/// Unknown discriminants fail to decode.
macro_rules! impl_tls_enum {
    ($name:ident, $repr:ty, $from:ident) => {
        impl TlsType for $name {
            fn type_desc() -> TypeDesc {
                TypeDesc::Named {
                    inner: TypeRef::of::<$repr>(),
                }
            }
            fn to_value(&self) -> Result<Value> {
                (*self as $repr).to_value()
            }
            fn from_value(value: Value) -> Result<Self> {
                let int = <$repr>::from_value(value)?;
                Self::$from(int).ok_or_else(|| {
                    ErrorKind::mismatch(format!("unknown {} {int:#x}", stringify!($name))).into()
                })
            }
        }
    };
}

#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum ContentType {
    Invalid = 0,
    ChangeCipherSpec = 20,
    Alert = 21,
    Handshake = 22,
    ApplicationData = 23,
}
impl_tls_enum!(ContentType, u8, from_u8);

#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum HandshakeType {
    ClientHello = 1,
    ServerHello = 2,
    NewSessionTicket = 4,
    EndOfEarlyData = 5,
    EncryptedExtensions = 8,
    Certificate = 11,
    CertificateRequest = 13,
    CertificateVerify = 15,
    Finished = 20,
    KeyUpdate = 24,
    MessageHash = 254,
}
impl_tls_enum!(HandshakeType, u8, from_u8);

tls_alias! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
    pub struct ProtocolVersion(pub u16);

    /// Extension types are an open registry; unknown ones must round-trip.
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
    pub struct ExtensionType(pub u16);

    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
    pub struct CipherSuite(pub u16);
}

impl ProtocolVersion {
    pub const TLS10: Self = Self(0x0301);
    pub const TLS12: Self = Self(0x0303);
    pub const TLS13: Self = Self(0x0304);
}

impl ExtensionType {
    pub const SERVER_NAME: Self = Self(0x0000);
    pub const SUPPORTED_GROUPS: Self = Self(0x000a);
    pub const SIGNATURE_ALGORITHMS: Self = Self(0x000d);
    pub const SUPPORTED_VERSIONS: Self = Self(0x002b);
    pub const KEY_SHARE: Self = Self(0x0033);
}

#[allow(non_upper_case_globals)]
impl CipherSuite {
    pub const TLS_AES_128_GCM_SHA256: Self = Self(0x1301);
    pub const TLS_AES_256_GCM_SHA384: Self = Self(0x1302);
    pub const TLS_CHACHA20_POLY1305_SHA256: Self = Self(0x1303);
}

pub type Random = [u8; 32];
