use crate::{ClientHello, Extension, Handshake, ServerHello, TlsPlaintext};
use anyhow::{anyhow, Result};
use std::fmt::Debug;
use std::str::FromStr;
use tls_syntax::{marshal, unmarshal, unmarshal_prefix, TlsType};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MessageKind {
    Plaintext,
    Handshake,
    ClientHello,
    ServerHello,
    Extension,
}
impl FromStr for MessageKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "plaintext" => Ok(Self::Plaintext),
            "handshake" => Ok(Self::Handshake),
            "client-hello" => Ok(Self::ClientHello),
            "server-hello" => Ok(Self::ServerHello),
            "extension" => Ok(Self::Extension),
            _ => Err(anyhow!("Unknown message kind {s:?}")),
        }
    }
}

#[derive(Debug)]
pub struct Inspection {
    pub pretty: String,
    pub r_len: usize,
    /// Whether re-encoding the decoded message reproduced the consumed input exactly.
    pub canonical: bool,
}

pub fn inspect(kind: MessageKind, buf: &[u8], strict: bool) -> Result<Inspection> {
    match kind {
        MessageKind::Plaintext => inspect_as::<TlsPlaintext>(buf, strict),
        MessageKind::Handshake => inspect_as::<Handshake>(buf, strict),
        MessageKind::ClientHello => inspect_as::<ClientHello>(buf, strict),
        MessageKind::ServerHello => inspect_as::<ServerHello>(buf, strict),
        MessageKind::Extension => inspect_as::<Extension>(buf, strict),
    }
}

fn inspect_as<T: TlsType + Debug>(buf: &[u8], strict: bool) -> Result<Inspection> {
    let (msg, r_len) = if strict {
        (unmarshal::<T>(buf)?, buf.len())
    } else {
        unmarshal_prefix::<T>(buf)?
    };
    let reencoded = marshal(&msg)?;
    Ok(Inspection {
        pretty: format!("{msg:#?}"),
        r_len,
        canonical: reencoded == buf[..r_len],
    })
}
