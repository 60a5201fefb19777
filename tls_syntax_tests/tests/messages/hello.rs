use anyhow::Result;
use itertools::Itertools;
use tls_syntax::{marshal, unmarshal, ErrorKind};
use tls_syntax_messages::inspect::{inspect, MessageKind};
use tls_syntax_messages::{
    CipherSuite, ClientHello, ContentType, Extension, ExtensionType, Handshake, HandshakeType,
    ProtocolVersion, Random, ServerHello, TlsPlaintext,
};

const EXT_LIST_HEX: &str = "000d000a0005f0f1f2f3f4000a0000";

fn gen_random() -> Random {
    let mut random = [0u8; 32];
    let bytes = (0..4u8).flat_map(|hi| (0..8u8).map(move |lo| (hi << 4) | lo));
    for (dst, src) in random.iter_mut().zip(bytes) {
        *dst = src;
    }
    random
}
fn random_hex() -> String {
    (0..4).map(|hi| (0..8).map(|lo| format!("{hi}{lo}")).join("")).join("")
}

fn gen_extensions() -> Vec<Extension> {
    vec![
        Extension {
            extension_type: ExtensionType::SUPPORTED_GROUPS,
            extension_data: vec![0xf0, 0xf1, 0xf2, 0xf3, 0xf4],
        },
        Extension {
            extension_type: ExtensionType::SUPPORTED_GROUPS,
            extension_data: vec![],
        },
    ]
}

fn gen_client_hello() -> ClientHello {
    ClientHello {
        legacy_version: ProtocolVersion::TLS12,
        random: gen_random(),
        legacy_session_id: vec![],
        cipher_suites: vec![CipherSuite(1), CipherSuite(2), CipherSuite(3)],
        legacy_compression_methods: vec![0],
        extensions: gen_extensions(),
    }
}
fn client_hello_hex() -> String {
    ["0303", random_hex().as_str(), "00", "0006000100020003", "0100", EXT_LIST_HEX].concat()
}

fn gen_server_hello() -> ServerHello {
    ServerHello {
        version: ProtocolVersion(0x7f12),
        random: gen_random(),
        cipher_suite: CipherSuite(1),
        extensions: gen_extensions(),
    }
}
fn server_hello_hex() -> String {
    ["7f12", random_hex().as_str(), "0001", EXT_LIST_HEX].concat()
}

#[test]
fn client_hello() -> Result<()> {
    let x = gen_client_hello();
    let z = hex::decode(client_hello_hex())?;
    assert_eq!(marshal(&x)?, z);
    assert_eq!(unmarshal::<ClientHello>(&z)?, x);
    Ok(())
}

#[test]
fn server_hello() -> Result<()> {
    let x = gen_server_hello();
    let z = hex::decode(server_hello_hex())?;
    assert_eq!(marshal(&x)?, z);
    assert_eq!(unmarshal::<ServerHello>(&z)?, x);
    Ok(())
}

#[test]
fn hello_final_byte_removed() -> Result<()> {
    let z = hex::decode(client_hello_hex())?;
    let err = unmarshal::<ClientHello>(&z[..z.len() - 1]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Truncated { .. }), "{err}");
    assert_eq!(err.path()[0].to_string(), ".extensions");

    let z = hex::decode(server_hello_hex())?;
    let err = unmarshal::<ServerHello>(&z[..z.len() - 1]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Truncated { .. }), "{err}");
    Ok(())
}

#[test]
fn client_hello_bounds() {
    let mut x = gen_client_hello();
    x.cipher_suites.clear();
    let err = marshal(&x).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::LengthOutOfRange {
            len: 0,
            min: Some(2),
            max: None
        }
    );
    assert_eq!(err.path()[0].to_string(), ".cipher_suites");

    let mut x = gen_client_hello();
    x.legacy_compression_methods.clear();
    let err = marshal(&x).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::LengthOutOfRange { .. }));
}

#[test]
fn odd_cipher_suites_length() -> Result<()> {
    let z = hex::decode(
        ["0303", random_hex().as_str(), "00", "000300010002", "0100", EXT_LIST_HEX].concat(),
    )?;
    let err = unmarshal::<ClientHello>(&z).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MisalignedLength {
            len: 3,
            elem_width: Some(2)
        }
    );
    Ok(())
}

#[test]
fn client_hello_in_record() -> Result<()> {
    let x = gen_client_hello();
    let body = marshal(&x)?;
    let record = TlsPlaintext::handshake(&Handshake::wrap(&x)?)?;
    let z = marshal(&record)?;

    let hs_len = 1 + 3 + body.len();
    assert_eq!(z[0], 0x16);
    assert_eq!(z[1..3], [0x03, 0x03]);
    assert_eq!(z[3..5], (hs_len as u16).to_be_bytes());
    assert_eq!(z[5], 0x01);
    assert_eq!(z[6..9], (body.len() as u32).to_be_bytes()[1..]);
    assert_eq!(z[9..], body[..]);

    let record = unmarshal::<TlsPlaintext>(&z)?;
    assert_eq!(record.content_type, ContentType::Handshake);
    let hs = record.unwrap_handshake()?;
    assert_eq!(hs.msg_type, HandshakeType::ClientHello);
    assert_eq!(hs.unwrap_body::<ClientHello>()?, x);
    Ok(())
}

#[test]
fn inspect_server_hello() -> Result<()> {
    let z = hex::decode(server_hello_hex())?;
    let insp = inspect(MessageKind::ServerHello, &z, true)?;
    assert_eq!(insp.r_len, z.len());
    assert!(insp.canonical);
    assert!(insp.pretty.contains("cipher_suite"));

    assert!("server-hello".parse::<MessageKind>()? == MessageKind::ServerHello);
    assert!("bogus".parse::<MessageKind>().is_err());
    Ok(())
}
