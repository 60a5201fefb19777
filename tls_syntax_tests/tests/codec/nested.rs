use super::fixtures::*;
use anyhow::Result;
use tls_syntax::{marshal, tls_struct, unmarshal, unmarshal_prefix, ErrorKind};

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct Ext {
        extension_type: u16,
        #[tls("head=2")]
        data: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct ExtList {
        #[tls("head=2")]
        exts: Vec<Ext>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct Matrix {
        #[tls("head=1")]
        rows: Vec<Row>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct Row {
        #[tls("head=1")]
        cells: Vec<u16>,
    }
}

const EXT_LIST_HEX: &str = "000d000a0005f0f1f2f3f4000a0000";

fn gen_ext_list() -> ExtList {
    ExtList {
        exts: vec![
            Ext {
                extension_type: 0x000a,
                data: vec![0xf0, 0xf1, 0xf2, 0xf3, 0xf4],
            },
            Ext {
                extension_type: 0x000a,
                data: vec![],
            },
        ],
    }
}

#[test]
fn ext_list() -> Result<()> {
    let x = gen_ext_list();
    let z = unhex(EXT_LIST_HEX);
    assert_eq!(marshal(&x)?, z);
    assert_eq!(unmarshal::<ExtList>(&z)?, x);
    Ok(())
}

#[test]
fn ext_list_followed_by_more() -> Result<()> {
    let mut z = unhex(EXT_LIST_HEX);
    z.extend_from_slice(&[0xEE, 0xEE]);
    let (x, r_len) = unmarshal_prefix::<ExtList>(&z)?;
    assert_eq!(x, gen_ext_list());
    assert_eq!(r_len, z.len() - 2);
    Ok(())
}

#[test]
fn element_overruns_its_enclosing_vector() {
    // The outer prefix claims 5 bytes; the first element claims 9.
    let z = unhex("0005000a0005f0f1f2f3f4");
    let err = unmarshal::<ExtList>(&z).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MisalignedLength {
            len: 5,
            elem_width: None
        }
    );
    assert_eq!(err.to_string().rsplit(" at ").next(), Some(".exts[0].data"));
}

#[test]
fn element_shorter_than_its_slot() {
    // The outer prefix claims 3 bytes; an element needs at least 4.
    let z = unhex("0003000a00");
    let err = unmarshal::<ExtList>(&z).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MisalignedLength { len: 3, .. }));
}

#[test]
fn nested_vectors() -> Result<()> {
    let x = Matrix {
        rows: vec![
            Row {
                cells: vec![1, 2],
            },
            Row { cells: vec![] },
            Row {
                cells: vec![0xFFFF],
            },
        ],
    };
    let z = marshal(&x)?;
    assert_eq!(hex::encode(&z), "0904000100020002ffff");
    assert_eq!(unmarshal::<Matrix>(&z)?, x);
    Ok(())
}

#[test]
fn inner_misalignment_is_reported_at_the_inner_vector() {
    let z = unhex("040300010002");
    let err = unmarshal::<Matrix>(&z).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MisalignedLength {
            len: 3,
            elem_width: Some(2)
        }
    );
    assert_eq!(err.path().len(), 3);
}
