use super::fixtures::*;
use tls_syntax::{unmarshal, unmarshal_into, ErrorKind, Result, TlsType};

fn assert_truncated<T: TlsType + std::fmt::Debug>(z: &[u8]) {
    let z = &z[..z.len() - 1];
    let err = unmarshal::<T>(z).unwrap_err();
    assert!(
        matches!(err.kind(), ErrorKind::Truncated { .. }),
        "{} {err}",
        hex::encode(z)
    );
}

#[test]
fn final_byte_removed() {
    assert_truncated::<u8>(&unhex(Z8));
    assert_truncated::<u16>(&unhex(Z16));
    assert_truncated::<u32>(&unhex(Z32));
    assert_truncated::<u64>(&unhex(Z64));
    assert_truncated::<[u16; 5]>(&unhex(ZA));
    for (len, _) in AUTO_HEAD_CASES {
        let (_, z) = gen_auto_head_vector(len);
        assert_truncated::<Vec<u8>>(&z);
    }
    assert_truncated::<Composite>(&unhex(COMPOSITE_HEX));
}

#[test]
fn any_proper_prefix_of_a_record() {
    let z = unhex(COMPOSITE_HEX);
    for cut in 0..z.len() {
        let err = unmarshal::<Composite>(&z[..cut]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Truncated { .. }), "{cut} {err}");
    }
}

#[test]
fn empty_input() {
    for err in [
        unmarshal::<u8>(&[]).unwrap_err(),
        unmarshal::<Vec<u8>>(&[]).unwrap_err(),
        unmarshal::<Composite>(&[]).unwrap_err(),
    ] {
        assert!(matches!(err.kind(), ErrorKind::Truncated { .. }), "{err}");
    }
}

#[test]
fn declared_length_beyond_input() {
    let err = unmarshal::<Vec<u8>>(&unhex("05a0a1")).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::Truncated {
            needed: 5,
            remaining: 2
        }
    );
}

#[test]
fn no_partial_value_on_failure() -> Result<()> {
    let mut target = gen_composite();
    let z = unhex(COMPOSITE_HEX);

    unmarshal_into(&z[..z.len() - 1], &mut target).unwrap_err();
    assert_eq!(target, gen_composite());

    let zeroed = Composite {
        a: 0,
        b: vec![],
        c: [0; 4],
    };
    let r_len = unmarshal_into(&unhex("0000000000000000000000000000000000000000"), &mut target)?;
    assert_eq!(r_len, 20);
    assert_eq!(target, zeroed);
    Ok(())
}
