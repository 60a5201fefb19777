use tls_syntax::tls_struct;

pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn repeat_hex(byte_hex: &str, count: usize) -> String {
    byte_hex.repeat(count)
}

pub const X8: u8 = 0xA0;
pub const Z8: &str = "A0";

pub const X16: u16 = 0xB0A0;
pub const Z16: &str = "B0A0";

pub const X32: u32 = 0xD0C0B0A0;
pub const Z32: &str = "D0C0B0A0";

pub const X64: u64 = 0xD0C0B0A090807060;
pub const Z64: &str = "D0C0B0A090807060";

pub const XA: [u16; 5] = [0x1111, 0x2222, 0x3333, 0x4444, 0x5555];
pub const ZA: &str = "11112222333344445555";

/// `(body length, expected prefix)` of unannotated byte vectors.
pub const AUTO_HEAD_CASES: [(usize, &str); 3] = [(0x20, "20"), (0x200, "0200"), (0x20000, "020000")];

pub fn gen_auto_head_vector(len: usize) -> (Vec<u8>, Vec<u8>) {
    let prefix = AUTO_HEAD_CASES
        .iter()
        .find(|(case_len, _)| *case_len == len)
        .map(|(_, prefix)| *prefix)
        .unwrap();
    let x = vec![0xA0; len];
    let z = unhex(&(prefix.to_string() + &repeat_hex("A0", len)));
    (x, z)
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct HeadTooNarrow {
        #[tls("head=1")]
        pub v: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct CappedAtMax {
        #[tls("max=31")]
        pub v: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct FlooredAtMin {
        #[tls("min=33")]
        pub v: Vec<u8>,
    }
}

tls_struct! {
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct Composite {
        pub a: u16,
        #[tls("head=2")]
        pub b: Vec<u8>,
        pub c: [u32; 4],
    }
}

pub fn gen_composite() -> Composite {
    Composite {
        a: 0xB0A0,
        b: vec![0xA0, 0xA1, 0xA2, 0xA3, 0xA4],
        c: [0x10111213, 0x20212223, 0x30313233, 0x40414243],
    }
}
pub const COMPOSITE_HEX: &str = "B0A00005A0A1A2A3A410111213202122233031323340414243";
