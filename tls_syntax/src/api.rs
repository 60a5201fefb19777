use crate::{shape_of, Decoder, Encoder, Result, Shape, TlsType, Value};
use std::any;
use tracing::{debug, trace};

/// Encodes `value` into a new buffer.
pub fn marshal<T: TlsType>(value: &T) -> Result<Vec<u8>> {
    let mut buf = vec![];
    marshal_into(value, &mut buf)?;
    Ok(buf)
}

/// Appends the encoding of `value` to `buf`, and returns the count of bytes appended.
///
/// On failure, `buf` is left as it was.
pub fn marshal_into<T: TlsType>(value: &T, buf: &mut Vec<u8>) -> Result<usize> {
    let type_name = any::type_name::<T>();
    let res = shape_of::<T>().and_then(|shape| {
        let value = value.to_value()?;
        let mut enc = Encoder::from(std::mem::take(buf));
        let len_before = enc.len();
        let res = enc.encode(&value, &shape);
        let w_len = enc.len() - len_before;
        *buf = enc.into_vec();
        res.map(|()| w_len)
    });
    match &res {
        Ok(w_len) => trace!(type_name, w_len, "Encoded."),
        Err(e) => debug!(type_name, error = %e, "Encoding failed."),
    }
    res
}

/// Decodes a `T` that occupies all of `buf`.
pub fn unmarshal<T: TlsType>(buf: &[u8]) -> Result<T> {
    let mut dec = Decoder::new(buf);
    let moi = decode_typed(&mut dec)?;
    dec.finish().map_err(|e| {
        debug!(type_name = any::type_name::<T>(), error = %e, "Decoding failed.");
        e
    })?;
    Ok(moi)
}

/// Decodes a `T` from the start of `buf`, and returns it with the count of bytes consumed.
pub fn unmarshal_prefix<T: TlsType>(buf: &[u8]) -> Result<(T, usize)> {
    let mut dec = Decoder::new(buf);
    let moi = decode_typed(&mut dec)?;
    Ok((moi, dec.position()))
}

/// Decodes a `T` from the start of `buf` into `target`, and returns the count of bytes consumed.
///
/// `target` is assigned only on success.
pub fn unmarshal_into<T: TlsType>(buf: &[u8], target: &mut T) -> Result<usize> {
    let (moi, r_len) = unmarshal_prefix(buf)?;
    *target = moi;
    Ok(r_len)
}

fn decode_typed<T: TlsType>(dec: &mut Decoder) -> Result<T> {
    let type_name = any::type_name::<T>();
    let res = shape_of::<T>()
        .and_then(|shape| dec.decode(&shape))
        .and_then(T::from_value);
    match &res {
        Ok(_) => trace!(type_name, r_len = dec.position(), "Decoded."),
        Err(e) => debug!(type_name, error = %e, "Decoding failed."),
    }
    res
}

/// Encodes a dynamic [`Value`] against an explicit [`Shape`].
pub fn encode_value(value: &Value, shape: &Shape) -> Result<Vec<u8>> {
    let mut enc = Encoder::new();
    enc.encode(value, shape)?;
    Ok(enc.into_vec())
}

/// Decodes a dynamic [`Value`] of an explicit [`Shape`] from the start of `buf`,
/// and returns it with the count of bytes consumed.
pub fn decode_value(buf: &[u8], shape: &Shape) -> Result<(Value, usize)> {
    let mut dec = Decoder::new(buf);
    let value = dec.decode(shape)?;
    Ok((value, dec.position()))
}
