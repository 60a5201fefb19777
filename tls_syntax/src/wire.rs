use crate::{ErrorKind, Result, TypeDesc, TypeRef, Value};
use num_traits::FromPrimitive;
use std::any;
use std::collections::{BTreeMap, HashMap};

/// A Rust type that the codec can encode and decode.
///
/// The type describes its own structure ([`TlsType::type_desc()`]),
/// and converts to and from the engine's [`Value`] form.
/// Encoding behavior is derived from the description alone; see [`crate::classify()`].
///
/// Records and named aliases are normally implemented with
/// [`tls_struct!`](crate::tls_struct) and [`tls_alias!`](crate::tls_alias).
pub trait TlsType: Sized + 'static {
    fn type_desc() -> TypeDesc;
    fn to_value(&self) -> Result<Value>;
    fn from_value(value: Value) -> Result<Self>;

    fn to_wire(&self) -> Result<Vec<u8>> {
        crate::marshal(self)
    }
    fn from_wire(buf: &[u8]) -> Result<Self> {
        crate::unmarshal(buf)
    }
}

/* Fixed-width unsigned integers. */
macro_rules! impl_uint {
    ($($int:ty),*) => {
        $(
            impl TlsType for $int {
                fn type_desc() -> TypeDesc {
                    TypeDesc::Uint { bits: <$int>::BITS }
                }
                fn to_value(&self) -> Result<Value> {
                    Ok(Value::Int(u64::from(*self)))
                }
                fn from_value(value: Value) -> Result<Self> {
                    let int = value.into_int()?;
                    <$int>::from_u64(int).ok_or_else(|| {
                        ErrorKind::mismatch(format!(
                            "{int:#x} does not fit {}",
                            any::type_name::<$int>()
                        ))
                        .into()
                    })
                }
            }
        )*
    };
}
impl_uint!(u8, u16, u32, u64);

impl TlsType for u128 {
    fn type_desc() -> TypeDesc {
        TypeDesc::Uint { bits: u128::BITS }
    }
    fn to_value(&self) -> Result<Value> {
        let int = u64::try_from(*self)
            .map_err(|_| ErrorKind::mismatch(format!("{self:#x} does not fit u64")))?;
        Ok(Value::Int(int))
    }
    fn from_value(value: Value) -> Result<Self> {
        Ok(u128::from(value.into_int()?))
    }
}

/* Sequences. */
impl<T: TlsType, const N: usize> TlsType for [T; N] {
    fn type_desc() -> TypeDesc {
        TypeDesc::Array {
            elem: TypeRef::of::<T>(),
            len: N,
        }
    }
    fn to_value(&self) -> Result<Value> {
        elems_to_value(self)
    }
    fn from_value(value: Value) -> Result<Self> {
        let members = value.into_seq()?;
        if members.len() != N {
            return Err(ErrorKind::mismatch(format!(
                "expected {N} elements, found {}",
                members.len()
            ))
            .into());
        }
        let elems = elems_from_values::<T>(members)?;
        <[T; N]>::try_from(elems)
            .map_err(|_| ErrorKind::mismatch(format!("expected {N} elements")).into())
    }
}

impl<T: TlsType> TlsType for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::List {
            elem: TypeRef::of::<T>(),
        }
    }
    fn to_value(&self) -> Result<Value> {
        elems_to_value(self)
    }
    fn from_value(value: Value) -> Result<Self> {
        elems_from_values(value.into_seq()?)
    }
}

fn elems_to_value<T: TlsType>(elems: &[T]) -> Result<Value> {
    let mut members = Vec::with_capacity(elems.len());
    for (i, elem) in elems.iter().enumerate() {
        members.push(elem.to_value().map_err(|e| e.within_element(i))?);
    }
    Ok(Value::Seq(members))
}
fn elems_from_values<T: TlsType>(members: Vec<Value>) -> Result<Vec<T>> {
    let mut elems = Vec::with_capacity(members.len());
    for (i, member) in members.into_iter().enumerate() {
        elems.push(T::from_value(member).map_err(|e| e.within_element(i))?);
    }
    Ok(elems)
}

/* Types that have no encoding. They are describable, so that classification can reject them. */
macro_rules! impl_unsupported {
    ($($t:ty => $reason:literal),* $(,)?) => {
        $(
            impl TlsType for $t {
                fn type_desc() -> TypeDesc {
                    TypeDesc::Unsupported { reason: $reason }
                }
                fn to_value(&self) -> Result<Value> {
                    Err(unsupported::<Self>($reason))
                }
                fn from_value(_: Value) -> Result<Self> {
                    Err(unsupported::<Self>($reason))
                }
            }
        )*
    };
}
impl_unsupported!(
    f32 => "floating point",
    f64 => "floating point",
    i8 => "signed integer",
    i16 => "signed integer",
    i32 => "signed integer",
    i64 => "signed integer",
    i128 => "signed integer",
    usize => "platform-dependent width",
    isize => "platform-dependent width",
    bool => "boolean",
    char => "character",
    String => "string; use a byte vector",
);

impl<T: 'static> TlsType for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Unsupported { reason: "optional" }
    }
    fn to_value(&self) -> Result<Value> {
        Err(unsupported::<Self>("optional"))
    }
    fn from_value(_: Value) -> Result<Self> {
        Err(unsupported::<Self>("optional"))
    }
}
impl<K: 'static, V: 'static, S: 'static> TlsType for HashMap<K, V, S> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Unsupported { reason: "map" }
    }
    fn to_value(&self) -> Result<Value> {
        Err(unsupported::<Self>("map"))
    }
    fn from_value(_: Value) -> Result<Self> {
        Err(unsupported::<Self>("map"))
    }
}
impl<K: 'static, V: 'static> TlsType for BTreeMap<K, V> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Unsupported { reason: "map" }
    }
    fn to_value(&self) -> Result<Value> {
        Err(unsupported::<Self>("map"))
    }
    fn from_value(_: Value) -> Result<Self> {
        Err(unsupported::<Self>("map"))
    }
}

fn unsupported<T>(reason: &str) -> crate::Error {
    ErrorKind::unsupported(any::type_name::<T>(), reason).into()
}
