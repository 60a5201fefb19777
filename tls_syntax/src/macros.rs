/// Declares a record struct and implements [`TlsType`](crate::TlsType) for it.
///
/// Fields are encoded in declaration order.
/// A vector-typed field may carry an annotation `#[tls("head=N,min=N,max=N")]`,
/// with any subset of the keys; see [`VectorConfig`](crate::VectorConfig).
///
/// ```
/// use tls_syntax::tls_struct;
///
/// tls_struct! {
///     #[derive(PartialEq, Eq, Debug)]
///     pub struct Extension {
///         pub extension_type: u16,
///         #[tls("head=2")]
///         pub extension_data: Vec<u8>,
///     }
/// }
///
/// let ext = Extension { extension_type: 0x000a, extension_data: vec![0xf0, 0xf1] };
/// let buf = tls_syntax::marshal(&ext).unwrap();
/// assert_eq!(buf, [0x00, 0x0a, 0x00, 0x02, 0xf0, 0xf1]);
/// assert_eq!(tls_syntax::unmarshal::<Extension>(&buf).unwrap(), ext);
/// ```
#[macro_export]
macro_rules! tls_struct {
    (@annotation) => {
        $crate::Annotation::None
    };
    (@annotation $ann:literal) => {
        $crate::Annotation::Raw($ann)
    };
    (@one $field:ident) => {
        1usize
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[tls($ann:literal)])?
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $field: $fty, )*
        }

        impl $crate::TlsType for $name {
            fn type_desc() -> $crate::TypeDesc {
                $crate::TypeDesc::Struct {
                    fields: ::std::vec![
                        $(
                            $crate::FieldDesc::new(
                                ::std::stringify!($field),
                                $crate::TypeRef::of::<$fty>(),
                            )
                            .annotated($crate::tls_struct!(@annotation $($ann)?)),
                        )*
                    ],
                }
            }

            fn to_value(&self) -> $crate::Result<$crate::Value> {
                #[allow(unused_mut)]
                let mut record = $crate::RecordBuilder::new();
                $( record.push_field(::std::stringify!($field), &self.$field)?; )*
                ::std::result::Result::Ok(record.finish())
            }

            fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                let arity = 0usize $( + $crate::tls_struct!(@one $field) )*;
                #[allow(unused_mut)]
                let mut fields = value.into_record_fields(arity)?;
                let moi = Self {
                    $( $field: fields.next_field(::std::stringify!($field))?, )*
                };
                fields.finish()?;
                ::std::result::Result::Ok(moi)
            }
        }
    };
}

/// Declares newtypes that are named aliases of other encodable types.
///
/// An alias has exactly the encoding of the type it wraps.
///
/// ```
/// use tls_syntax::tls_alias;
///
/// tls_alias! {
///     #[derive(PartialEq, Eq, Clone, Copy, Debug)]
///     pub struct CipherSuite(pub u16);
/// }
///
/// assert_eq!(tls_syntax::marshal(&CipherSuite(0x1301)).unwrap(), [0x13, 0x01]);
/// ```
#[macro_export]
macro_rules! tls_alias {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($ivis:vis $inner:ty);
    )*) => {
        $(
            $(#[$meta])*
            $vis struct $name($ivis $inner);

            impl $crate::TlsType for $name {
                fn type_desc() -> $crate::TypeDesc {
                    $crate::TypeDesc::Named {
                        inner: $crate::TypeRef::of::<$inner>(),
                    }
                }
                fn to_value(&self) -> $crate::Result<$crate::Value> {
                    $crate::TlsType::to_value(&self.0)
                }
                fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                    <$inner as $crate::TlsType>::from_value(value).map(Self)
                }
            }

            impl ::std::convert::From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    Self(inner)
                }
            }
        )*
    };
}
