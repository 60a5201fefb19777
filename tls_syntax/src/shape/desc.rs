use crate::{Annotation, TlsType};
use std::any::{self, TypeId};
use std::fmt;

/// The declared structure of a Rust type, as reported by [`TlsType::type_desc()`].
///
/// A description refers to its component types lazily, via [`TypeRef`]s,
/// so that describing a self-referential type terminates.
/// Whether the description is encodable is decided by [`classify()`](crate::classify).
#[derive(Debug)]
pub enum TypeDesc {
    Uint { bits: u32 },
    Array { elem: TypeRef, len: usize },
    List { elem: TypeRef },
    Struct { fields: Vec<FieldDesc> },
    /// A distinct name for another type, with the same encoding.
    Named { inner: TypeRef },
    Unsupported { reason: &'static str },
}

#[derive(Clone, Copy)]
pub struct TypeRef {
    name: fn() -> &'static str,
    id: fn() -> TypeId,
    desc: fn() -> TypeDesc,
}
impl TypeRef {
    pub fn of<T: TlsType>() -> Self {
        Self {
            name: any::type_name::<T>,
            id: TypeId::of::<T>,
            desc: T::type_desc,
        }
    }
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
    pub fn id(&self) -> TypeId {
        (self.id)()
    }
    pub fn desc(&self) -> TypeDesc {
        (self.desc)()
    }
}
impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.name())
    }
}

#[derive(Debug)]
pub struct FieldDesc {
    pub name: &'static str,
    pub ty: TypeRef,
    pub annotation: Annotation,
}
impl FieldDesc {
    pub fn new(name: &'static str, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            annotation: Annotation::None,
        }
    }
    pub fn annotated(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotation = annotation.into();
        self
    }
}
