use crate::{classify, Result, Shape, TlsType, TypeRef};
use std::any::{self, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

type ShapeMap = HashMap<TypeId, Result<Arc<Shape>>>;

static SHAPES: OnceLock<RwLock<ShapeMap>> = OnceLock::new();

/// The [`Shape`] of `T`, classified on first use and cached for the life of the process.
///
/// Classification failures are cached too; a type's classification never changes.
pub fn shape_of<T: TlsType>() -> Result<Arc<Shape>> {
    let shapes = SHAPES.get_or_init(Default::default);
    let id = TypeId::of::<T>();

    if let Some(res) = shapes
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
    {
        return res.clone();
    }

    let type_name = any::type_name::<T>();
    let res = classify(TypeRef::of::<T>()).map(Arc::new);
    match &res {
        Ok(shape) => debug!(type_name, kind = shape.kind_name(), "Classified type."),
        Err(e) => debug!(type_name, error = %e, "Type is not encodable."),
    }

    /* A racing classification of the same type produced an equal result; keep the first. */
    let mut shapes = shapes.write().unwrap_or_else(PoisonError::into_inner);
    shapes.entry(id).or_insert(res).clone()
}
