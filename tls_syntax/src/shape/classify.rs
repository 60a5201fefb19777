use crate::{Error, ErrorKind, FieldShape, Result, Shape, TypeDesc, TypeRef, VectorConfig};
use std::any::TypeId;

/// Derives the [`Shape`] of a described type.
///
/// Fails with [`ErrorKind::UnsupportedType`] for types that have no encoding,
/// including types that contain themselves,
/// and with [`ErrorKind::InvalidAnnotation`] for malformed or misplaced field annotations.
pub fn classify(ty: TypeRef) -> Result<Shape> {
    Classifier::default().classify(ty)
}

#[derive(Default)]
struct Classifier {
    /// Types whose classification is underway, outermost first.
    in_progress: Vec<TypeId>,
}

impl Classifier {
    fn classify(&mut self, ty: TypeRef) -> Result<Shape> {
        let id = ty.id();
        if self.in_progress.contains(&id) {
            return Err(ErrorKind::unsupported(ty.name(), "type contains itself").into());
        }

        self.in_progress.push(id);
        let res = self.classify_desc(ty);
        self.in_progress.pop();
        res
    }

    fn classify_desc(&mut self, ty: TypeRef) -> Result<Shape> {
        let shape = match ty.desc() {
            TypeDesc::Uint { bits } => match bits {
                8 | 16 | 32 | 64 => Shape::FixedInt {
                    width: (bits / 8) as u8,
                },
                _ => {
                    return Err(ErrorKind::unsupported(
                        ty.name(),
                        format!("{bits}-bit integers have no fixed-width encoding"),
                    )
                    .into())
                }
            },
            TypeDesc::Array { elem, len } => Shape::FixedSequence {
                elem: Box::new(self.classify(elem)?),
                count: len,
            },
            TypeDesc::List { elem } => {
                let elem = self.classify(elem)?;
                if elem.fixed_width() == Some(0) {
                    return Err(ErrorKind::unsupported(
                        ty.name(),
                        "vector elements must not be zero-width",
                    )
                    .into());
                }
                Shape::VariableSequence {
                    elem: Box::new(elem),
                    cfg: VectorConfig::new(),
                }
            }
            TypeDesc::Struct { fields } => {
                let mut field_shapes = Vec::with_capacity(fields.len());
                for (index, field) in fields.into_iter().enumerate() {
                    let shape = self
                        .classify(field.ty)
                        .and_then(|shape| field.annotation.resolve(shape).map_err(Error::from))
                        .map_err(|e| e.within_field(index, field.name))?;
                    field_shapes.push(FieldShape {
                        name: field.name,
                        shape,
                    });
                }
                Shape::Record {
                    name: ty.name(),
                    fields: field_shapes,
                }
            }
            TypeDesc::Named { inner } => self.classify(inner)?,
            TypeDesc::Unsupported { reason } => {
                return Err(ErrorKind::unsupported(ty.name(), reason).into())
            }
        };
        Ok(shape)
    }
}
