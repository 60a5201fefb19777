use crate::VectorConfig;

mod cache;
mod classify;
mod desc;

pub use cache::*;
pub use classify::*;
pub use desc::*;

/// The structural category of a type, which fully determines its wire encoding.
///
/// A [`Shape`] is derived once per type (see [`shape_of()`]) and is read-only thereafter.
/// Every leaf is a [`Shape::FixedInt`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Shape {
    /// Big-endian unsigned integer of `width` bytes: 1, 2, 4, or 8.
    FixedInt { width: u8 },
    /// `count` elements back to back. The count is part of the type and is not encoded.
    FixedSequence { elem: Box<Shape>, count: usize },
    /// Length-prefixed body of elements.
    VariableSequence { elem: Box<Shape>, cfg: VectorConfig },
    /// Fields back to back, in declaration order.
    Record {
        name: &'static str,
        fields: Vec<FieldShape>,
    },
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FieldShape {
    pub name: &'static str,
    pub shape: Shape,
}
impl FieldShape {
    /// The vector configuration this field was annotated with, if it is a vector.
    pub fn vector_config(&self) -> Option<&VectorConfig> {
        match &self.shape {
            Shape::VariableSequence { cfg, .. } => Some(cfg),
            _ => None,
        }
    }
}

impl Shape {
    pub fn byte_vector(cfg: VectorConfig) -> Self {
        Self::VariableSequence {
            elem: Box::new(Self::FixedInt { width: 1 }),
            cfg,
        }
    }

    /// The encoded length of every value of this shape, if it does not depend on the value.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::FixedInt { width } => Some(*width as usize),
            Self::FixedSequence { count: 0, .. } => Some(0),
            Self::FixedSequence { elem, count } => elem.fixed_width()?.checked_mul(*count),
            Self::VariableSequence { .. } => None,
            Self::Record { fields, .. } => fields.iter().try_fold(0usize, |acc, field| {
                acc.checked_add(field.shape.fixed_width()?)
            }),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::FixedInt { .. } => "fixed-width integer",
            Self::FixedSequence { .. } => "fixed-length sequence",
            Self::VariableSequence { .. } => "vector",
            Self::Record { .. } => "record",
        }
    }
}
