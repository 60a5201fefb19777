use crate::{Error, ErrorKind, Result, TlsType};
use std::vec;

/// A value in the shape-agnostic form that the engine encodes and decodes.
///
/// A [`Value`] is only meaningful together with the [`Shape`](crate::Shape) that describes it:
/// - [`Shape::FixedInt`](crate::Shape::FixedInt) ↔ [`Value::Int`]
/// - [`Shape::FixedSequence`](crate::Shape::FixedSequence) and
///   [`Shape::VariableSequence`](crate::Shape::VariableSequence) ↔ [`Value::Seq`]
/// - [`Shape::Record`](crate::Shape::Record) ↔ [`Value::Record`], one member per field, in order
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Value {
    Int(u64),
    Seq(Vec<Value>),
    Record(Vec<Value>),
}

impl Value {
    pub fn bytes(buf: &[u8]) -> Self {
        Self::Seq(buf.iter().map(|b| Self::Int(u64::from(*b))).collect())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Seq(_) => "sequence",
            Self::Record(_) => "record",
        }
    }

    pub fn into_int(self) -> Result<u64> {
        match self {
            Self::Int(i) => Ok(i),
            other => Err(Self::unexpected("integer", &other)),
        }
    }

    pub fn into_seq(self) -> Result<Vec<Value>> {
        match self {
            Self::Seq(members) => Ok(members),
            other => Err(Self::unexpected("sequence", &other)),
        }
    }

    pub fn into_record_fields(self, arity: usize) -> Result<RecordFields> {
        match self {
            Self::Record(fields) if fields.len() == arity => Ok(RecordFields {
                fields: fields.into_iter(),
                index: 0,
            }),
            Self::Record(fields) => Err(ErrorKind::mismatch(format!(
                "expected a record of {arity} fields, found {}",
                fields.len()
            ))
            .into()),
            other => Err(Self::unexpected("record", &other)),
        }
    }

    fn unexpected(expected: &str, found: &Value) -> Error {
        ErrorKind::mismatch(format!("expected {expected}, found {}", found.kind_name())).into()
    }
}

/// Collects typed fields into a [`Value::Record`], one by one, in order.
#[derive(Default)]
pub struct RecordBuilder {
    fields: Vec<Value>,
}
impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push_field<T: TlsType>(&mut self, name: &'static str, field: &T) -> Result<()> {
        let index = self.fields.len();
        let value = field.to_value().map_err(|e| e.within_field(index, name))?;
        self.fields.push(value);
        Ok(())
    }
    pub fn finish(self) -> Value {
        Value::Record(self.fields)
    }
}

/// Converts the members of a [`Value::Record`] into typed fields, one by one, in order.
pub struct RecordFields {
    fields: vec::IntoIter<Value>,
    index: usize,
}
impl RecordFields {
    pub fn next_field<T: TlsType>(&mut self, name: &'static str) -> Result<T> {
        let index = self.index;
        self.index += 1;

        let value = self.fields.next().ok_or_else(|| {
            Error::from(ErrorKind::mismatch("record has too few fields")).within_field(index, name)
        })?;
        T::from_value(value).map_err(|e| e.within_field(index, name))
    }

    pub fn finish(self) -> Result<()> {
        match self.fields.len() {
            0 => Ok(()),
            extra => Err(ErrorKind::mismatch(format!("record has {extra} extra fields")).into()),
        }
    }
}
