use derive_more::Display;
use itertools::Itertools;
use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What went wrong, independent of where it went wrong.
#[derive(Display, PartialEq, Eq, Clone, Debug)]
pub enum ErrorKind {
    #[display(fmt = "unsupported type {}: {}", type_name, reason)]
    UnsupportedType {
        type_name: String,
        reason: String,
    },

    #[display(fmt = "invalid annotation {:?}: {}", annotation, reason)]
    InvalidAnnotation {
        annotation: String,
        reason: String,
    },

    #[display(fmt = "body length {} overflows a {}-byte header", len, head)]
    HeaderOverflow { len: u64, head: u8 },

    #[display(
        fmt = "body length {} out of range (min {:?}, max {:?})",
        len,
        min,
        max
    )]
    LengthOutOfRange {
        len: u64,
        min: Option<u64>,
        max: Option<u64>,
    },

    #[display(fmt = "truncated: {} bytes needed, {} remaining", needed, remaining)]
    Truncated { needed: u64, remaining: u64 },

    #[display(
        fmt = "body length {} misaligned with element width {:?}",
        len,
        elem_width
    )]
    MisalignedLength { len: u64, elem_width: Option<usize> },

    #[display(
        fmt = "unannotated vector of length {} does not span its {}-byte window",
        len,
        window
    )]
    AmbiguousPrefix { len: u64, window: u64 },

    #[display(fmt = "{} trailing bytes", _0)]
    TrailingBytes(usize),

    #[display(fmt = "value mismatch: {}", _0)]
    ValueMismatch(String),
}
impl std::error::Error for ErrorKind {}

impl ErrorKind {
    pub fn unsupported(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
    pub fn invalid_annotation(annotation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnnotation {
            annotation: annotation.into(),
            reason: reason.into(),
        }
    }
    pub fn truncated(needed: usize, remaining: usize) -> Self {
        Self::Truncated {
            needed: needed as u64,
            remaining: remaining as u64,
        }
    }
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::ValueMismatch(msg.into())
    }
}

/// One step of the path from the top-level value down to where an error occurred.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum PathSegment {
    Field { index: usize, name: &'static str },
    Element(usize),
}
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { index, name } if name.is_empty() => write!(f, ".{index}"),
            Self::Field { name, .. } => write!(f, ".{name}"),
            Self::Element(index) => write!(f, "[{index}]"),
        }
    }
}

/// An [`ErrorKind`], plus the path to the nested field or element that caused it.
///
/// Wrapping never alters the kind; callers may match on [`Error::kind()`]
/// regardless of nesting depth.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    /// Outermost first.
    path: Vec<PathSegment>,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, path: vec![] }
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Prepends the segment of the enclosing container.
    pub fn within(mut self, seg: PathSegment) -> Self {
        self.path.insert(0, seg);
        self
    }
    pub fn within_field(self, index: usize, name: &'static str) -> Self {
        self.within(PathSegment::Field { index, name })
    }
    pub fn within_element(self, index: usize) -> Self {
        self.within(PathSegment::Element(index))
    }

    pub fn map_kind(mut self, f: impl FnOnce(ErrorKind) -> ErrorKind) -> Self {
        self.kind = f(self.kind);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at {}", self.kind, self.path.iter().join(""))
        }
    }
}
impl std::error::Error for Error {}
