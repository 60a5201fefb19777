use crate::{ErrorKind, Shape};
use std::fmt;
use std::str::FromStr;


pub const MAX_HEAD: u8 = 8;

/// Configuration of a variable-length vector.
///
/// #### Keys
///
/// `head`:
/// - The width in bytes of the length prefix, `1..=8`.
/// - `None` means the minimal width that represents the body length,
///   computed per value at encode time.
///
/// `min` and `max`:
/// - Bounds of the body's length in bytes, both inclusive.
/// - `None` means unbounded (up to the prefix capacity for `max`).
///
/// The textual form is a comma-separated list of `key=value`, eg `"head=2,min=2"`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct VectorConfig {
    head: Option<u8>,
    min: Option<u64>,
    max: Option<u64>,
}

/* Builder. */
impl VectorConfig {
    pub const fn new() -> Self {
        Self {
            head: None,
            min: None,
            max: None,
        }
    }
    pub fn with_head(mut self, head: u8) -> Result<Self, ErrorKind> {
        if head == 0 || head > MAX_HEAD {
            return Err(ErrorKind::invalid_annotation(
                format!("head={head}"),
                format!("head must be within 1..={MAX_HEAD}"),
            ));
        }
        self.head = Some(head);
        Ok(self)
    }
    pub fn with_min(mut self, min: u64) -> Result<Self, ErrorKind> {
        self.min = Some(min);
        self.validate_bounds()?;
        Ok(self)
    }
    pub fn with_max(mut self, max: u64) -> Result<Self, ErrorKind> {
        self.max = Some(max);
        self.validate_bounds()?;
        Ok(self)
    }

    fn validate_bounds(&self) -> Result<(), ErrorKind> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ErrorKind::invalid_annotation(
                self.to_string(),
                "min exceeds max",
            )),
            _ => Ok(()),
        }
    }
}

/* Accessors. */
impl VectorConfig {
    pub fn head(&self) -> Option<u8> {
        self.head
    }
    pub fn min(&self) -> Option<u64> {
        self.min
    }
    pub fn max(&self) -> Option<u64> {
        self.max
    }
}

/* Length arithmetic. */
impl VectorConfig {
    /// The effective prefix width for a body of `len` bytes.
    pub fn head_for(&self, len: u64) -> u8 {
        self.head.unwrap_or_else(|| minimal_head(len))
    }

    /// Checks `len` against the declared head, then against the declared bounds.
    pub fn check_encode_len(&self, len: u64) -> Result<(), ErrorKind> {
        if let Some(head) = self.head {
            if len > head_capacity(head) {
                return Err(ErrorKind::HeaderOverflow { len, head });
            }
        }
        self.check_bounds(len)
    }

    pub fn check_bounds(&self, len: u64) -> Result<(), ErrorKind> {
        let below = self.min.map_or(false, |min| len < min);
        let above = self.max.map_or(false, |max| len > max);
        if below || above {
            return Err(ErrorKind::LengthOutOfRange {
                len,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// The largest body length a prefix of `head` bytes can represent.
pub fn head_capacity(head: u8) -> u64 {
    if head >= MAX_HEAD {
        u64::MAX
    } else {
        (1u64 << (8 * head as u32)) - 1
    }
}

/// The fewest bytes that represent `len`, and never fewer than one.
pub fn minimal_head(len: u64) -> u8 {
    let bits = u64::BITS - len.leading_zeros();
    let bytes = (bits + 7) / 8;
    bytes.max(1) as u8
}

/* De/Serialization of the textual form. */
impl FromStr for VectorConfig {
    type Err = ErrorKind;

    fn from_str(raw: &str) -> Result<Self, ErrorKind> {
        let invalid = |reason: String| ErrorKind::invalid_annotation(raw, reason);

        let mut cfg = VectorConfig::new();
        if raw.trim().is_empty() {
            return Ok(cfg);
        }

        for item in raw.split(',') {
            let (key, val) = item
                .split_once('=')
                .ok_or_else(|| invalid(format!("expected key=value, found {:?}", item)))?;
            let (key, val) = (key.trim(), val.trim());
            let int = val
                .parse::<u64>()
                .map_err(|e| invalid(format!("{key}: {e}")))?;

            let slot_taken = match key {
                "head" => cfg.head.is_some(),
                "min" => cfg.min.is_some(),
                "max" => cfg.max.is_some(),
                _ => return Err(invalid(format!("unknown key {:?}", key))),
            };
            if slot_taken {
                return Err(invalid(format!("duplicate key {:?}", key)));
            }

            cfg = match key {
                "head" => {
                    let head = u8::try_from(int)
                        .ok()
                        .filter(|head| (1..=MAX_HEAD).contains(head))
                        .ok_or_else(|| invalid(format!("head must be within 1..={MAX_HEAD}")))?;
                    cfg.with_head(head)
                }
                "min" => cfg.with_min(int),
                _ => cfg.with_max(int),
            }
            .map_err(|e| match e {
                ErrorKind::InvalidAnnotation { reason, .. } => invalid(reason),
                e => e,
            })?;
        }

        Ok(cfg)
    }
}
impl fmt::Display for VectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = [("head", self.head.map(u64::from)), ("min", self.min), ("max", self.max)];
        let mut first = true;
        for (key, val) in items {
            if let Some(val) = val {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, "{key}={val}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The vector annotation of a record field, as declared.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Annotation {
    None,
    Raw(&'static str),
    Config(VectorConfig),
}
impl From<Option<&'static str>> for Annotation {
    fn from(raw: Option<&'static str>) -> Self {
        match raw {
            None => Self::None,
            Some(raw) => Self::Raw(raw),
        }
    }
}
impl From<VectorConfig> for Annotation {
    fn from(cfg: VectorConfig) -> Self {
        Self::Config(cfg)
    }
}

impl Annotation {
    /// Applies this annotation to the classified shape of the annotated field.
    ///
    /// Only a [`Shape::VariableSequence`] may be annotated.
    pub fn resolve(&self, shape: Shape) -> Result<Shape, ErrorKind> {
        let cfg = match self {
            Self::None => return Ok(shape),
            Self::Raw(raw) => VectorConfig::from_str(raw)?,
            Self::Config(cfg) => {
                cfg.validate_bounds()?;
                *cfg
            }
        };
        match shape {
            Shape::VariableSequence { elem, .. } => Ok(Shape::VariableSequence { elem, cfg }),
            other => Err(ErrorKind::invalid_annotation(
                cfg.to_string(),
                format!("only vectors may be annotated, found {}", other.kind_name()),
            )),
        }
    }
}
