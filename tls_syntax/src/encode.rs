use crate::{ErrorKind, Result, Shape, Value, VectorConfig};

/// Serializes [`Value`]s according to their [`Shape`]s, appending to a byte buffer.
#[derive(Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl From<Vec<u8>> for Encoder {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf }
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.buf.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Appends the encoding of `value`.
    ///
    /// On failure, the buffer is restored to its length before the call.
    pub fn encode(&mut self, value: &Value, shape: &Shape) -> Result<()> {
        let len_before = self.buf.len();
        let res = self.encode_(value, shape);
        if res.is_err() {
            self.buf.truncate(len_before);
        }
        res
    }

    fn encode_(&mut self, value: &Value, shape: &Shape) -> Result<()> {
        match (shape, value) {
            (Shape::FixedInt { width }, Value::Int(int)) => self.write_int(*int, *width),
            (Shape::FixedSequence { elem, count }, Value::Seq(members)) => {
                if members.len() != *count {
                    return Err(ErrorKind::mismatch(format!(
                        "expected {count} elements, found {}",
                        members.len()
                    ))
                    .into());
                }
                self.write_elems(members, elem)
            }
            (Shape::VariableSequence { elem, cfg }, Value::Seq(members)) => {
                self.write_vector(members, elem, cfg)
            }
            (Shape::Record { fields, .. }, Value::Record(members)) => {
                if members.len() != fields.len() {
                    return Err(ErrorKind::mismatch(format!(
                        "expected {} fields, found {}",
                        fields.len(),
                        members.len()
                    ))
                    .into());
                }
                for (index, (field, member)) in fields.iter().zip(members).enumerate() {
                    self.encode_(member, &field.shape)
                        .map_err(|e| e.within_field(index, field.name))?;
                }
                Ok(())
            }
            (shape, value) => Err(ErrorKind::mismatch(format!(
                "cannot encode a {} as a {}",
                value.kind_name(),
                shape.kind_name()
            ))
            .into()),
        }
    }

    fn write_int(&mut self, int: u64, width: u8) -> Result<()> {
        let width = width as usize;
        let be = int.to_be_bytes();
        let (overflow, kept) = be.split_at(be.len() - width);
        if overflow.iter().any(|b| *b != 0) {
            return Err(ErrorKind::mismatch(format!(
                "{int:#x} does not fit {width} bytes"
            ))
            .into());
        }
        self.buf.extend_from_slice(kept);
        Ok(())
    }

    fn write_elems(&mut self, members: &[Value], elem: &Shape) -> Result<()> {
        for (i, member) in members.iter().enumerate() {
            self.encode_(member, elem).map_err(|e| e.within_element(i))?;
        }
        Ok(())
    }

    fn write_vector(&mut self, members: &[Value], elem: &Shape, cfg: &VectorConfig) -> Result<()> {
        /* body */
        let mut body = Encoder::new();
        body.write_elems(members, elem)?;
        let body_len = body.len() as u64;

        /* head */
        cfg.check_encode_len(body_len)?;
        let head = cfg.head_for(body_len);
        self.write_int(body_len, head)?;

        self.buf.extend_from_slice(&body.buf);
        Ok(())
    }
}
