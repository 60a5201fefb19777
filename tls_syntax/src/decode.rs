use crate::{head_capacity, ErrorKind, Result, Shape, Value, VectorConfig, MAX_HEAD};

/// Deserializes [`Value`]s according to their [`Shape`]s, from a cursor over a byte buffer.
///
/// Nested decodes share the cursor. A vector's body is decoded by a child [`Decoder`]
/// over exactly the body's bytes, so no element can read past its vector.
#[derive(Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails if any input is left unread.
    pub fn finish(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(ErrorKind::TrailingBytes(extra).into()),
        }
    }

    /// Decodes one value of `shape`.
    ///
    /// On failure, the cursor is restored to its position before the call.
    pub fn decode(&mut self, shape: &Shape) -> Result<Value> {
        let pos_before = self.pos;
        let res = self.decode_(shape);
        if res.is_err() {
            self.pos = pos_before;
        }
        res
    }

    fn decode_(&mut self, shape: &Shape) -> Result<Value> {
        match shape {
            Shape::FixedInt { width } => Ok(Value::Int(self.read_uint(*width)?)),
            Shape::FixedSequence { elem, count } => self.read_fixed_seq(elem, *count),
            Shape::VariableSequence { elem, cfg } => self.read_vector(elem, cfg),
            Shape::Record { fields, .. } => {
                let mut members = Vec::with_capacity(fields.len());
                for (index, field) in fields.iter().enumerate() {
                    let member = self
                        .decode_(&field.shape)
                        .map_err(|e| e.within_field(index, field.name))?;
                    members.push(member);
                }
                Ok(Value::Record(members))
            }
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ErrorKind> {
        if self.remaining() < n {
            return Err(ErrorKind::truncated(n, self.remaining()));
        }
        let s = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    fn read_uint(&mut self, width: u8) -> Result<u64, ErrorKind> {
        let b = self.take(width as usize)?;
        Ok(b.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
    }

    fn read_fixed_seq(&mut self, elem: &Shape, count: usize) -> Result<Value> {
        if let Some(needed) = elem.fixed_width().and_then(|w| w.checked_mul(count)) {
            if self.remaining() < needed {
                return Err(ErrorKind::truncated(needed, self.remaining()).into());
            }
        }

        let mut members = Vec::with_capacity(count.min(self.remaining()));
        for i in 0..count {
            let member = self.decode_(elem).map_err(|e| e.within_element(i))?;
            members.push(member);
        }
        Ok(Value::Seq(members))
    }

    fn read_vector(&mut self, elem: &Shape, cfg: &VectorConfig) -> Result<Value> {
        /* head */
        let head = match cfg.head() {
            Some(head) => head,
            None => self.infer_head()?,
        };
        let body_len = self.read_uint(head)?;
        cfg.check_bounds(body_len)?;

        /* body_len vs the remaining input, before anything is allocated for the body */
        let remaining = self.remaining();
        let body_len_usize = usize::try_from(body_len)
            .ok()
            .filter(|len| *len <= remaining)
            .ok_or_else(|| ErrorKind::Truncated {
                needed: body_len,
                remaining: remaining as u64,
            })?;
        if cfg.head().is_none() && body_len_usize < remaining {
            return Err(ErrorKind::AmbiguousPrefix {
                len: body_len,
                window: remaining as u64,
            }
            .into());
        }

        /* body_len vs the element width */
        let elem_width = elem.fixed_width();
        let misaligned = ErrorKind::MisalignedLength {
            len: body_len,
            elem_width,
        };
        let capacity = match elem_width {
            Some(0) if body_len_usize > 0 => return Err(misaligned.into()),
            Some(0) => 0,
            Some(w) if body_len_usize % w != 0 => return Err(misaligned.into()),
            Some(w) => body_len_usize / w,
            None => 0,
        };

        /* body */
        let mut window = Decoder::new(self.take(body_len_usize)?);
        let mut members = Vec::with_capacity(capacity);
        while !window.is_empty() {
            let i = members.len();
            let member = window.decode_(elem).map_err(|e| {
                e.map_kind(|kind| match kind {
                    ErrorKind::Truncated { .. } => misaligned.clone(),
                    kind => kind,
                })
                .within_element(i)
            })?;
            members.push(member);
        }
        Ok(Value::Seq(members))
    }

    /// The prefix width of an unannotated vector, derived from the size of the current window:
    /// the smallest width whose capacity covers the rest of the window.
    /// This recovers the encoder's minimal width whenever the vector ends its window.
    fn infer_head(&self) -> Result<u8, ErrorKind> {
        let remaining = self.remaining() as u64;
        for head in 1..=MAX_HEAD {
            let head_len = u64::from(head);
            if remaining < head_len {
                break;
            }
            if remaining - head_len <= head_capacity(head) {
                return Ok(head);
            }
        }
        Err(ErrorKind::truncated(1, self.remaining()))
    }
}
