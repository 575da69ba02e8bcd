use crate::error::TableError;
use std::io::{BufRead, Read};

/// One raw line as read from the input stream, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    bytes: Vec<u8>,
}

impl RawInput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Reads a single line into a growable buffer that never exceeds
/// `max_line_bytes + 1` bytes.
#[derive(Debug, Clone, Copy)]
pub struct LineReader {
    max_line_bytes: u64,
}

impl LineReader {
    pub fn new(max_line_bytes: u64) -> Self {
        Self { max_line_bytes }
    }

    /// A closed stream yields an empty `RawInput`; a line longer than the
    /// cap fails with `InputTooLong` without reading the remainder.
    pub fn read_line<R: BufRead>(&self, mut input: R) -> Result<RawInput, TableError> {
        let window = self.max_line_bytes.saturating_add(1);
        let mut bytes = Vec::new();
        input.by_ref().take(window).read_until(b'\n', &mut bytes)?;

        let terminated = bytes.last() == Some(&b'\n');
        if !terminated && bytes.len() as u64 > self.max_line_bytes {
            return Err(TableError::InputTooLong {
                limit: self.max_line_bytes,
            });
        }
        Ok(RawInput { bytes })
    }
}
