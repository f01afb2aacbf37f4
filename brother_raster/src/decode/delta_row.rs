use super::Limits;
use crate::error::RasterError;
use crate::model::{Page, ScanLine};
use crate::source::ByteSource;
use byteorder::{BigEndian, ByteOrder};
use log::trace;

/// Edit count that clears the previous line instead of editing it.
pub const CLEAR_LINE: u8 = 0xff;

/// Reads the extension of a saturated offset or count field.
///
/// Bytes are summed up to and including the first byte that is not `0xff`.
pub fn read_overflow<S: ByteSource + ?Sized>(source: &mut S) -> Result<usize, RasterError> {
    let mut sum = 0usize;
    loop {
        let byte = source.read_byte()?;
        sum = sum.saturating_add(byte as usize);
        if byte != 0xff {
            return Ok(sum);
        }
    }
}

/// Decoder for compression format 1030.
///
/// Every line is a list of edits applied to the previously decoded line, so the
/// decoder keeps that line between blocks. Call [`DeltaRowDecoder::reset`] at each
/// page boundary.
#[derive(Debug, Clone)]
pub struct DeltaRowDecoder {
    line: ScanLine,
    cursor: usize,
    bytes_per_line: usize,
}

impl DeltaRowDecoder {
    pub fn new(limits: &Limits) -> Self {
        Self {
            line: Vec::new(),
            cursor: 0,
            bytes_per_line: limits.bytes_per_line,
        }
    }

    /// The most recently decoded line.
    pub fn line(&self) -> &[u8] {
        &self.line
    }

    pub fn reset(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }

    /// Decodes one block: a big-endian line count followed by that many lines,
    /// each of which is appended to `page`.
    pub fn decode_block<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        page: &mut Page,
    ) -> Result<u16, RasterError> {
        let num_lines = BigEndian::read_u16(&[source.read_byte()?, source.read_byte()?]);
        trace!("decoding block of {} lines", num_lines);
        for _ in 0..num_lines {
            let line = self.decode_line(source)?;
            page.push_line(line.to_vec());
        }
        Ok(num_lines)
    }

    pub fn decode_line<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<&[u8], RasterError> {
        let num_edits = source.read_byte()?;
        if num_edits == CLEAR_LINE {
            self.reset();
        } else {
            self.cursor = 0;
            for _ in 0..num_edits {
                self.decode_edit(source)?;
            }
        }
        Ok(&self.line)
    }

    pub(crate) fn decode_edit<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), RasterError> {
        let cmd = source.read_byte()?;
        if cmd & 0x80 != 0 {
            self.decode_repeat(cmd, source)
        } else {
            self.decode_substitute(cmd, source)
        }
    }

    fn decode_repeat<S: ByteSource + ?Sized>(
        &mut self,
        cmd: u8,
        source: &mut S,
    ) -> Result<(), RasterError> {
        let mut offset = ((cmd >> 5) & 0x03) as usize;
        if offset == 0x03 {
            offset += read_overflow(source)?;
        }
        let mut count = (cmd & 0x1f) as usize;
        if count == 0x1f {
            count += read_overflow(source)?;
        }
        count += 2;
        let value = source.read_byte()?;

        let start = self.advance(offset, count)?;
        self.line[start..self.cursor].fill(value);
        Ok(())
    }

    fn decode_substitute<S: ByteSource + ?Sized>(
        &mut self,
        cmd: u8,
        source: &mut S,
    ) -> Result<(), RasterError> {
        let mut offset = ((cmd >> 3) & 0x0f) as usize;
        if offset == 0x0f {
            offset += read_overflow(source)?;
        }
        let mut count = (cmd & 0x07) as usize;
        if count == 0x07 {
            count += read_overflow(source)?;
        }
        count += 1;

        let start = self.advance(offset, count)?;
        for byte in &mut self.line[start..self.cursor] {
            *byte = source.read_byte()?;
        }
        Ok(())
    }

    /// Skips `offset` bytes and reserves the next `count` bytes for writing,
    /// zero-extending the line as needed. Returns the start of the reserved range.
    fn advance(&mut self, offset: usize, count: usize) -> Result<usize, RasterError> {
        let start = self.cursor.saturating_add(offset);
        let end = start.saturating_add(count);
        if end > self.bytes_per_line {
            return Err(RasterError::LineOverflow {
                limit: self.bytes_per_line,
            });
        }
        if end > self.line.len() {
            self.line.resize(end, 0);
        }
        self.cursor = end;
        Ok(start)
    }
}
