use super::Edit;
use crate::decode::{Limits, CLEAR_LINE};
use crate::error::RasterError;
use crate::model::ScanLine;
use byteorder::{BigEndian, WriteBytesExt};
use std::io;

/// The most edits one line can carry, the next count value is the clear sentinel.
pub const MAX_EDITS: usize = CLEAR_LINE as usize - 1;

/// Encoder for compression format 1030, the counterpart of
/// [`crate::decode::DeltaRowDecoder`].
///
/// Decoding the output reproduces every line up to trailing zero bytes, which
/// do not change the rendered page.
#[derive(Debug, Clone)]
pub struct DeltaRowEncoder {
    previous: ScanLine,
    bytes_per_line: usize,
}

impl DeltaRowEncoder {
    pub fn new(limits: &Limits) -> Self {
        Self {
            previous: Vec::new(),
            bytes_per_line: limits.bytes_per_line,
        }
    }

    /// The line as the decoder will hold it after the last encoded line.
    pub fn previous_line(&self) -> &[u8] {
        &self.previous
    }

    pub fn reset(&mut self) {
        self.previous.clear();
    }

    pub fn encode_block(&mut self, lines: &[ScanLine], out: &mut Vec<u8>) -> Result<(), RasterError> {
        let num_lines = u16::try_from(lines.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "too many lines for one block")
        })?;
        out.write_u16::<BigEndian>(num_lines)?;
        for line in lines {
            self.encode_line(line, out)?;
        }
        Ok(())
    }

    pub fn encode_line(&mut self, line: &[u8], out: &mut Vec<u8>) -> Result<(), RasterError> {
        if line.len() > self.bytes_per_line {
            return Err(RasterError::LineOverflow {
                limit: self.bytes_per_line,
            });
        }
        if line.iter().all(|&byte| byte == 0) {
            if self.previous.is_empty() {
                out.push(0);
            } else {
                out.push(CLEAR_LINE);
                self.previous.clear();
            }
            return Ok(());
        }

        let len = self.previous.len().max(line.len());
        let mut old = self.previous.clone();
        old.resize(len, 0);
        let mut new = line.to_vec();
        new.resize(len, 0);

        let (edits, end) = diff(&old, &new);
        out.push(edits.len() as u8);
        for edit in &edits {
            edit.write_to(out);
        }
        new.truncate(self.previous.len().max(end));
        self.previous = new;
        Ok(())
    }
}

/// Computes the edits turning `old` into `new` (both of the same length) and
/// the position of the cursor after the last edit.
fn diff(old: &[u8], new: &[u8]) -> (Vec<Edit>, usize) {
    let mut edits = Vec::new();
    let mut cursor = 0;
    let mut i = 0;
    while i < new.len() {
        if old[i] == new[i] {
            i += 1;
            continue;
        }
        let start = i;
        while i < new.len() && old[i] != new[i] {
            i += 1;
        }
        let end = i;

        let mut literal = start;
        let mut k = start;
        while k < end {
            let value = new[k];
            let run = new[k..end].iter().take_while(|&&byte| byte == value).count();
            if run >= 2 {
                if literal < k {
                    edits.push(Edit::Substitute {
                        offset: literal - cursor,
                        data: new[literal..k].to_vec(),
                    });
                    cursor = k;
                }
                edits.push(Edit::Repeat {
                    offset: k - cursor,
                    count: run,
                    value,
                });
                cursor = k + run;
                literal = cursor;
            }
            k += run;
        }
        if literal < end {
            edits.push(Edit::Substitute {
                offset: literal - cursor,
                data: new[literal..end].to_vec(),
            });
            cursor = end;
        }
    }

    if edits.len() > MAX_EDITS {
        // the first offset is relative to the start of the line
        let first = edits[0].offset();
        edits = vec![Edit::Substitute {
            offset: first,
            data: new[first..cursor].to_vec(),
        }];
    }
    (edits, cursor)
}
