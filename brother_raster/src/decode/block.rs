use crate::error::RasterError;
use crate::source::ByteSource;

/// A window of exactly `num_bytes` bytes of the underlying source.
///
/// Reading beyond the window fails with [`RasterError::ReadPastBlockEnd`]
/// instead of touching the bytes that follow the block.
pub struct BlockReader<S> {
    source: S,
    bytes_remaining: u64,
}

impl<S: ByteSource> BlockReader<S> {
    pub fn new(source: S, num_bytes: u64) -> Self {
        Self {
            source,
            bytes_remaining: num_bytes,
        }
    }

    pub fn bytes_remaining(&self) -> u64 {
        self.bytes_remaining
    }

    /// Discards the unread rest of the block and returns how many bytes were skipped.
    pub fn consume(mut self) -> Result<u64, RasterError> {
        let skipped = self.bytes_remaining;
        while self.bytes_remaining > 0 {
            self.source.read_byte()?;
            self.bytes_remaining -= 1;
        }
        Ok(skipped)
    }
}

impl<S: ByteSource> ByteSource for BlockReader<S> {
    fn next_byte(&mut self) -> Result<Option<u8>, RasterError> {
        if self.bytes_remaining == 0 {
            return Err(RasterError::ReadPastBlockEnd);
        }
        self.bytes_remaining -= 1;
        self.source.read_byte().map(Some)
    }
}
