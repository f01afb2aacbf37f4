use crate::error::RasterError;
use byteorder::ReadBytesExt;
use std::io::{self, Read};

/// A stream of bytes consumed strictly left to right.
pub trait ByteSource {
    /// Reads the next byte, or `None` once the stream is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>, RasterError>;

    /// Reads a byte that must be present.
    fn read_byte(&mut self) -> Result<u8, RasterError> {
        self.next_byte()?.ok_or(RasterError::UnexpectedEof)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Result<Option<u8>, RasterError> {
        (**self).next_byte()
    }
}

impl ByteSource for &[u8] {
    fn next_byte(&mut self) -> Result<Option<u8>, RasterError> {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// Reads are issued one byte at a time, so the reader should be buffered.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, RasterError> {
        match self.reader.read_u8() {
            Ok(byte) => Ok(Some(byte)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
