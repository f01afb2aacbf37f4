use crate::model::RasterCompression;
use num_enum::TryFromPrimitiveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unexpected EOF")]
    UnexpectedEof,
    #[error("Attempt to read data past end of block")]
    ReadPastBlockEnd,
    #[error("Line longer than {limit} bytes, aborting")]
    LineOverflow { limit: usize },
    #[error("Unsupported raster compression type {}", .0.number)]
    UnsupportedCompression(#[from] TryFromPrimitiveError<RasterCompression>),
}
