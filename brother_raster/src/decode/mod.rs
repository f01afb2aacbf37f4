mod block;
mod delta_row;
mod limits;
pub use block::BlockReader;
pub use delta_row::{read_overflow, DeltaRowDecoder, CLEAR_LINE};
pub use limits::{Limits, MAX_LINE_SIZE};
