mod delta_row;
mod edit;
pub use delta_row::{DeltaRowEncoder, MAX_EDITS};
pub use edit::{write_overflow, Edit};
