use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Compression formats selected by the `m` parameter of a raster escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum RasterCompression {
    /// Each line is a list of repeat/substitute edits against the previous line.
    DeltaRow = 1030,
}
