/// The largest line, in bytes, a decoded page may contain by default.
pub const MAX_LINE_SIZE: usize = 2000;

#[derive(Clone, Debug)]
pub struct Limits {
    // The maximum number of bytes per decoded line, the line buffer never grows beyond it.
    pub bytes_per_line: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            bytes_per_line: MAX_LINE_SIZE,
        }
    }
}
