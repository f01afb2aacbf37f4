use crate::model::Page;

pub trait RasterReader {
    type Error;
    /// Reads the next page holding at least one line, or `None` at end of stream.
    fn next_page(&mut self) -> Result<Option<Page>, Self::Error>;
}
