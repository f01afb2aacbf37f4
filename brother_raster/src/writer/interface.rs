use crate::model::Page;

pub trait RasterPageWriter: Sized {
    type Error;
    fn write_page(&mut self, page: &Page) -> Result<(), Self::Error>;
    /// Flushes everything written so far.
    fn finish(self) -> Result<(), Self::Error>;
}
