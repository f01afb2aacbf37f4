use super::RasterPageWriter;
use crate::error::RasterError;
use crate::model::Page;
use std::io::Write;

/// Writes pages as binary portable bitmaps (`P4`).
///
/// Each page becomes one image; a set bit is black.
pub struct PbmWriter<W> {
    writer: W,
}

impl<W: Write> PbmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RasterPageWriter for PbmWriter<W> {
    type Error = RasterError;

    fn write_page(&mut self, page: &Page) -> Result<(), RasterError> {
        writeln!(self.writer, "P4 {} {}", page.width_pixels(), page.height())?;
        for row in page.padded_rows() {
            self.writer.write_all(&row)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(), RasterError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PbmWriter;
    use crate::model::Page;
    use crate::writer::RasterPageWriter;

    #[test]
    fn test_write_page() {
        let page = Page::from(vec![vec![0xf0], vec![], vec![0x01, 0x80]]);
        let mut writer = PbmWriter::new(Vec::new());
        writer.write_page(&page).unwrap();
        let mut expected = b"P4 16 3\n".to_vec();
        expected.extend([0xf0, 0x00, 0x00, 0x00, 0x01, 0x80]);
        assert_eq!(writer.into_inner(), expected);
    }

    #[test]
    fn test_write_blank_page() {
        let page = Page::from(vec![vec![], vec![]]);
        let mut writer = PbmWriter::new(Vec::new());
        writer.write_page(&page).unwrap();
        assert_eq!(writer.into_inner(), b"P4 0 2\n");
    }
}
