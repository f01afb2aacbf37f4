use super::RasterPageWriter;
use crate::decode::Limits;
use crate::encode::DeltaRowEncoder;
use crate::error::RasterError;
use crate::model::{Page, RasterCompression};
use crate::reader::brother::FORM_FEED;
use std::io::Write;

/// Number of lines packed into one raster block.
pub const LINES_PER_BLOCK: usize = 128;

/// Writes pages as a Brother print stream that [`crate::reader::brother::BrotherRasterReader`]
/// reads back.
///
/// Every block is sent as `ESC * b 1030 m <N> W` followed by N payload bytes,
/// every page ends with a form feed.
pub struct BrotherRasterWriter<W> {
    writer: W,
    encoder: DeltaRowEncoder,
    buffer: Vec<u8>,
}

impl<W: Write> BrotherRasterWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::new_with_limits(writer, Limits::default())
    }

    pub fn new_with_limits(writer: W, limits: Limits) -> Self {
        Self {
            writer,
            encoder: DeltaRowEncoder::new(&limits),
            buffer: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RasterPageWriter for BrotherRasterWriter<W> {
    type Error = RasterError;

    fn write_page(&mut self, page: &Page) -> Result<(), RasterError> {
        self.encoder.reset();
        for lines in page.lines().chunks(LINES_PER_BLOCK) {
            self.buffer.clear();
            self.encoder.encode_block(lines, &mut self.buffer)?;
            write!(
                self.writer,
                "\x1b*b{}m{}W",
                u32::from(RasterCompression::DeltaRow),
                self.buffer.len()
            )?;
            self.writer.write_all(&self.buffer)?;
        }
        self.writer.write_all(&[FORM_FEED])?;
        Ok(())
    }

    fn finish(mut self) -> Result<(), RasterError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BrotherRasterWriter, LINES_PER_BLOCK};
    use crate::model::Page;
    use crate::reader::brother::BrotherRasterReader;
    use crate::writer::RasterPageWriter;

    #[test]
    fn test_write_page() {
        let page = Page::from(vec![vec![0xa5]]);
        let mut writer = BrotherRasterWriter::new(Vec::new());
        writer.write_page(&page).unwrap();
        let mut expected = b"\x1b*b1030m5W".to_vec();
        expected.extend([0x00, 0x01, 0x01, 0x00, 0xa5, 0x0c]);
        assert_eq!(writer.into_inner(), expected);
    }

    #[test]
    fn test_pages_read_back() {
        let first: Vec<Vec<u8>> = (0..LINES_PER_BLOCK * 2 + 5)
            .map(|i| vec![0x00, (i % 251) as u8, 0xff, 0xff, 0xff])
            .collect();
        let second = vec![vec![0x80; 40], vec![], vec![0x01]];
        let pages = vec![Page::from(first), Page::from(second)];

        let mut writer = BrotherRasterWriter::new(Vec::new());
        for page in &pages {
            writer.write_page(page).unwrap();
        }
        let stream = writer.into_inner();

        let decoded: Vec<Page> = BrotherRasterReader::new(stream.as_slice())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(decoded.len(), 2);
        for (decoded, page) in decoded.iter().zip(&pages) {
            assert_eq!(decoded.height(), page.height());
            assert!(decoded.padded_rows().eq(page.padded_rows()));
        }
    }
}
