mod sequence;
pub use sequence::{Command, RasterSequence, ESC, FORM_FEED, RASTER_INTRODUCER};

use crate::decode::{BlockReader, DeltaRowDecoder, Limits};
use crate::error::RasterError;
use crate::model::{Page, RasterCompression};
use crate::reader::RasterReader;
use crate::source::ByteSource;
use log::{debug, trace, warn};
use num_enum::TryFromPrimitive;

/// Extracts the pages of a Brother print job.
///
/// Raster data travels in `ESC * b` sequences: the `m` parameter selects the
/// compression and the `w` parameter carries a block of N payload bytes.
/// Form feeds separate pages, every other byte is skipped.
pub struct BrotherRasterReader<S> {
    source: S,
    decoder: DeltaRowDecoder,
    finished: bool,
}

impl<S> BrotherRasterReader<S>
where
    S: ByteSource,
{
    pub fn new(source: S) -> Self {
        Self::new_with_limits(source, Limits::default())
    }

    pub fn new_with_limits(source: S, limits: Limits) -> Self {
        Self {
            source,
            decoder: DeltaRowDecoder::new(&limits),
            finished: false,
        }
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads up to the next form feed or the end of the stream. The flag tells
    /// whether the stream has ended.
    fn read_page(&mut self) -> Result<(Page, bool), RasterError> {
        let mut page = Page::new();
        let mut sequence = RasterSequence::default();
        let mut format = 0;
        self.decoder.reset();

        while let Some(byte) = self.source.next_byte()? {
            match byte {
                FORM_FEED => return Ok((page, false)),
                ESC => {
                    let introducer = [self.source.read_byte()?, self.source.read_byte()?];
                    if introducer == RASTER_INTRODUCER {
                        sequence.begin();
                    }
                }
                _ => match sequence.feed(byte) {
                    Command::SelectCompression(selected) => format = selected,
                    Command::TransferRasterData(num_bytes) => {
                        self.read_block(format, num_bytes, &mut page)?
                    }
                    Command::None => {}
                },
            }
        }
        Ok((page, true))
    }

    fn read_block(
        &mut self,
        format: u32,
        num_bytes: u32,
        page: &mut Page,
    ) -> Result<(), RasterError> {
        if num_bytes == 0 {
            trace!("skipping empty block");
            return Ok(());
        }
        let compression = RasterCompression::try_from_primitive(format)?;
        let mut block = BlockReader::new(&mut self.source, num_bytes as u64);
        match compression {
            RasterCompression::DeltaRow => {
                self.decoder.decode_block(&mut block, page)?;
            }
        }
        let unread = block.bytes_remaining();
        if unread > 0 {
            warn!("{} unread bytes in block", unread);
            block.consume()?;
        }
        Ok(())
    }
}

impl<S> RasterReader for BrotherRasterReader<S>
where
    S: ByteSource,
{
    type Error = RasterError;

    fn next_page(&mut self) -> Result<Option<Page>, RasterError> {
        while !self.finished {
            let (page, end_of_stream) = self.read_page()?;
            self.finished = end_of_stream;
            if !page.is_empty() {
                debug!(
                    "page of {}x{} pixels",
                    page.width_pixels(),
                    page.height()
                );
                return Ok(Some(page));
            }
        }
        Ok(None)
    }
}

/// Yields pages until the end of the stream or the first error.
impl<S> Iterator for BrotherRasterReader<S>
where
    S: ByteSource,
{
    type Item = Result<Page, RasterError>;

    fn next(&mut self) -> Option<Self::Item> {
        match RasterReader::next_page(self) {
            Ok(page) => page.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
