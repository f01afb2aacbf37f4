use brother_raster::{model::Page, reader::RasterReader, writer::RasterPageWriter};

/// Copies every page of `reader` to `writer` and returns the pages that were copied.
pub fn roundtrip_raster<RR, RW>(
    mut reader: RR,
    mut writer: RW,
) -> Result<Vec<Page>, Box<dyn std::error::Error>>
where
    RR: RasterReader,
    RW: RasterPageWriter,
    RR::Error: std::error::Error + 'static,
    RW::Error: std::fmt::Debug,
{
    // Fuzz input is mostly malformed, so read errors are an expected outcome.
    // A page that decoded must encode, so write errors abort the run.
    let mut pages = Vec::new();
    while let Some(page) = reader.next_page()? {
        if pages.len() >= 300 {
            return Err("page_count > 300".into());
        }
        writer.write_page(&page).unwrap();
        pages.push(page);
    }
    writer.finish().unwrap();
    Ok(pages)
}
