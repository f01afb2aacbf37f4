use brother_raster::{
    reader::{brother::BrotherRasterReader, RasterReader},
    writer::brother::BrotherRasterWriter,
};
use brother_raster_fuzz::roundtrip_raster;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|input: &[u8]| {
            let mut output = Vec::new();
            let reader = BrotherRasterReader::new(input);
            let writer = BrotherRasterWriter::new(&mut output);
            let Ok(pages) = roundtrip_raster(reader, writer) else {
                return;
            };

            let mut reader = BrotherRasterReader::new(output.as_slice());
            for page in &pages {
                let decoded = reader.next_page().unwrap().unwrap();
                assert_eq!(decoded.height(), page.height());
                assert_eq!(decoded.ink(), page.ink());
            }
            assert!(reader.next_page().unwrap().is_none());
        });
    }
}
