use arbitrary::Arbitrary;
use brother_raster::decode::{DeltaRowDecoder, Limits, MAX_LINE_SIZE};
use brother_raster::encode::DeltaRowEncoder;
use brother_raster::model::Page;
use honggfuzz::fuzz;

#[derive(Clone, Debug, Arbitrary)]
pub struct DataInput {
    pub lines: Vec<Vec<u8>>,
}

fn main() {
    loop {
        fuzz!(|input: DataInput| {
            let lines: Vec<Vec<u8>> = input
                .lines
                .into_iter()
                .take(u16::MAX as usize)
                .map(|mut line| {
                    line.truncate(MAX_LINE_SIZE);
                    line
                })
                .collect();

            let mut encoded = Vec::new();
            DeltaRowEncoder::new(&Limits::default())
                .encode_block(&lines, &mut encoded)
                .unwrap();

            let mut source = encoded.as_slice();
            let mut decoded = Page::new();
            DeltaRowDecoder::new(&Limits::default())
                .decode_block(&mut source, &mut decoded)
                .unwrap();
            assert!(source.is_empty());
            assert_eq!(decoded.ink(), Page::from(lines).ink());
        });
    }
}
