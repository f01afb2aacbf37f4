//! A crate for decoding the raster payload of Brother laser printer jobs in Rust.
//!
//! The print stream wraps raster data in `ESC * b` escape sequences; the payload
//! uses compression format 1030, where every scan line is a list of edits against
//! the previous one. Pages are separated by form feeds.
//!
//! # Example
//! ## Reading
//! Wrap the input in a `ByteSource` (e.g. `ReadSource` for any `std::io::Read`),
//! create a `BrotherRasterReader` and call `next_page` until it returns `None`.
//!
//! ```rust
//! use brother_raster::{
//!     reader::{brother::BrotherRasterReader, RasterReader},
//!     source::ReadSource,
//!     writer::{pbm::PbmWriter, RasterPageWriter},
//! };
//! use std::io::{BufReader, Cursor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // One block holding one line: a run of four 0xff bytes.
//! let job: &[u8] = b"\x1b*b1030m5W\x00\x01\x01\x82\xff\x0c";
//! let source = ReadSource::new(BufReader::new(Cursor::new(job)));
//! let mut reader = BrotherRasterReader::new(source);
//! let mut page_index = 0;
//! while let Some(page) = reader.next_page()? {
//!     println!(
//!         "Page {}: {}x{} pixels",
//!         page_index,
//!         page.width_pixels(),
//!         page.height()
//!     );
//!     let mut pbm = PbmWriter::new(Vec::new());
//!     pbm.write_page(&page)?;
//!     assert_eq!(pbm.into_inner(), b"P4 32 1\n\xff\xff\xff\xff");
//!     page_index += 1;
//! }
//! assert_eq!(page_index, 1);
//! # Ok(())
//! # }
//! ```
//!
//! As with any byte-at-a-time parser, unbuffered readers such as `File` should be
//! wrapped in a `BufReader`.
//!
//! ## Writing
//! `BrotherRasterWriter` produces a stream that the reader accepts, encoding
//! every line against the previous one.
//!
//! ```rust
//! use brother_raster::{
//!     model::Page,
//!     reader::{brother::BrotherRasterReader, RasterReader},
//!     writer::{brother::BrotherRasterWriter, RasterPageWriter},
//! };
//!
//! let page = Page::from(vec![vec![0x00, 0x00, 0xaa, 0xaa], vec![0x00, 0x00, 0xaa, 0xaa, 0xbb]]);
//! let mut writer = BrotherRasterWriter::new(Vec::new());
//! writer.write_page(&page).unwrap();
//! let job = writer.into_inner();
//!
//! let mut reader = BrotherRasterReader::new(job.as_slice());
//! assert_eq!(reader.next_page().unwrap(), Some(page));
//! assert_eq!(reader.next_page().unwrap(), None);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod model;
pub mod reader;
pub mod source;
pub mod writer;
// Re-export byteorder crate.
pub use byteorder;
