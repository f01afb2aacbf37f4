pub mod brother;
mod interface;
pub use interface::RasterReader;
