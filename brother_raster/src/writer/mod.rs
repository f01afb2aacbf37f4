pub mod brother;
mod interface;
pub mod pbm;
pub use interface::RasterPageWriter;
