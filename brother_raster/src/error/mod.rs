mod raster;
pub use raster::RasterError;
