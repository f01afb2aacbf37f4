mod roundtrip;
pub use roundtrip::*;
