pub mod header;
pub mod json;
pub mod reader;
pub mod writer;

pub use json::WavJson;
pub use reader::{WavHeaderInfo, WavReader};
pub use writer::WavWriter;
