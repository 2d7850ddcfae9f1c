//! WAV file writer

use super::header::WavHeader;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Encodes ordered sample segments into a mono 16-bit PCM WAV file
pub struct WavWriter {
    sample_rate: u32,
}

impl WavWriter {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Encode segments into a complete WAV byte stream.
    ///
    /// Segments are concatenated in order; the ordering is the song's
    /// timeline and is never rearranged.
    pub fn encode(&self, segments: &[Vec<f32>]) -> Vec<u8> {
        let sample_total: usize = segments.iter().map(Vec::len).sum();
        let data_size = (sample_total * 2) as u32;

        let mut bytes = Vec::with_capacity(super::header::WAV_HEADER_SIZE + sample_total * 2);
        bytes.extend_from_slice(WavHeader::new(self.sample_rate, data_size).as_bytes());

        for segment in segments {
            for &sample in segment {
                bytes.extend_from_slice(&quantize(sample).to_le_bytes());
            }
        }

        bytes
    }

    /// Encode segments and write them to `path`
    pub fn write(&self, path: &Path, segments: &[Vec<f32>]) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&self.encode(segments))?;
        file.flush()?;
        Ok(())
    }
}

/// Convert a sample to signed 16-bit.
///
/// Input is clamped to [-1, 1] before scaling, so out-of-range amplitude
/// (volume above 1, uncompensated chord stacking) saturates at +/-32767
/// instead of wrapping.
fn quantize(sample: f32) -> i16 {
    (f64::from(sample).clamp(-1.0, 1.0) * 32767.0).round() as i16
}
