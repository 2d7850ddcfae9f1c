//! JSON serialization types for WAV data

use super::reader::WavHeaderInfo;
use serde::Serialize;

/// Top-level JSON summary of a WAV file
#[derive(Debug, Clone, Serialize)]
pub struct WavJson {
    /// Audio format name ("pcm")
    pub format: String,
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Number of sample frames
    pub sample_count: usize,
    /// Playback duration in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value, normalized to [0, 1]
    pub peak_amplitude: f64,
}

impl WavJson {
    pub fn new(header: &WavHeaderInfo, samples: &[i16]) -> Self {
        let peak = samples
            .iter()
            .map(|&s| (s as i32).unsigned_abs())
            .max()
            .unwrap_or(0);

        Self {
            format: "pcm".to_string(),
            channels: header.channels,
            sample_rate: header.sample_rate,
            bits_per_sample: header.bits_per_sample,
            sample_count: header.sample_count(),
            duration_seconds: header.duration_seconds(),
            peak_amplitude: peak as f64 / 32767.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::{WavReader, WavWriter};

    #[test]
    fn test_summary_fields() {
        let writer = WavWriter::new(44100);
        let bytes = writer.encode(&[vec![0.5f32; 44100]]);

        let mut reader = WavReader::new(&bytes);
        let header = reader.parse_header().unwrap();
        let samples = reader.samples(&header).unwrap();
        let json = WavJson::new(&header, &samples);

        assert_eq!(json.format, "pcm");
        assert_eq!(json.channels, 1);
        assert_eq!(json.sample_rate, 44100);
        assert_eq!(json.bits_per_sample, 16);
        assert_eq!(json.sample_count, 44100);
        assert!((json.duration_seconds - 1.0).abs() < 1e-9);
        assert!((json.peak_amplitude - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_serializes_to_json() {
        let writer = WavWriter::new(44100);
        let bytes = writer.encode(&[vec![0.0f32; 10]]);

        let mut reader = WavReader::new(&bytes);
        let header = reader.parse_header().unwrap();
        let samples = reader.samples(&header).unwrap();
        let json = serde_json::to_string(&WavJson::new(&header, &samples)).unwrap();

        assert!(json.contains("\"sample_rate\":44100"));
        assert!(json.contains("\"peak_amplitude\":0.0"));
    }
}
