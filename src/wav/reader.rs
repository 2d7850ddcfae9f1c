//! WAV file reader and parser

use super::header::{offset, FORMAT_PCM, WAV_HEADER_SIZE};
use crate::error::{Error, Result};

/// Parsed WAV header information
#[derive(Debug, Clone, Default)]
pub struct WavHeaderInfo {
    pub riff_size: u32,
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeaderInfo {
    /// Number of sample frames in the data payload
    pub fn sample_count(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Playback duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count() as f64 / self.sample_rate as f64
    }
}

/// WAV file reader
pub struct WavReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WavReader<'a> {
    /// Create a new reader from raw WAV data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read a single byte
    fn read_u8(&mut self) -> Result<u8> {
        if self.pos >= self.data.len() {
            return Err(Error::WavParse("Unexpected end of data".into()));
        }
        let b = self.data[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Read a 16-bit little-endian value
    fn read_u16_le(&mut self) -> Result<u16> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    /// Read a 32-bit little-endian value
    fn read_u32_le(&mut self) -> Result<u32> {
        let lo = self.read_u16_le()? as u32;
        let hi = self.read_u16_le()? as u32;
        Ok(lo | (hi << 16))
    }

    /// Read a 4-byte chunk identifier and check it against `expected`
    fn expect_tag(&mut self, expected: &[u8; 4]) -> Result<()> {
        for &want in expected {
            let got = self.read_u8()?;
            if got != want {
                return Err(Error::WavParse(format!(
                    "Expected '{}' tag, found byte {:#04x} at offset {}",
                    String::from_utf8_lossy(expected),
                    got,
                    self.pos - 1
                )));
            }
        }
        Ok(())
    }

    /// Parse the canonical 44-byte header
    pub fn parse_header(&mut self) -> Result<WavHeaderInfo> {
        if self.data.len() < WAV_HEADER_SIZE {
            return Err(Error::WavParse(format!(
                "File too short for a WAV header: {} bytes",
                self.data.len()
            )));
        }

        self.pos = offset::RIFF_IDENT;
        self.expect_tag(b"RIFF")?;
        let riff_size = self.read_u32_le()?;
        self.expect_tag(b"WAVE")?;

        self.expect_tag(b"fmt ")?;
        let fmt_size = self.read_u32_le()?;
        let audio_format = self.read_u16_le()?;
        if audio_format != FORMAT_PCM {
            return Err(Error::WavParse(format!(
                "Unsupported audio format: {} (only linear PCM)",
                audio_format
            )));
        }
        let channels = self.read_u16_le()?;
        let sample_rate = self.read_u32_le()?;
        let byte_rate = self.read_u32_le()?;
        let block_align = self.read_u16_le()?;
        let bits_per_sample = self.read_u16_le()?;

        self.expect_tag(b"data")?;
        let data_size = self.read_u32_le()?;

        if self.data.len() < WAV_HEADER_SIZE + data_size as usize {
            return Err(Error::WavParse(format!(
                "Data chunk claims {} bytes but only {} remain",
                data_size,
                self.data.len() - WAV_HEADER_SIZE
            )));
        }

        Ok(WavHeaderInfo {
            riff_size,
            fmt_size,
            audio_format,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        })
    }

    /// Decode the 16-bit sample payload described by `header`
    pub fn samples(&mut self, header: &WavHeaderInfo) -> Result<Vec<i16>> {
        if header.bits_per_sample != 16 {
            return Err(Error::WavParse(format!(
                "Unsupported bit depth: {}",
                header.bits_per_sample
            )));
        }

        self.pos = WAV_HEADER_SIZE;
        let mut samples = Vec::with_capacity(header.data_size as usize / 2);
        for _ in 0..header.data_size / 2 {
            samples.push(self.read_u16_le()? as i16);
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::WavWriter;

    #[test]
    fn test_roundtrip_header() {
        let writer = WavWriter::new(44100);
        let bytes = writer.encode(&[vec![0.0; 100]]);

        let mut reader = WavReader::new(&bytes);
        let header = reader.parse_header().unwrap();
        assert_eq!(header.channels, 1);
        assert_eq!(header.sample_rate, 44100);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_size, 200);
        assert_eq!(header.riff_size, 236);
        assert_eq!(header.sample_count(), 100);
    }

    #[test]
    fn test_roundtrip_samples() {
        let writer = WavWriter::new(44100);
        let bytes = writer.encode(&[vec![1.0, -1.0, 0.0]]);

        let mut reader = WavReader::new(&bytes);
        let header = reader.parse_header().unwrap();
        let samples = reader.samples(&header).unwrap();
        assert_eq!(samples, vec![32767, -32767, 0]);
    }

    #[test]
    fn test_rejects_truncated_input() {
        let mut reader = WavReader::new(&[0u8; 10]);
        assert!(matches!(reader.parse_header(), Err(Error::WavParse(_))));
    }

    #[test]
    fn test_rejects_bad_magic() {
        let writer = WavWriter::new(44100);
        let mut bytes = writer.encode(&[vec![0.0; 4]]);
        bytes[0] = b'X';

        let mut reader = WavReader::new(&bytes);
        assert!(matches!(reader.parse_header(), Err(Error::WavParse(_))));
    }

    #[test]
    fn test_rejects_short_data_chunk() {
        let writer = WavWriter::new(44100);
        let mut bytes = writer.encode(&[vec![0.0; 4]]);
        bytes.truncate(46);

        let mut reader = WavReader::new(&bytes);
        assert!(matches!(reader.parse_header(), Err(Error::WavParse(_))));
    }
}
