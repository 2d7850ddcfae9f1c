//! WAV header layout and construction

/// Header size in bytes (RIFF chunk + fmt subchunk + data subchunk prelude)
pub const WAV_HEADER_SIZE: usize = 44;

/// fmt subchunk size for linear PCM
pub const FMT_CHUNK_SIZE: u32 = 16;

/// Audio format tag for linear PCM
pub const FORMAT_PCM: u16 = 1;

/// Mono channel count
pub const CHANNELS_MONO: u16 = 1;

/// Sample width in bits
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per mono 16-bit sample frame
pub const BLOCK_ALIGN: u16 = 2;

/// WAV header offsets (in bytes)
pub mod offset {
    /// "RIFF" identifier
    pub const RIFF_IDENT: usize = 0x00;
    /// RIFF chunk size (36 + data size)
    pub const RIFF_SIZE: usize = 0x04;
    /// "WAVE" format tag
    pub const WAVE_IDENT: usize = 0x08;
    /// "fmt " subchunk identifier
    pub const FMT_IDENT: usize = 0x0C;
    /// fmt subchunk size
    pub const FMT_SIZE: usize = 0x10;
    /// Audio format (1 = linear PCM)
    pub const AUDIO_FORMAT: usize = 0x14;
    /// Channel count
    pub const CHANNELS: usize = 0x16;
    /// Sample rate in Hz
    pub const SAMPLE_RATE: usize = 0x18;
    /// Byte rate (sample rate * block align)
    pub const BYTE_RATE: usize = 0x1C;
    /// Block align (bytes per sample frame)
    pub const BLOCK_ALIGN: usize = 0x20;
    /// Bits per sample
    pub const BITS_PER_SAMPLE: usize = 0x22;
    /// "data" subchunk identifier
    pub const DATA_IDENT: usize = 0x24;
    /// Data subchunk size (sample bytes)
    pub const DATA_SIZE: usize = 0x28;
}

/// WAV header for a mono 16-bit PCM file
#[derive(Debug, Clone)]
pub struct WavHeader {
    data: [u8; WAV_HEADER_SIZE],
}

impl WavHeader {
    /// Build a complete header for `data_size` bytes of samples at
    /// `sample_rate` Hz
    pub fn new(sample_rate: u32, data_size: u32) -> Self {
        let mut header = Self {
            data: [0; WAV_HEADER_SIZE],
        };

        header.data[offset::RIFF_IDENT..offset::RIFF_IDENT + 4].copy_from_slice(b"RIFF");
        header.write_u32(offset::RIFF_SIZE, 36 + data_size);
        header.data[offset::WAVE_IDENT..offset::WAVE_IDENT + 4].copy_from_slice(b"WAVE");

        header.data[offset::FMT_IDENT..offset::FMT_IDENT + 4].copy_from_slice(b"fmt ");
        header.write_u32(offset::FMT_SIZE, FMT_CHUNK_SIZE);
        header.write_u16(offset::AUDIO_FORMAT, FORMAT_PCM);
        header.write_u16(offset::CHANNELS, CHANNELS_MONO);
        header.write_u32(offset::SAMPLE_RATE, sample_rate);
        header.write_u32(offset::BYTE_RATE, sample_rate * BLOCK_ALIGN as u32);
        header.write_u16(offset::BLOCK_ALIGN, BLOCK_ALIGN);
        header.write_u16(offset::BITS_PER_SAMPLE, BITS_PER_SAMPLE);

        header.data[offset::DATA_IDENT..offset::DATA_IDENT + 4].copy_from_slice(b"data");
        header.write_u32(offset::DATA_SIZE, data_size);

        header
    }

    fn write_u16(&mut self, offset: usize, value: u16) {
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn write_u32(&mut self, offset: usize, value: u32) {
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
