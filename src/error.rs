use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid note format: '{0}'. Use format like C5, A4, F#3")]
    InvalidNoteFormat(String),

    #[error("Unknown note: '{0}'. Valid notes: C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    UnknownPitchClass(String),

    #[error("WAV parse error: {0}")]
    WavParse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
