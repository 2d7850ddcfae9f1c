//! Note name parsing and frequency calculation

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Octave at which the base frequency table is calibrated (A4 = 440 Hz)
pub const REFERENCE_OCTAVE: i32 = 4;

/// The 12 chromatic pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// All pitch classes in chromatic order
pub const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Base frequency in Hz at the reference octave
    pub fn base_frequency(self) -> f64 {
        match self {
            PitchClass::C => 261.63,
            PitchClass::CSharp => 277.18,
            PitchClass::D => 293.66,
            PitchClass::DSharp => 311.13,
            PitchClass::E => 329.63,
            PitchClass::F => 349.23,
            PitchClass::FSharp => 369.99,
            PitchClass::G => 392.00,
            PitchClass::GSharp => 415.30,
            PitchClass::A => 440.00,
            PitchClass::ASharp => 466.16,
            PitchClass::B => 493.88,
        }
    }

    /// Canonical name (sharps spelled with `#`)
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Parse a pitch class name, case-insensitively.
    ///
    /// Accidentals are spelled with `#` (sharp) or `b` (flat) directly after
    /// the letter; enharmonic flat spellings map to the sharp variant
    /// (`Db` == `C#`).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "C" => Ok(PitchClass::C),
            "C#" | "DB" => Ok(PitchClass::CSharp),
            "D" => Ok(PitchClass::D),
            "D#" | "EB" => Ok(PitchClass::DSharp),
            "E" => Ok(PitchClass::E),
            "F" => Ok(PitchClass::F),
            "F#" | "GB" => Ok(PitchClass::FSharp),
            "G" => Ok(PitchClass::G),
            "G#" | "AB" => Ok(PitchClass::GSharp),
            "A" => Ok(PitchClass::A),
            "A#" | "BB" => Ok(PitchClass::ASharp),
            "B" => Ok(PitchClass::B),
            _ => Err(Error::UnknownPitchClass(s.to_string())),
        }
    }
}

/// A pitch class with its octave register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: u8,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: u8) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// Frequency in Hz, equal-tempered relative to the reference octave
    pub fn frequency(self) -> f64 {
        self.pitch_class.base_frequency() * 2f64.powi(self.octave as i32 - REFERENCE_OCTAVE)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = Error;

    /// Parse a note token like `C5`, `A4` or `F#3`.
    ///
    /// The octave is the single trailing digit; only octaves 0-9 are
    /// representable (a deliberate limit of the token format, not an
    /// accident of parsing).
    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();

        let octave = match token.chars().last() {
            Some(c) if c.is_ascii_digit() => c as u8 - b'0',
            _ => return Err(Error::InvalidNoteFormat(token.to_string())),
        };

        // The octave digit is ASCII, so the byte split is safe.
        let name = &token[..token.len() - 1];
        if name.is_empty() {
            return Err(Error::InvalidNoteFormat(token.to_string()));
        }

        let pitch_class = name.parse::<PitchClass>()?;
        Ok(Note::new(pitch_class, octave))
    }
}

/// Convert a note token like `C5` or `A4` to its frequency in Hz
pub fn note_to_frequency(token: &str) -> Result<f64> {
    token.parse::<Note>().map(Note::frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tuning() {
        assert_eq!(note_to_frequency("A4").unwrap(), 440.0);
        assert_eq!(note_to_frequency("A5").unwrap(), 880.0);
        assert_eq!(note_to_frequency("A3").unwrap(), 220.0);
        assert!((note_to_frequency("C4").unwrap() - 261.63).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_is_pure() {
        assert_eq!(
            note_to_frequency("F#3").unwrap(),
            note_to_frequency("F#3").unwrap()
        );
    }

    #[test]
    fn test_enharmonic_aliases() {
        assert_eq!(
            note_to_frequency("C#4").unwrap(),
            note_to_frequency("Db4").unwrap()
        );
        assert_eq!(
            note_to_frequency("Bb2").unwrap(),
            note_to_frequency("A#2").unwrap()
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(note_to_frequency("a4").unwrap(), 440.0);
        assert_eq!(
            note_to_frequency("db4").unwrap(),
            note_to_frequency("C#4").unwrap()
        );
    }

    #[test]
    fn test_unknown_pitch_class() {
        assert!(matches!(
            note_to_frequency("H4"),
            Err(Error::UnknownPitchClass(_))
        ));
        assert!(matches!(
            note_to_frequency("Cb4"),
            Err(Error::UnknownPitchClass(_))
        ));
    }

    #[test]
    fn test_invalid_format() {
        // No trailing octave digit
        assert!(matches!(
            note_to_frequency("C"),
            Err(Error::InvalidNoteFormat(_))
        ));
        assert!(matches!(
            note_to_frequency(""),
            Err(Error::InvalidNoteFormat(_))
        ));
        // Digit with no name
        assert!(matches!(
            note_to_frequency("4"),
            Err(Error::InvalidNoteFormat(_))
        ));
    }

    #[test]
    fn test_octave_scaling() {
        let c0 = note_to_frequency("C0").unwrap();
        let c9 = note_to_frequency("C9").unwrap();
        assert!((c9 / c0 - 512.0).abs() < 1e-9);
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(note_to_frequency(" A4 ").unwrap(), 440.0);
    }
}
