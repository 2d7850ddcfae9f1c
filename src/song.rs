//! Song assembly: tempo and volume state, event sequencing, saving

use crate::error::Result;
use crate::note::Note;
use crate::synth::{self, SAMPLE_RATE};
use crate::wav::WavWriter;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default tempo in beats per minute
pub const DEFAULT_TEMPO: u32 = 120;

/// Default volume (0.0 - 1.0)
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Result of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// File written to the given path
    Written(PathBuf),
    /// Nothing to write; no file was created. Non-fatal: the caller may keep
    /// adding events and save again.
    EmptySong,
}

/// Read-only summary of a song's current state
#[derive(Debug, Clone, PartialEq)]
pub struct SongSummary {
    pub tempo: u32,
    pub segment_count: usize,
    pub total_seconds: f64,
}

impl fmt::Display for SongSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tempo: {} BPM", self.tempo)?;
        writeln!(f, "Total duration: {:.2} seconds", self.total_seconds)?;
        write!(f, "Segments: {}", self.segment_count)
    }
}

/// An ordered sequence of note, chord and rest events rendered to sample
/// segments as they are added.
///
/// Segment order is the playback timeline. Each `Song` owns its segments
/// exclusively; use one `Song` per thread for batch rendering.
pub struct Song {
    tempo: u32,
    volume: f64,
    /// One sample buffer per added event, in playback order
    segments: Vec<Vec<f32>>,
    /// Seconds per beat, fixed at construction
    beat_duration: f64,
}

impl Song {
    /// Create a song at `tempo` beats per minute.
    ///
    /// `volume` is clamped into [0.0, 1.0]; out-of-range input would
    /// otherwise over- or under-scale every segment.
    ///
    /// # Panics
    ///
    /// Panics if `tempo` is zero.
    pub fn new(tempo: u32, volume: f64) -> Self {
        assert!(tempo > 0, "tempo must be positive");
        Self {
            tempo,
            volume: volume.clamp(0.0, 1.0),
            segments: Vec::new(),
            beat_duration: 60.0 / tempo as f64,
        }
    }

    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total queued duration in seconds
    pub fn total_duration(&self) -> f64 {
        let samples: usize = self.segments.iter().map(Vec::len).sum();
        samples as f64 / SAMPLE_RATE as f64
    }

    /// Add a note event lasting `beats` beats.
    ///
    /// Fails without appending anything if the token does not resolve.
    pub fn add_note(&mut self, token: &str, beats: f64) -> Result<()> {
        let note: Note = token.parse()?;
        let seconds = beats * self.beat_duration;
        self.segments
            .push(synth::tone(note.frequency(), seconds, self.volume));
        Ok(())
    }

    /// Add a rest (silence) lasting `beats` beats
    pub fn add_rest(&mut self, beats: f64) {
        let seconds = beats * self.beat_duration;
        self.segments.push(synth::silence(seconds));
    }

    /// Add a chord: all tokens sound simultaneously for `beats` beats as one
    /// segment.
    ///
    /// Every token is resolved before any synthesis, so a failure on any
    /// token leaves the song untouched.
    pub fn add_chord<S: AsRef<str>>(&mut self, tokens: &[S], beats: f64) -> Result<()> {
        let mut frequencies = Vec::with_capacity(tokens.len());
        for token in tokens {
            let note: Note = token.as_ref().parse()?;
            frequencies.push(note.frequency());
        }

        let seconds = beats * self.beat_duration;
        self.segments
            .push(synth::chord(&frequencies, seconds, self.volume));
        Ok(())
    }

    /// Discard all segments; tempo and volume are retained
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Summarize the song without mutating it
    pub fn preview(&self) -> SongSummary {
        SongSummary {
            tempo: self.tempo,
            segment_count: self.segments.len(),
            total_seconds: self.total_duration(),
        }
    }

    /// Encode all segments and write them to `path` as a mono 16-bit WAV.
    ///
    /// A `.wav` extension is appended when missing. Saving an empty song is
    /// a no-op reported as `SaveOutcome::EmptySong`, not an error; saving
    /// does not consume the song and may be repeated or followed by more
    /// additions.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<SaveOutcome> {
        if self.segments.is_empty() {
            return Ok(SaveOutcome::EmptySong);
        }

        let path = with_wav_extension(path.as_ref());
        WavWriter::new(SAMPLE_RATE).write(&path, &self.segments)?;
        Ok(SaveOutcome::Written(path))
    }
}

impl Default for Song {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPO, DEFAULT_VOLUME)
    }
}

/// Render a single note to a WAV file named after the note and duration.
///
/// Returns the written path, e.g. `C4_1beat.wav` for one beat of C4.
pub fn render_note(token: &str, beats: f64, tempo: u32) -> Result<PathBuf> {
    let mut song = Song::new(tempo, DEFAULT_VOLUME);
    song.add_note(token, beats)?;

    let filename = format!("{}_{}beat.wav", token, beats);
    match song.save(&filename)? {
        SaveOutcome::Written(path) => Ok(path),
        SaveOutcome::EmptySong => unreachable!("a note was just added"),
    }
}

fn with_wav_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("wav") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".wav");
            PathBuf::from(name)
        }
    }
}
