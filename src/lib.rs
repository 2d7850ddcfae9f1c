pub mod error;
pub mod note;
pub mod song;
pub mod synth;
pub mod wav;

pub use error::Error;
pub use song::{render_note, SaveOutcome, Song};
