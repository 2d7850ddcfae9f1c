use clap::Parser;
use notewav::note::PITCH_CLASSES;
use notewav::song::{DEFAULT_TEMPO, DEFAULT_VOLUME};
use notewav::{SaveOutcome, Song};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notewav")]
#[command(version = "0.1.0")]
#[command(about = "Render a musical note to a WAV file", long_about = None)]
struct Args {
    /// Note to render, like C4, A#3 or Gb5
    #[arg(required_unless_present = "list_notes")]
    note: Option<String>,

    /// Output WAV file (defaults to <note>_<beats>beat.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Duration in beats
    #[arg(short, long, default_value_t = 1.0)]
    beats: f64,

    /// Tempo in beats per minute
    #[arg(short, long, default_value_t = DEFAULT_TEMPO)]
    tempo: u32,

    /// Volume from 0.0 to 1.0
    #[arg(short, long, default_value_t = DEFAULT_VOLUME)]
    volume: f64,

    /// List valid note names
    #[arg(short = 'L', long)]
    list_notes: bool,
}

fn main() -> Result<(), notewav::Error> {
    let args = Args::parse();

    if args.list_notes {
        for pitch_class in PITCH_CLASSES {
            println!("{}", pitch_class);
        }
        return Ok(());
    }

    let note = args.note.expect("note is required when not listing notes");
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}_{}beat.wav", note, args.beats)));

    let mut song = Song::new(args.tempo, args.volume);
    song.add_note(&note, args.beats)?;

    match song.save(&output)? {
        SaveOutcome::Written(path) => println!("Wrote {}", path.display()),
        SaveOutcome::EmptySong => eprintln!("Warning: nothing to write"),
    }
    Ok(())
}
