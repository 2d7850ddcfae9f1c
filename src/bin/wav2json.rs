//! WAV to JSON converter

use clap::Parser;
use notewav::wav::{WavJson, WavReader};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wav2json")]
#[command(version = "0.1.0")]
#[command(about = "Summarize WAV files as JSON", long_about = None)]
struct Args {
    /// Input WAV file
    input: PathBuf,

    /// Output JSON file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let data = std::fs::read(&args.input)?;

    let mut reader = WavReader::new(&data);
    let header = reader.parse_header()?;
    let samples = reader.samples(&header)?;

    let wav_json = WavJson::new(&header, &samples);

    let json_string = if args.compact {
        serde_json::to_string(&wav_json)?
    } else {
        serde_json::to_string_pretty(&wav_json)?
    };

    match args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json_string.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => {
            println!("{}", json_string);
        }
    }

    Ok(())
}
