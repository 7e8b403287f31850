use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use textmask_core::{Error, keymix, submap};

#[derive(Parser)]
#[command(name = "textmask")]
#[command(about = "Reversible text obfuscation – keymix and submap codecs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with the multiplicative key-embedding codec
    KeymixEncode {
        /// Text to encode
        text: String,
    },

    /// Decode a keymix-encoded string
    KeymixDecode {
        /// Encoded string to decode
        text: String,
    },

    /// Encode text with the substitution-mapping codec
    SubmapEncode {
        /// Text to encode
        text: String,
    },

    /// Decode a submap-encoded string
    SubmapDecode {
        /// Encoded string to decode
        text: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::KeymixEncode { text } => {
            emit(keymix::encode(&text), keymix::EMPTY_SENTINEL).context("keymix encode failed")
        }
        Commands::KeymixDecode { text } => {
            emit(keymix::decode(&text), keymix::EMPTY_SENTINEL).context("keymix decode failed")
        }
        Commands::SubmapEncode { text } => {
            emit(submap::encode(&text), submap::EMPTY_SENTINEL).context("submap encode failed")
        }
        Commands::SubmapDecode { text } => {
            emit(submap::decode(&text), submap::EMPTY_SENTINEL).context("submap decode failed")
        }
    }
}

/// Print the codec result. Blank input is reported with the scheme's
/// original sentinel string rather than treated as a hard failure.
fn emit(result: std::result::Result<String, Error>, sentinel: &str) -> Result<()> {
    match result {
        Ok(out) => println!("{out}"),
        Err(Error::EmptyInput) => println!("{sentinel}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
