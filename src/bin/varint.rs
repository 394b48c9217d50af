//! Command-line front-end for encoding and inspecting varints.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use varint_codec::util::parse_hex;
use varint_codec::{
    BinaryChunks, Decoded, count_varints, decode_svarint, decode_uvarint, encoded_len_svarint,
    encoded_len_u64, to_svarint, to_uvarint,
};

#[derive(Parser)]
#[command(name = "varint")]
#[command(about = "Encode, decode and measure LEB128 varints")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode integers and print their bytes as hex
    Encode {
        /// Treat values as signed and apply zig-zag encoding
        #[arg(long)]
        signed: bool,
        /// Print binary octets instead of hex
        #[arg(long)]
        binary: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Decode every varint in a hex string
    Decode {
        /// Apply zig-zag decoding
        #[arg(long)]
        signed: bool,
        hex: String,
    },
    /// Print the encoded size of integers
    Size {
        /// Size the zig-zag encoding of signed values
        #[arg(long)]
        signed: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Count the varints packed in a hex string
    Count { hex: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encode {
            signed,
            binary,
            values,
        } => {
            for text in &values {
                let bytes = if signed {
                    to_svarint(parse_signed(text)?)
                } else {
                    to_uvarint(parse_unsigned(text)?)
                };
                if binary {
                    println!("{text}: {}", BinaryChunks(&bytes));
                } else {
                    println!("{text}: {}", hex::encode(&bytes));
                }
            }
        }
        Commands::Decode { signed, hex } => {
            let bytes = parse_hex(&hex).context("invalid hex input")?;
            decode_all(&bytes, signed)?;
        }
        Commands::Size { signed, values } => {
            for text in &values {
                let len = if signed {
                    encoded_len_svarint(parse_signed(text)?)
                } else {
                    encoded_len_u64(parse_unsigned(text)?)
                };
                println!("{text}: {len}");
            }
        }
        Commands::Count { hex } => {
            let bytes = parse_hex(&hex).context("invalid hex input")?;
            println!("{}", count_varints(&bytes));
        }
    }
    Ok(())
}

fn decode_all(mut bytes: &[u8], signed: bool) -> Result<()> {
    let mut offset = 0usize;
    while !bytes.is_empty() {
        let outcome = if signed {
            decode_svarint(bytes).map(|value| value.to_string())
        } else {
            decode_uvarint(bytes).map(|value| value.to_string())
        };
        match outcome {
            Decoded::Complete { value, len } => {
                debug!(offset, len, "decoded varint");
                println!("{value}");
                bytes = &bytes[len..];
                offset += len;
            }
            Decoded::Incomplete => {
                warn!(offset, "input ends inside a varint");
                bail!("truncated varint at byte offset {offset}");
            }
            Decoded::Overflow { consumed } => {
                bail!("varint at byte offset {offset} overflows 64 bits after {consumed} bytes");
            }
        }
    }
    Ok(())
}

fn parse_unsigned(text: &str) -> Result<u64> {
    text.parse()
        .with_context(|| format!("`{text}` is not an unsigned 64-bit integer"))
}

fn parse_signed(text: &str) -> Result<i64> {
    text.parse()
        .with_context(|| format!("`{text}` is not a signed 64-bit integer"))
}
