// src/main.rs
mod logger;
mod utils;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use huffpack::{HuffmanCodec, KeyFile, compress_text};
use tracing::{debug, info, trace};

#[derive(Parser)]
#[command(name = "huffpack", version = "0.1.0")]
#[command(about = "Huffman compression for text files.", long_about = None)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file into <name>.bin plus a <name>.hkey code key
    Compress {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep trailing whitespace instead of trimming it
        #[arg(long)]
        keep_whitespace: bool,
        /// Do not write the key file
        #[arg(long)]
        no_key: bool,
    },
    /// Decompress an artifact using its key file
    Decompress {
        artifact: PathBuf,
        #[arg(short, long)]
        key: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compress and decompress in one session, then report sizes
    Roundtrip {
        input: PathBuf,
        #[arg(long)]
        keep_whitespace: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet))?;

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Compress {
            input,
            output,
            keep_whitespace,
            no_key,
        } => compress(&input, output, keep_whitespace, no_key),
        Commands::Decompress {
            artifact,
            key,
            output,
        } => decompress(&artifact, key, output),
        Commands::Roundtrip {
            input,
            keep_whitespace,
        } => roundtrip(&input, keep_whitespace),
    }
}

fn compress(
    input: &Path,
    output: Option<PathBuf>,
    keep_whitespace: bool,
    no_key: bool,
) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| utils::compressed_path(input));
    let key_path = (!no_key).then(|| utils::key_path(&output));
    let mut targets = vec![output.as_path()];
    targets.extend(key_path.as_deref());
    utils::ensure_distinct(input, &targets)?;

    let text = utils::read_text(input, keep_whitespace)?;
    let (codec, artifact) = compress_text(&text)
        .with_context(|| format!("failed to compress {}", input.display()))?;
    log_codes(&codec);

    fs::write(&output, &artifact)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if let Some(key_path) = key_path {
        fs::write(&key_path, codec.key_file().to_bytes()?)
            .with_context(|| format!("failed to write {}", key_path.display()))?;
        debug!(key = %key_path.display(), "wrote key file");
    }

    info!(input = %input.display(), output = %output.display(), bytes = artifact.len(), "compressed");
    println!("The file has been compressed: {}", output.display());
    Ok(())
}

fn decompress(artifact: &Path, key: Option<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let key = key.unwrap_or_else(|| utils::key_path(artifact));
    let output = output.unwrap_or_else(|| utils::decompressed_path(artifact));

    let key_bytes = utils::read_bytes(&key)?;
    let codec = HuffmanCodec::from_key_file(&KeyFile::from_bytes(&key_bytes)?)?;

    let data = utils::read_bytes(artifact)?;
    let text = codec
        .decompress(&data)
        .with_context(|| format!("failed to decompress {}", artifact.display()))?;

    fs::write(&output, &text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(artifact = %artifact.display(), output = %output.display(), "decompressed");
    println!("The file has been decompressed: {}", output.display());
    Ok(())
}

fn roundtrip(input: &Path, keep_whitespace: bool) -> anyhow::Result<()> {
    let compressed = utils::compressed_path(input);
    let decompressed = utils::decompressed_path(&compressed);
    utils::ensure_distinct(input, &[compressed.as_path(), decompressed.as_path()])?;

    let text = utils::read_text(input, keep_whitespace)?;
    let (codec, artifact) = compress_text(&text)
        .with_context(|| format!("failed to compress {}", input.display()))?;
    log_codes(&codec);
    fs::write(&compressed, &artifact)
        .with_context(|| format!("failed to write {}", compressed.display()))?;
    println!("The file has been compressed");

    let data = utils::read_bytes(&compressed)?;
    let restored = codec.decompress(&data)?;
    fs::write(&decompressed, &restored)
        .with_context(|| format!("failed to write {}", decompressed.display()))?;
    println!("The file has been decompressed");

    if restored != text {
        bail!("round trip mismatch for {}", input.display());
    }

    println!(
        "Size before compression: {}",
        utils::format_bytes(utils::file_size(input)?)
    );
    println!(
        "Size after compression: {}",
        utils::format_bytes(utils::file_size(&compressed)?)
    );
    println!(
        "Size after decompression: {}",
        utils::format_bytes(utils::file_size(&decompressed)?)
    );
    Ok(())
}

fn log_codes(codec: &HuffmanCodec) {
    for (symbol, code) in codec.code_table().iter() {
        trace!(?symbol, code = %huffpack::bits::to_bit_string(code), "code");
    }
}
