//! Cold root identity CLI, the `coldroot` command.
//!
//! Generates root seeds, derives epoch keys, emits lineage events and
//! verifies them. Root operations should be run on an offline machine.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use cold_root_identity::encoding::public_key_hex;
use cold_root_identity::time::{current_quarter_label, quarter_start, secs_to_rfc3339};
use cold_root_identity::{check_lineage, LineageEvent, RootSeed, LINEAGE_KIND};

// ── Seed input helper ─────────────────────────────────────────────────────────

/// Parse a root seed argument (hex or `nsec1...`); `-` reads one line from stdin instead.
fn read_root_seed(arg: &str) -> Result<RootSeed> {
    if arg == "-" {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read root seed from stdin")?;
        return line.parse().context("invalid root seed on stdin");
    }
    arg.parse().context("invalid --root-seed")
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Cold root identity CLI: derive epoch keys from an offline root seed and
/// attest them with signed lineage events.
#[derive(Parser, Debug)]
#[command(
    name = "coldroot",
    about = "Cold Root Identity CLI",
    version,
    long_about = "coldroot: Cold Root Identity CLI\n\nGenerate an offline root seed, derive per-epoch keys from it, and\npublish root-signed lineage events that bind each epoch key to the root."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new root seed (run offline)
    Init,

    /// Derive the key pair for an epoch
    Derive {
        /// Epoch label, e.g. 2026-Q1 (default: current quarter)
        #[arg(long)]
        epoch: Option<String>,

        /// 32-byte root seed as hex or nsec, or `-` to read it from stdin
        #[arg(long)]
        root_seed: String,
    },

    /// Create the root-signed lineage event for an epoch
    Lineage {
        /// Epoch label, e.g. 2026-Q1 (default: current quarter)
        #[arg(long)]
        epoch: Option<String>,

        /// 32-byte root seed as hex or nsec, or `-` to read it from stdin
        #[arg(long)]
        root_seed: String,

        /// Event kind
        #[arg(long, default_value_t = LINEAGE_KIND)]
        kind: u32,

        /// Event timestamp in Unix seconds (default: now)
        #[arg(long, conflicts_with = "quarter_timestamp")]
        created_at: Option<u64>,

        /// Use the first second of the epoch's quarter as the timestamp
        #[arg(long)]
        quarter_timestamp: bool,
    },

    /// Verify a lineage event JSON file
    Verify {
        /// Path to the lineage event JSON
        file: PathBuf,

        /// Expected root public key as hex or npub (default: the event's own root tag)
        #[arg(long)]
        root: Option<String>,

        /// Also require this event kind
        #[arg(long)]
        kind: Option<u32>,
    },
}

#[derive(Serialize)]
struct DeriveOutput<'a> {
    epoch: &'a str,
    sk_hex: String,
    pk_hex: String,
    npub: String,
    nsec: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Init => cmd_init(verbose),
        Commands::Derive { epoch, root_seed } => cmd_derive(epoch, &root_seed, verbose),
        Commands::Lineage {
            epoch,
            root_seed,
            kind,
            created_at,
            quarter_timestamp,
        } => cmd_lineage(epoch, &root_seed, kind, created_at, quarter_timestamp, verbose),
        Commands::Verify { file, root, kind } => cmd_verify(&file, root.as_deref(), kind, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `coldroot init`
fn cmd_init(verbose: bool) -> Result<()> {
    let seed = RootSeed::generate();
    let root = seed.root_keypair();

    println!("=== Cold Root Seed (STORE OFFLINE, NEVER ONLINE) ===");
    println!("{}", seed.to_hex());
    println!();
    println!("Root public key (for reference only, can be shared):");
    println!("{}", root.public_key_hex());
    println!();
    println!("Root npub (optional, do not use for posting):");
    println!("{}", root.npub()?);

    if verbose {
        println!();
        println!("Root nsec (as secret as the seed):");
        println!("{}", seed.nsec()?);
    }

    println!();
    println!("Write the seed hex down on paper and delete this output if saved.");
    Ok(())
}

/// `coldroot derive --epoch LABEL --root-seed HEX`
fn cmd_derive(epoch: Option<String>, root_seed: &str, verbose: bool) -> Result<()> {
    let label = epoch.unwrap_or_else(current_quarter_label);
    let seed = read_root_seed(root_seed)?;
    let key = seed
        .derive_epoch_key(&label)
        .with_context(|| format!("failed to derive epoch key for {label:?}"))?;

    let out = DeriveOutput {
        epoch: &label,
        sk_hex: key.seed_hex(),
        pk_hex: key.public_key_hex(),
        npub: key.npub()?,
        nsec: key.nsec()?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);

    if verbose {
        eprintln!("root: {}", seed.root_keypair().public_key_hex());
    }
    Ok(())
}

/// `coldroot lineage --epoch LABEL --root-seed HEX`
fn cmd_lineage(
    epoch: Option<String>,
    root_seed: &str,
    kind: u32,
    created_at: Option<u64>,
    quarter_timestamp: bool,
    verbose: bool,
) -> Result<()> {
    let label = epoch.unwrap_or_else(current_quarter_label);
    let seed = read_root_seed(root_seed)?;

    let created_at = if quarter_timestamp {
        Some(quarter_start(&label)?)
    } else {
        created_at
    };

    let (key, event) = seed
        .activate_epoch(&label, kind, created_at)
        .with_context(|| format!("failed to build lineage event for {label:?}"))?;

    println!("{}", event.to_json_pretty()?);

    if verbose {
        eprintln!("epoch:      {}", key.label());
        eprintln!("epoch npub: {}", key.npub()?);
        eprintln!("created:    {}", secs_to_rfc3339(event.created_at));
    }
    Ok(())
}

/// `coldroot verify FILE [--root HEX|NPUB]`
fn cmd_verify(path: &Path, root: Option<&str>, kind: Option<u32>, verbose: bool) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("file not found: {}", path.display()));
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let event = LineageEvent::from_json(&json).context("not a lineage event")?;

    let claimed_root = match root {
        Some(r) => public_key_hex(r).context("invalid --root")?,
        None => event
            .root_hex()
            .ok_or_else(|| anyhow!("lineage event missing root tag"))?
            .to_string(),
    };

    log::debug!("verifying {} against root {claimed_root}", path.display());

    if let Some(expected) = kind {
        if event.kind != expected {
            println!("invalid");
            return Err(anyhow!("event kind {} is not {expected}", event.kind));
        }
    }

    match check_lineage(&claimed_root, &event) {
        Ok(claim) => {
            println!("valid");
            if verbose {
                eprintln!("root:    {}", claim.root_public_key);
                eprintln!("epoch:   {}", claim.epoch_public_key);
                if let Some(label) = &claim.epoch_label {
                    eprintln!("label:   {label}");
                }
                eprintln!("created: {}", secs_to_rfc3339(claim.created_at));
            }
            Ok(())
        }
        Err(e) => {
            println!("invalid");
            Err(anyhow!("lineage verification failed: {e}"))
        }
    }
}
