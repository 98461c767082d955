//! Assembles a prefix trie from keyed entries and prints it.
mod demo;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use level_trie::{Entry, KeyAlphabet, Trie, entries};
use log::info;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

/// How the assembled trie is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented tree, one node per line.
    Tree,
    /// Nested `{ "value", "children" }` objects.
    #[default]
    Json,
    /// Single-value subtrees collapsed at their shortest unique prefix.
    Compact,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON array of `{ "key": string, "value": any }` records; the built-in digest list when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Reject keys that are not lowercase hexadecimal.
    #[arg(long)]
    hex: bool,

    /// Print assembly statistics to stderr.
    #[arg(long)]
    stats: bool,
}

impl Args {
    const fn alphabet(&self) -> KeyAlphabet {
        if self.hex { KeyAlphabet::Hex } else { KeyAlphabet::Any }
    }

    fn load(&self) -> anyhow::Result<Vec<Entry<Value>>> {
        let entries = match &self.input {
            Some(path) => {
                info!("reading entries from {}", path.display());
                entries::read_json(path)
                    .with_context(|| format!("failed to load entries from {}", path.display()))?
            }
            None => {
                info!("using the built-in digest list");
                demo::entries()
            }
        };
        self.alphabet().validate(&entries)?;
        info!("loaded {} entries", entries.len());
        Ok(entries)
    }
}

fn render(trie: &Trie<Value>, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Tree => trie.to_string(),
        Format::Json => serde_json::to_string_pretty(trie)?,
        Format::Compact => serde_json::to_string_pretty(&trie.compact())?,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let entries = args.load()?;
    let (trie, stats) = Trie::assemble_with_stats(entries);
    if args.stats {
        eprintln!("{stats}");
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(&trie, args.format)?).context("failed to write the trie")?;
    Ok(())
}
