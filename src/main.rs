use anyhow::Context;
use clap::Parser;
use mcrs_enchanting::{EnchantingConfig, Enchantments, item};
use mcrs_random::RandomSource;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rolls enchanting-table results for an item.
#[derive(Debug, Parser)]
#[command(name = "mcrs_enchant", version)]
struct Args {
    /// Item identifier (`diamond_sword`) or legacy numeric id.
    #[arg(short, long)]
    item: String,
    /// Enchanting power level.
    #[arg(short, long)]
    power: i32,
    /// Seed for the random source; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Use the legacy LCG instead of Xoroshiro128++.
    #[arg(long)]
    legacy: bool,
    /// Maximum number of enchantments to roll.
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// JSON configuration overriding the vanilla rules.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the weighted candidate pool instead of rolling.
    #[arg(long)]
    candidates: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EnchantingConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => EnchantingConfig::default(),
    };
    let mut item = item::lookup(&args.item)
        .map(|item| item.id)
        .with_context(|| format!("unknown item \"{}\"", args.item))?;

    let mut enchanter = config.enchanter();
    if let Some(count) = args.count {
        enchanter = enchanter.with_max_enchantments(count);
    }

    if args.candidates {
        let pool = enchanter.candidates(&mut item, args.power);
        let total = pool.total_weight();
        for candidate in &pool {
            println!(
                "{:>3}/{total}  {}",
                candidate.weight(),
                describe(candidate.data())
            );
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut random = RandomSource::new(seed, args.legacy);
    info!(seed, item = %item, power = args.power, "Rolling enchantments");

    let result = enchanter.enchant(&mut item, args.power, &mut random);
    println!(
        "{}: {}",
        item.identifier().unwrap_or("unknown"),
        describe(&result)
    );
    Ok(())
}

fn describe(enchantments: &Enchantments) -> String {
    if enchantments.is_empty() {
        return "none".to_string();
    }
    let mut entries: Vec<_> = enchantments.iter().collect();
    entries.sort();
    entries
        .into_iter()
        .map(|(id, level)| match id.name() {
            Some(name) => format!("{name} {level}"),
            None => format!("#{id} {level}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
