use std::io::Read as _;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::OsRng;

use mnemosss::cli::{Cli, Commands};
use mnemosss::commands;
use mnemosss::domain::SplitConfig;
use mnemosss::parser::parse_share_block;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            long,
        } => {
            let config = SplitConfig::new(threshold, shares)?;
            let outcome = commands::split(config, long, &mut OsRng)?;

            println!("Generated secret ({} bits of field):", outcome.prime_bit_length);
            println!("{}\n", outcome.secret);

            println!(
                "Created {} shares (threshold: {})",
                outcome.shares.len(),
                *config.threshold()
            );
            println!("You need at least {} shares to reconstruct the secret.\n", *config.threshold());

            for (idx, share) in outcome.shares.iter().enumerate() {
                println!("Share #{}:", idx + 1);
                println!("{share}");
                println!();
            }
        }
        Commands::Combine { input } => {
            let text = if input == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read shares from stdin")?;
                buf
            } else {
                std::fs::read_to_string(&input)
                    .with_context(|| format!("Failed to read shares from '{input}'"))?
            };

            let shares = parse_share_block(&text);
            let secret = commands::combine(&shares)?;

            println!("Successfully reconstructed secret:");
            println!("{secret}");
        }
    }

    Ok(())
}
