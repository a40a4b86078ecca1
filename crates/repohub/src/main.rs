//! RepoHub - Entry Point

// Force-link repohub-providers to ensure linkme registrations are included
extern crate repohub_providers;

use clap::Parser;
use repohub::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
