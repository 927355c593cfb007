use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use log::info;
use m6800_core::cpu::Verification;
use m6800_core::cpu::m6800::{Alu8, M6800};
use m6800_cpu_validation::formal;

mod config;
mod trace;

use config::SimConfig;
use trace::FakeMemory;

const DEFAULT_CYCLES: usize = 16;

/// Clock a 6800 core against a memory image and print every bus cycle.
#[derive(Parser, Debug)]
#[command(name = "m6800-sim", version)]
struct Args {
    /// TOML memory image; the built-in demo runs without one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of clocks to run.
    #[arg(long)]
    cycles: Option<usize>,

    /// Attach a property checker by name (see --list-checks).
    #[arg(long)]
    insn: Option<String>,

    /// Also write the trace as JSON.
    #[arg(long, value_name = "PATH")]
    trace_json: Option<PathBuf>,

    /// List the available property checkers and exit.
    #[arg(long)]
    list_checks: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list_checks {
        for entry in formal::all() {
            println!("{:<8} {}", entry.name, entry.description);
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::demo(),
    };
    let cycles = args.cycles.or(config.cycles).unwrap_or(DEFAULT_CYCLES);

    let verification: Option<Box<dyn Verification>> = match &args.insn {
        Some(name) => {
            let entry = formal::find(name)
                .ok_or_else(|| anyhow!("unknown check '{name}' (try --list-checks)"))?;
            info!("checking {}", entry.description);
            Some((entry.create)())
        }
        None => None,
    };

    let mut memory = FakeMemory::new(config.image());
    let mut cpu = M6800::with_parts(Alu8, verification);
    let rows = trace::run(&mut cpu, &mut memory, cycles);

    println!("clock  addr  dd  r/w   pc       instr");
    for row in &rows {
        println!("{}", row.display());
    }

    if let Some(path) = &args.trace_json {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &rows)?;
        info!("wrote {} cycles to {}", rows.len(), path.display());
    }

    if let Some(hook) = cpu.formal() {
        let failures = hook.failures();
        info!(
            "{} instruction(s) checked, {} failure(s)",
            hook.checked(),
            failures.len()
        );
        if !failures.is_empty() {
            bail!("{} property check(s) failed", failures.len());
        }
    }

    Ok(())
}
