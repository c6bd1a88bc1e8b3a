//! Cycle-accurate 4-bit bus controller simulator CLI.
//!
//! This binary loads a tick-by-tick stimulus file (and optionally a JSON
//! config), runs it through the controller, and reports the final result
//! bundle plus run statistics.

use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

use nybble_core::config::Config;
use nybble_core::sim::{Simulator, stimulus};

#[derive(Parser, Debug)]
#[command(
    name = "nybble",
    author,
    version,
    about = "Cycle-accurate 4-bit bus controller simulator",
    long_about = "Drive a stimulus file through the debounce filter, capture sequencer, and \
execution unit, one clock edge per record.\n\nExamples:\n  nybble run -f stim.json\n  nybble run -f stim.json -c config.json --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Force TRACE-level logging (overrides RUST_LOG).
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stimulus file through the controller.
    Run {
        /// Stimulus file (JSON array of tick records).
        #[arg(short, long)]
        file: PathBuf,

        /// Configuration file (JSON); defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { file, config } => cmd_run(&file, config.as_deref()),
    }
}

/// Runs the simulator over the stimulus and prints the final state.
fn cmd_run(file: &std::path::Path, config_path: Option<&std::path::Path>) {
    let config = config_path.map_or_else(Config::default, |path| {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading config {}: {}", path.display(), e);
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("Error parsing config {}: {}", path.display(), e);
            process::exit(1);
        })
    });

    println!(
        "Configuration: debounce window {} ticks (~{:.0} ms at {} Hz)",
        config.debounce.window_ticks,
        config.debounce.window_millis(),
        config.debounce.sample_rate_hz
    );
    println!();

    let ticks = stimulus::load(file).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    println!("[*] Stimulus: {} ({} ticks)", file.display(), ticks.len());

    let mut sim = Simulator::new(&config);
    let outputs = sim.run(&ticks);

    if let Some(last) = outputs.last() {
        let r = last.result;
        println!();
        println!("[*] Final state: {:?}", last.state);
        println!(
            "    result={} carry={} overflow={} zero={} sign={}",
            r.result,
            u8::from(r.carry),
            u8::from(r.overflow),
            u8::from(r.zero),
            u8::from(r.sign)
        );
    } else {
        println!("[*] Empty stimulus; nothing to simulate");
    }

    sim.stats.print();
}
