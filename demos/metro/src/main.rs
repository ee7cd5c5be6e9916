//! metro — the §4.7 coordinator.
//!
//! Reads the input file named on the command line, builds the shared
//! network and run configuration (§6), then fans out one OS thread per
//! worker — each running [`metro_sim::Worker`]'s tick loop over a
//! [`metro_transfer::ChannelLink`] mesh standing in for the real
//! implementation's MPI ranks (§9's concurrency-runtime supplement).
//! Worker 0's snapshot lines are printed to standard output as they're
//! produced, in ascending tick order (§6).

use std::env;
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use anyhow::Result;

use metro_sim::{NoopObserver, WorkerBuilder, WorkerObserver};
use metro_transfer::{ChannelLink, DummyLink, WorkerLink};

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "metro".to_string());

    let Some(path) = args.next() else {
        eprintln!("{program} <input_file>");
        return ExitCode::from(1);
    };

    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to open {path}: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

/// Worker count: one thread per available core, but never more than one
/// per segment — extra workers would only own an empty partition
/// (`metro_network::partition_bounds`) and add threads for nothing.
fn worker_count(segment_count: usize) -> usize {
    let cores = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    cores.min(segment_count).max(1)
}

fn run(input_text: &str) -> Result<()> {
    let parsed = metro_io::parse_input(input_text)?;
    let network = Arc::new(parsed.network);
    let num_workers = worker_count(network.segment_count());
    let config = parsed.config_without_workers.into_run_config(num_workers);

    println!(
        "metro: {} stations, {} segments, {} ticks, {} workers",
        network.station_count(),
        network.segment_count(),
        config.total_ticks,
        num_workers
    );

    if num_workers == 1 {
        let worker = WorkerBuilder::new(Arc::clone(&network), config, DummyLink).build()?;
        run_single(worker)?;
    } else {
        run_mesh(network, config, num_workers)?;
    }

    Ok(())
}

fn run_single(mut worker: metro_sim::Worker<DummyLink>) -> Result<()> {
    let mut observer = PrintObserver;
    worker.run(&mut observer)?;
    Ok(())
}

fn run_mesh(network: Arc<metro_network::Network>, config: metro_core::RunConfig, num_workers: usize) -> Result<()> {
    let links = ChannelLink::create_mesh(num_workers);

    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(num_workers);
        for link in links {
            let network = Arc::clone(&network);
            let config = config.clone();
            handles.push(scope.spawn(move || -> Result<()> {
                let is_coordinator = link.worker_id() == metro_core::WorkerId(0);
                let mut worker = WorkerBuilder::new(network, config, link).build()?;
                if is_coordinator {
                    let mut observer = PrintObserver;
                    worker.run(&mut observer)?;
                } else {
                    let mut observer = NoopObserver;
                    worker.run(&mut observer)?;
                }
                Ok(())
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked")?;
        }
        Ok(())
    })
}

/// Prints each assembled snapshot line as worker 0 produces it (§4.6, §6).
struct PrintObserver;

impl WorkerObserver for PrintObserver {
    fn on_snapshot(&mut self, _tick: metro_core::Tick, line: &str) {
        println!("{line}");
    }
}
