use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use nsec3_crack::{Error, group_challenges, load_records, worker};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nsec3-crack")]
#[command(about = "Test dictionary candidates against captured NSEC3 hash records")]
struct Args {
    /// File of $NSEC3$ records, one per line (#/; comments allowed)
    records: PathBuf,

    /// Wordlist of candidate labels, one per line
    wordlist: PathBuf,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Disable progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let challenges = load_records(&args.records)?;
    let groups = group_challenges(challenges);
    let target_count: usize = groups.iter().map(|g| g.targets.len()).sum();
    info!(
        targets = target_count,
        groups = groups.len(),
        "loaded challenges from {:?}",
        args.records
    );

    let words: Vec<String> = fs::read_to_string(&args.wordlist)?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(Error::EmptyWordlist { path: args.wordlist.clone() });
    }
    let total = words.len() as u64;

    let workers = args
        .workers
        .unwrap_or_else(|| thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
        .max(1);

    let progress_bar = if !args.no_progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let progress_counter = AtomicU64::new(0);
    let (matches_tx, matches_rx) = mpsc::channel();
    let mut found = 0u64;

    thread::scope(|s| {
        let chunk_size = words.len().div_ceil(workers);
        for chunk in words.chunks(chunk_size) {
            let tx = matches_tx.clone();
            let groups = &groups;
            let progress = &progress_counter;
            s.spawn(move || worker(groups, chunk, progress, &tx));
        }
        drop(matches_tx);

        // progress updater; exits once every candidate is accounted for
        if let Some(pb) = progress_bar.clone() {
            let progress = &progress_counter;
            s.spawn(move || {
                loop {
                    thread::sleep(Duration::from_millis(100));
                    let current = progress.load(Ordering::Relaxed);
                    pb.set_position(current);
                    if current >= total {
                        break;
                    }
                }
            });
        }

        // collect matches until every worker has hung up
        for m in matches_rx {
            let line = format!("{}:{}", m.record, m.candidate);
            match &progress_bar {
                Some(pb) => pb.println(line),
                None => println!("{line}"),
            }
            found += 1;
        }
    });

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    info!(found, candidates = total, "finished");
    if found == 0 {
        // mirror the single-lookup tool: nothing cracked exits nonzero
        std::process::exit(1);
    }
    Ok(())
}
