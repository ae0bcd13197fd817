use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use sixgrep_engine::{Match, Notation};
use tracing::debug;

use crate::config::Config;
use crate::terminal::print;

pub fn scan(paths: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    let inputs = read_inputs(paths)?;
    let start_time = Instant::now();

    debug!(inputs = inputs.len(), "starting scan");

    // Scans are stateless and share nothing, so inputs go wide; output
    // stays in argument order.
    let results: Vec<(&str, Vec<Match>)> = inputs
        .par_iter()
        .map(|(name, text)| (name.as_str(), sixgrep_engine::scan(text)))
        .collect();

    let mut total = 0;
    for (name, found) in &results {
        let shown: Vec<&Match> = found
            .iter()
            .filter(|m| !cfg.ipv4_only || m.notation == Notation::Ipv6WithIpv4)
            .collect();
        total += shown.len();

        if cfg.count {
            print::count_line(name, shown.len());
            continue;
        }
        for m in shown {
            print::match_line(name, m);
        }
    }

    print::scan_summary(total, start_time.elapsed());
    Ok(())
}

/// Reads every input up front; named files first, stdin as the only input
/// when no paths are given.
fn read_inputs(paths: &[PathBuf]) -> anyhow::Result<Vec<(String, String)>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}
