use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::HumanBytes;

use whlstrip_archive::{Scratch, extract_wheel, repack_dir};
use whlstrip_tool::Stripper;

pub struct RunReport {
    pub stripped: usize,
    pub before: u64,
    pub after: u64,
}

/// Extract the wheel into a scratch directory, strip every shared
/// library in it, and repack over the original path. The scratch
/// directory is removed on every exit path.
pub fn run(wheel: &Path, stripper: &Stripper, quiet: bool) -> Result<RunReport> {
    let wheel = wheel
        .canonicalize()
        .with_context(|| format!("cannot resolve wheel path '{}'", wheel.display()))?;

    let scratch = Scratch::new().context("failed to create scratch directory")?;

    let reader =
        File::open(&wheel).with_context(|| format!("cannot open '{}'", wheel.display()))?;
    let report = extract_wheel(reader, scratch.path())
        .with_context(|| format!("failed to extract '{}'", wheel.display()))?;
    if !quiet {
        println!(
            "{} {} members, {}",
            style("unpacked").cyan().bold(),
            report.entry_count,
            HumanBytes(report.total_bytes),
        );
    }

    let outcomes = stripper
        .strip_tree(scratch.path())
        .with_context(|| format!("strip tool failed on '{}'", wheel.display()))?;

    let mut before = 0u64;
    let mut after = 0u64;
    for outcome in &outcomes {
        before += outcome.before;
        after += outcome.after;
        if !quiet {
            println!(
                "{} {}: {} -> {}",
                style("stripped").green().bold(),
                outcome.path.display(),
                HumanBytes(outcome.before),
                HumanBytes(outcome.after),
            );
        }
    }

    repack_dir(scratch.path(), &wheel)
        .with_context(|| format!("failed to repack '{}'", wheel.display()))?;

    scratch
        .close()
        .context("failed to remove scratch directory")?;

    Ok(RunReport {
        stripped: outcomes.len(),
        before,
        after,
    })
}
