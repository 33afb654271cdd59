use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::HumanBytes;

use crate::cli::App;

mod cli;
mod run;

fn main() -> Result<()> {
    let app = App::parse();

    let stripper = whlstrip_tool::Stripper::resolve(&app.strip_program, app.strip_args.clone())
        .with_context(|| format!("cannot resolve strip program '{}'", app.strip_program))?;

    let report = run::run(&app.wheel, &stripper, app.quiet)?;

    println!(
        "{} {} libraries, {} -> {}",
        style("whlstrip").cyan().bold(),
        report.stripped,
        HumanBytes(report.before),
        HumanBytes(report.after),
    );
    Ok(())
}
