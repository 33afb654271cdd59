use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "whlstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip debug symbols from shared libraries inside a wheel",
    long_about = None
)]
pub struct App {
    /// Wheel archive to strip in place
    pub wheel: PathBuf,

    /// Strip program to invoke
    #[arg(long, default_value = whlstrip_tool::Stripper::DEFAULT_PROGRAM)]
    pub strip_program: String,

    /// Suppress per-library size lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra flags forwarded verbatim to the strip program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub strip_args: Vec<String>,
}
