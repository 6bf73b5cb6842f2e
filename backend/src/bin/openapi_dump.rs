//! Write the OpenAPI document as pretty JSON, to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use cookbook::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the cookbook OpenAPI document",
    version
)]
struct CliArgs {
    /// Write to this path instead of stdout.
    #[arg(long, short, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)?;
    match args.output {
        Some(path) => fs::write(path, format!("{json}\n")),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
