//! Reports how many cells remain filled after a list of fill and clear operations
//! on three-dimensional boxes.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::Path;

use anyhow::Context as _;
use clap::Parser as _;

use gridset::RegionSet;
use gridset::op::parse_operations;

mod command_options;
use command_options::GridsetArgs;
mod logging;

fn main() -> Result<(), anyhow::Error> {
    let GridsetArgs {
        input,
        window,
        logging,
    } = GridsetArgs::parse();
    logging::install(&logging)?;

    let (source_name, text) = read_input(input.as_deref())?;
    let operations = parse_operations::<3>(&text)
        .with_context(|| format!("failed to parse operations from {source_name}"))?;
    log::debug!("read {} operations from {source_name}", operations.len());

    let set: RegionSet<3> = operations.into_iter().collect();
    log::debug!("final region consists of {} boxes", set.len());

    let init_count = set
        .volume_within(window)
        .context("cell count within the window is too large to represent")?;
    let total_count = set
        .volume()
        .context("total cell count is too large to represent")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "  Init procedure : {init_count} Cubes on")?;
    writeln!(stdout, "Reboot procedure : {total_count} Cubes on")?;
    stdout.flush()?;
    Ok(())
}

/// Reads the whole input, from the named file or from stdin, and returns a
/// description of where it came from along with the text.
fn read_input(path: Option<&Path>) -> Result<(String, String), anyhow::Error> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok((String::from("standard input"), text))
        }
    }
}
