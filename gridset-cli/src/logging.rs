//! Logging to stderr.

use anyhow::Context as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct LoggingArgs {
    /// Log every operation as it is applied, not just summaries.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}

/// Install a [`log`] global logger based on user-provided `options`.
pub(crate) fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    use log::LevelFilter::{Debug, Error, Off, Trace};

    let &LoggingArgs { verbose } = options;
    let level = match verbose {
        false => Debug,
        true => Trace,
    };

    let logger = simplelog::WriteLogger::new(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(Error)
            .build(),
        std::io::stderr(),
    );
    log::set_boxed_logger(logger).context("failed to initialize logging")?;
    log::set_max_level(level);
    Ok(())
}
