//! Command line option parsing.

use std::path::PathBuf;

use gridset::math::GridBox;
use gridset::op::{parse_coordinate, parse_region};

use crate::logging::LoggingArgs;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct GridsetArgs {
    /// File listing one operation per line, such as `on x=10..12,y=10..12,z=10..12`.
    ///
    /// If absent or `-`, operations are read from standard input.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Region counted for the initialization report.
    ///
    /// Either a single range such as `-50..50`, used for all three axes, or one range per
    /// axis such as `x=0..10,y=-5..5,z=0..0`.
    #[arg(
        long = "window",
        value_name = "RANGE",
        default_value = "-50..50",
        allow_hyphen_values = true,
        value_parser = parse_window,
    )]
    pub window: GridBox<3>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Parses the value of `--window`.
fn parse_window(text: &str) -> Result<GridBox<3>, String> {
    if text.contains('=') {
        return parse_region(text).map_err(|e| e.to_string());
    }
    let (lower, upper) = text
        .split_once("..")
        .ok_or_else(|| format!("expected a range such as \"-50..50\", found {text:?}"))?;
    let lower = parse_coordinate(lower).map_err(|e| e.to_string())?;
    let upper = parse_coordinate(upper).map_err(|e| e.to_string())?;
    Ok(GridBox::from_extents([(lower, upper); 3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn default_window() {
        let args = GridsetArgs::try_parse_from(["gridset"]).unwrap();
        assert_eq!(args.window, GridBox::from_extents([(-50, 50); 3]));
        assert_eq!(args.input, None);
        assert!(!args.logging.verbose);
    }

    #[test]
    fn window_forms() {
        assert_eq!(
            parse_window("-3..3"),
            Ok(GridBox::from_extents([(-3, 3); 3]))
        );
        assert_eq!(
            parse_window("x=0..1,y=2..3,z=5..4"),
            Ok(GridBox::from_extents([(0, 1), (2, 3), (4, 5)]))
        );
        assert!(parse_window("0-3").is_err());
        assert!(parse_window("x=0..1").is_err());
    }

    #[test]
    fn all_arguments() {
        let args =
            GridsetArgs::try_parse_from(["gridset", "-v", "--window", "-1..1", "ops.txt"])
                .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("ops.txt")));
        assert_eq!(args.window, GridBox::from_extents([(-1, 1); 3]));
        assert!(args.logging.verbose);
    }
}
