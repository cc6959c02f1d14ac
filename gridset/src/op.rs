//! Textual lists of fill and clear operations.
//!
//! Each operation is one line: a mode, `on` or `off`, followed by a
//! comma-separated range for every axis, labeled `x`, `y`, `z`, `w`, then `a4`,
//! `a5`, and so on. Both bounds are inclusive.
//!
//! ```text
//! on x=10..12,y=10..12,z=10..12
//! off x=9..11,y=9..11,z=9..11
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use itertools::Itertools as _;

use crate::math::{GridBox, GridCoordinate};

/// Whether an [`Operation`] adds cells to the region or removes them.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Every cell of the box becomes part of the region. Written `on`.
    Fill,
    /// Every cell of the box stops being part of the region. Written `off`.
    Clear,
}

impl Mode {
    fn keyword(self) -> &'static str {
        match self {
            Mode::Fill => "on",
            Mode::Clear => "off",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Mode {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Mode::Fill),
            "off" => Ok(Mode::Clear),
            _ => Err(ParseOperationError::UnknownMode(s.to_string())),
        }
    }
}

/// One step of a sequence applied to a [`RegionSet`](crate::RegionSet).
///
/// The [`Display`](fmt::Display) and [`FromStr`] implementations use the line format
/// described in the [module documentation](self).
///
/// ```
/// use gridset::math::GridBox;
/// use gridset::op::{Mode, Operation};
///
/// let op: Operation<3> = "on x=-20..26,y=-36..17,z=-47..7".parse().unwrap();
/// assert_eq!(op.mode, Mode::Fill);
/// assert_eq!(op.region, GridBox::from_extents([(-20, 26), (-36, 17), (-47, 7)]));
/// assert_eq!(op.to_string(), "on x=-20..26,y=-36..17,z=-47..7");
/// ```
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Operation<const N: usize> {
    /// Whether to fill or clear.
    pub mode: Mode,
    /// The cells affected.
    pub region: GridBox<N>,
}

impl<const N: usize> Operation<N> {
    /// An operation filling `region`.
    pub const fn fill(region: GridBox<N>) -> Self {
        Self {
            mode: Mode::Fill,
            region,
        }
    }

    /// An operation clearing `region`.
    pub const fn clear(region: GridBox<N>) -> Self {
        Self {
            mode: Mode::Clear,
            region,
        }
    }
}

impl<const N: usize> fmt::Display for Operation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = (0..N).format_with(",", |axis, emit| {
            let range = self.region.axis_range(axis);
            emit(&format_args!(
                "{label}={lower}..{upper}",
                label = axis_label(axis),
                lower = range.start(),
                upper = range.end(),
            ))
        });
        if N == 0 {
            write!(f, "{}", self.mode)
        } else {
            write!(f, "{} {components}", self.mode)
        }
    }
}

impl<const N: usize> FromStr for Operation<N> {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (mode, region) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        Ok(Operation {
            mode: mode.parse()?,
            region: parse_region(region)?,
        })
    }
}

/// Parses the region part of an operation line, such as `x=10..12,y=10..12,z=10..12`.
///
/// ```
/// use gridset::math::GridBox;
/// use gridset::op::parse_region;
///
/// assert_eq!(
///     parse_region::<2>("x=-5..5, y=3..0"),
///     Ok(GridBox::from_extents([(-5, 5), (0, 3)])),
/// );
/// ```
pub fn parse_region<const N: usize>(text: &str) -> Result<GridBox<N>, ParseOperationError> {
    let components: Vec<&str> = if text.trim().is_empty() {
        Vec::new()
    } else {
        text.split(',').map(str::trim).collect()
    };
    if components.len() != N {
        return Err(ParseOperationError::ComponentCount {
            expected: N,
            found: components.len(),
        });
    }

    let mut extents = [(0, 0); N];
    for (axis, (component, extent)) in components.into_iter().zip(&mut extents).enumerate() {
        let (label, range) = component
            .split_once('=')
            .ok_or_else(|| ParseOperationError::MalformedRange(component.to_string()))?;
        let expected_label = axis_label(axis);
        if label.trim() != expected_label {
            return Err(ParseOperationError::AxisLabel {
                expected: expected_label.into_owned(),
                found: label.trim().to_string(),
            });
        }
        let (lower, upper) = range
            .split_once("..")
            .ok_or_else(|| ParseOperationError::MalformedRange(component.to_string()))?;
        *extent = (parse_coordinate(lower)?, parse_coordinate(upper)?);
    }
    Ok(GridBox::from_extents(extents))
}

/// Parses one integer bound, ignoring surrounding whitespace.
pub fn parse_coordinate(text: &str) -> Result<GridCoordinate, ParseOperationError> {
    let text = text.trim();
    text.parse().map_err(|source| ParseOperationError::Coordinate {
        text: text.to_string(),
        source,
    })
}

/// The label of the given axis in the text format.
///
/// ```
/// use gridset::op::axis_label;
///
/// assert_eq!(axis_label(0), "x");
/// assert_eq!(axis_label(3), "w");
/// assert_eq!(axis_label(4), "a4");
/// ```
pub fn axis_label(axis: usize) -> Cow<'static, str> {
    match axis {
        0 => Cow::Borrowed("x"),
        1 => Cow::Borrowed("y"),
        2 => Cow::Borrowed("z"),
        3 => Cow::Borrowed("w"),
        _ => Cow::Owned(format!("a{axis}")),
    }
}

/// Parses a list of operations, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Parsing stops at the first
/// line which is not a valid [`Operation`].
///
/// ```
/// use gridset::op::{Mode, parse_operations};
///
/// let ops = parse_operations::<2>("# comment\non x=0..1,y=0..1\n\noff x=1..1,y=1..1\n")?;
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[1].mode, Mode::Clear);
///
/// let error = parse_operations::<2>("on x=0..1,y=0..1\noff x=0..1").unwrap_err();
/// assert_eq!(error.line(), 2);
/// # Ok::<(), gridset::op::ParseOperationsError>(())
/// ```
pub fn parse_operations<const N: usize>(
    text: &str,
) -> Result<Vec<Operation<N>>, ParseOperationsError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            line.parse().map_err(|source| ParseOperationsError {
                line: line_number,
                source,
            })
        })
        .collect()
}

/// Error from parsing a single [`Operation`] or [`Mode`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseOperationError {
    /// The mode was neither `on` nor `off`.
    #[error("unknown mode {0:?}; expected \"on\" or \"off\"")]
    UnknownMode(String),

    /// The number of comma-separated ranges did not match the number of axes.
    #[error("expected {expected} axis ranges, found {found}")]
    ComponentCount {
        /// Number of axes.
        expected: usize,
        /// Number of ranges present.
        found: usize,
    },

    /// A range was labeled with the wrong axis name, or the axes were out of order.
    #[error("expected range for axis {expected:?}, found {found:?}")]
    AxisLabel {
        /// Label of the axis expected at this position.
        expected: String,
        /// Label actually present.
        found: String,
    },

    /// A range was not of the form `label=lower..upper`.
    #[error("malformed range {0:?}; expected the form \"x=lower..upper\"")]
    MalformedRange(String),

    /// A bound was not an integer in the coordinate range.
    #[error("invalid coordinate {text:?}")]
    Coordinate {
        /// The offending text.
        text: String,
        /// Why it could not be parsed.
        #[source]
        source: ParseIntError,
    },
}

/// Error from [`parse_operations()`], identifying the offending line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid operation on line {line}")]
pub struct ParseOperationsError {
    line: usize,
    #[source]
    source: ParseOperationError,
}

impl ParseOperationsError {
    /// The 1-based number of the line which could not be parsed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// What was wrong with the line.
    pub fn error(&self) -> &ParseOperationError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_sample_line() {
        let op: Operation<3> = "off x=9..11,y=9..11,z=9..11".parse().unwrap();
        assert_eq!(
            op,
            Operation::clear(GridBox::from_extents([(9, 11), (9, 11), (9, 11)]))
        );
    }

    #[test]
    fn whitespace_and_reversed_bounds_are_tolerated() {
        let op: Operation<2> = "  on   x = 5 .. -3 , y=0..0 ".parse().unwrap();
        assert_eq!(op, Operation::fill(GridBox::from_extents([(-3, 5), (0, 0)])));
    }

    #[test]
    fn display_then_parse_higher_dimensions() {
        let op = Operation::fill(GridBox::from_extents([(0, 1), (2, 3), (4, 5), (6, 7), (8, 9)]));
        let text = op.to_string();
        assert_eq!(text, "on x=0..1,y=2..3,z=4..5,w=6..7,a4=8..9");
        assert_eq!(text.parse::<Operation<5>>(), Ok(op));
    }

    #[test]
    fn zero_dimensional() {
        let op: Operation<0> = "off".parse().unwrap();
        assert_eq!(op.to_string(), "off");
    }

    #[test]
    fn errors() {
        assert_eq!(
            "of x=0..1".parse::<Operation<1>>(),
            Err(ParseOperationError::UnknownMode("of".into()))
        );
        assert_eq!(
            "on x=0..1,y=0..1".parse::<Operation<3>>(),
            Err(ParseOperationError::ComponentCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "on".parse::<Operation<3>>(),
            Err(ParseOperationError::ComponentCount {
                expected: 3,
                found: 0
            })
        );
        assert_eq!(
            "on y=0..1,x=0..1".parse::<Operation<2>>(),
            Err(ParseOperationError::AxisLabel {
                expected: "x".into(),
                found: "y".into()
            })
        );
        assert_eq!(
            "on x=0-1".parse::<Operation<1>>(),
            Err(ParseOperationError::MalformedRange("x=0-1".into()))
        );
        assert_eq!(
            "on x0..1".parse::<Operation<1>>(),
            Err(ParseOperationError::MalformedRange("x0..1".into()))
        );
        assert!(matches!(
            "on x=0..99999999999".parse::<Operation<1>>(),
            Err(ParseOperationError::Coordinate { text, .. }) if text == "99999999999"
        ));
    }

    #[test]
    fn error_messages() {
        let error = parse_operations::<1>("on x=1..2\n\non x=1..b\n").unwrap_err();
        assert_eq!(error.line(), 3);
        assert_eq!(error.to_string(), "invalid operation on line 3");
        assert_eq!(error.error().to_string(), "invalid coordinate \"b\"");
    }

    #[test]
    fn sample_list() {
        let ops = parse_operations::<3>(
            "on x=10..12,y=10..12,z=10..12\n\
             on x=11..13,y=11..13,z=11..13\n\
             off x=9..11,y=9..11,z=9..11\n\
             on x=10..10,y=10..10,z=10..10\n",
        )
        .unwrap();
        assert_eq!(
            ops.iter().map(|op| op.mode).collect::<Vec<_>>(),
            [Mode::Fill, Mode::Fill, Mode::Clear, Mode::Fill]
        );
        assert_eq!(
            ops[3].region,
            GridBox::single_cell([10, 10, 10])
        );
    }
}
