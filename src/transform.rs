//! Transformation chains and their application to pen coordinates.
//!
//! A [`Chain`] is an ordered list of [`Transformation`]s. Every coordinate
//! pair of every `PD`/`PU` statement is run through the whole chain, first
//! step first. Other statements are carried over untouched.
//!
//! ```
//! use hpgl_transform::{Chain, Point};
//!
//! let chain = Chain::new().scale(2.0).translate_x(10.0);
//! assert_eq!(chain.apply(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
//!
//! // Same steps, other order, different result.
//! let chain = Chain::new().translate_x(10.0).scale(2.0);
//! assert_eq!(chain.apply(Point::new(1.0, 1.0)), Point::new(22.0, 2.0));
//! ```

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::command::Command;
use crate::geometry::{self, Point};

/// One step of a chain, with its magnitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transformation {
    /// Move along x by the given plotter units.
    TranslateX(f64),
    /// Move along y.
    TranslateY(f64),
    /// Move along both axes by the same amount.
    Translate(f64),
    /// Rotate counter-clockwise about the origin, in degrees.
    Rotate(f64),
    /// Scale x by the given factor.
    ScaleX(f64),
    /// Scale y.
    ScaleY(f64),
    /// Scale both axes uniformly.
    Scale(f64),
    /// Shear with `kx` = magnitude, `ky` = 0.
    ShearX(f64),
    /// Shear with `kx` = 0, `ky` = magnitude.
    ShearY(f64),
    /// Shear with `kx` = `ky` = magnitude.
    Shear(f64),
}

impl Transformation {
    /// Every flag, in usage-text order.
    pub const FLAGS: [&'static str; 10] = [
        "-T", "-Tx", "-Ty", "-R", "-S", "-Sx", "-Sy", "-C", "-Cx", "-Cy",
    ];

    /// Look up a step by its command-line flag. `None` for unknown flags.
    pub fn from_flag(flag: &str, magnitude: f64) -> Option<Self> {
        let t = match flag {
            "-T" => Self::Translate(magnitude),
            "-Tx" => Self::TranslateX(magnitude),
            "-Ty" => Self::TranslateY(magnitude),
            "-R" => Self::Rotate(magnitude),
            "-S" => Self::Scale(magnitude),
            "-Sx" => Self::ScaleX(magnitude),
            "-Sy" => Self::ScaleY(magnitude),
            "-C" => Self::Shear(magnitude),
            "-Cx" => Self::ShearX(magnitude),
            "-Cy" => Self::ShearY(magnitude),
            _ => return None,
        };
        Some(t)
    }

    /// The command-line flag selecting this step.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Translate(_) => "-T",
            Self::TranslateX(_) => "-Tx",
            Self::TranslateY(_) => "-Ty",
            Self::Rotate(_) => "-R",
            Self::Scale(_) => "-S",
            Self::ScaleX(_) => "-Sx",
            Self::ScaleY(_) => "-Sy",
            Self::Shear(_) => "-C",
            Self::ShearX(_) => "-Cx",
            Self::ShearY(_) => "-Cy",
        }
    }

    /// The step's magnitude.
    pub fn magnitude(self) -> f64 {
        match self {
            Self::TranslateX(m)
            | Self::TranslateY(m)
            | Self::Translate(m)
            | Self::Rotate(m)
            | Self::ScaleX(m)
            | Self::ScaleY(m)
            | Self::Scale(m)
            | Self::ShearX(m)
            | Self::ShearY(m)
            | Self::Shear(m) => m,
        }
    }

    /// Apply this single step to a point.
    pub fn apply(self, p: Point) -> Point {
        match self {
            Self::TranslateX(m) => geometry::translate(m, 0.0, p),
            Self::TranslateY(m) => geometry::translate(0.0, m, p),
            Self::Translate(m) => geometry::translate(m, m, p),
            Self::Rotate(m) => geometry::rotate(m, p),
            Self::ScaleX(m) => geometry::scale(m, 1.0, p),
            Self::ScaleY(m) => geometry::scale(1.0, m, p),
            Self::Scale(m) => geometry::scale(m, m, p),
            Self::ShearX(m) => geometry::shear(m, 0.0, p),
            Self::ShearY(m) => geometry::shear(0.0, m, p),
            Self::Shear(m) => geometry::shear(m, m, p),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.magnitude())
    }
}

/// Ordered sequence of transformations.
///
/// Order is exactly the order steps were added; nothing is merged or
/// reordered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    steps: Vec<Transformation>,
}

impl Chain {
    /// Empty chain (identity).
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn push(&mut self, step: Transformation) {
        self.steps.push(step);
    }

    /// Append a step, builder style.
    pub fn then(mut self, step: Transformation) -> Self {
        self.steps.push(step);
        self
    }

    /// Append [`Transformation::Translate`].
    pub fn translate(self, m: f64) -> Self {
        self.then(Transformation::Translate(m))
    }

    /// Append [`Transformation::TranslateX`].
    pub fn translate_x(self, m: f64) -> Self {
        self.then(Transformation::TranslateX(m))
    }

    /// Append [`Transformation::TranslateY`].
    pub fn translate_y(self, m: f64) -> Self {
        self.then(Transformation::TranslateY(m))
    }

    /// Append [`Transformation::Rotate`].
    pub fn rotate(self, degrees: f64) -> Self {
        self.then(Transformation::Rotate(degrees))
    }

    /// Append [`Transformation::Scale`].
    pub fn scale(self, m: f64) -> Self {
        self.then(Transformation::Scale(m))
    }

    /// Append [`Transformation::ScaleX`].
    pub fn scale_x(self, m: f64) -> Self {
        self.then(Transformation::ScaleX(m))
    }

    /// Append [`Transformation::ScaleY`].
    pub fn scale_y(self, m: f64) -> Self {
        self.then(Transformation::ScaleY(m))
    }

    /// Append [`Transformation::Shear`].
    pub fn shear(self, m: f64) -> Self {
        self.then(Transformation::Shear(m))
    }

    /// Append [`Transformation::ShearX`].
    pub fn shear_x(self, m: f64) -> Self {
        self.then(Transformation::ShearX(m))
    }

    /// Append [`Transformation::ShearY`].
    pub fn shear_y(self, m: f64) -> Self {
        self.then(Transformation::ShearY(m))
    }

    /// The steps in application order.
    pub fn steps(&self) -> &[Transformation] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps. Only the empty chain is an identity;
    /// steps like `-T 0` are still applied.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run a point through every step in order.
    pub fn apply(&self, p: Point) -> Point {
        self.steps.iter().fold(p, |p, step| step.apply(p))
    }

    /// Transform a command stream into a new, independent stream.
    pub fn transform(&self, commands: &[Command]) -> Vec<Command> {
        transform(commands, self)
    }
}

impl FromIterator<Transformation> for Chain {
    fn from_iter<I: IntoIterator<Item = Transformation>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Extend<Transformation> for Chain {
    fn extend<I: IntoIterator<Item = Transformation>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Apply `chain` to every coordinate pair of every `PD`/`PU` statement.
///
/// The output has the same length and opcodes as the input. Arguments are
/// taken in pairs from index 0; an unpaired final value is dropped.
pub fn transform(commands: &[Command], chain: &Chain) -> Vec<Command> {
    let out: Vec<Command> = commands
        .iter()
        .enumerate()
        .map(|(index, cmd)| {
            if cmd.is_pen_motion() {
                transform_pen_motion(index, cmd, chain)
            } else {
                cmd.clone()
            }
        })
        .collect();

    debug!(statements = out.len(), steps = chain.len(), "transformed HPGL document");
    out
}

fn transform_pen_motion(index: usize, cmd: &Command, chain: &Chain) -> Command {
    let pairs = cmd.args.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        debug!(
            index,
            mnemonic = %cmd.mnemonic,
            dropped = pairs.remainder()[0],
            "dropping unpaired trailing coordinate"
        );
    }

    let mut args = Vec::with_capacity(cmd.args.len() & !1);
    for pair in pairs {
        let (x, y): (f64, f64) = chain.apply((pair[0], pair[1]).into()).into();
        args.push(x);
        args.push(y);
    }
    trace!(
        index,
        mnemonic = %cmd.mnemonic,
        points = args.len() / 2,
        "transformed pen motion"
    );

    Command::new(cmd.mnemonic, args)
}
