//! Single SVG path instructions
//!
//! A [`Command`] is one letter code plus the numbers that follow it in the
//! `d` attribute. The letter's case (absolute or relative) is fixed when the
//! command is created.

use std::fmt;

use crate::format::{format_number, NumberFormat};

/// The closed set of SVG path command letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Move to (`M`/`m`)
    MoveTo,
    /// Close path (`Z`/`z`)
    Close,
    /// Line to (`L`/`l`)
    LineTo,
    /// Horizontal line (`H`/`h`)
    HorizontalLineTo,
    /// Vertical line (`V`/`v`)
    VerticalLineTo,
    /// Cubic Bezier curve (`C`/`c`)
    CubicTo,
    /// Smooth cubic Bezier, first control point reflected (`S`/`s`)
    SmoothCubicTo,
    /// Quadratic Bezier curve (`Q`/`q`)
    QuadraticTo,
    /// Smooth quadratic Bezier, control point reflected (`T`/`t`)
    SmoothQuadraticTo,
    /// Elliptical arc (`A`/`a`)
    ArcTo,
}

impl CommandKind {
    /// Every command kind, in SVG letter order M Z L H V C S Q T A
    pub const ALL: [CommandKind; 10] = [
        CommandKind::MoveTo,
        CommandKind::Close,
        CommandKind::LineTo,
        CommandKind::HorizontalLineTo,
        CommandKind::VerticalLineTo,
        CommandKind::CubicTo,
        CommandKind::SmoothCubicTo,
        CommandKind::QuadraticTo,
        CommandKind::SmoothQuadraticTo,
        CommandKind::ArcTo,
    ];

    /// The canonical (uppercase) letter
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::Close => 'Z',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadraticTo => 'Q',
            CommandKind::SmoothQuadraticTo => 'T',
            CommandKind::ArcTo => 'A',
        }
    }

    /// Number of arguments SVG expects for one instance of this command
    ///
    /// Arcs take `rx ry rotation large-arc-flag sweep-flag x y`.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Close => 0,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticTo => 2,
            CommandKind::SmoothCubicTo | CommandKind::QuadraticTo => 4,
            CommandKind::CubicTo => 6,
            CommandKind::ArcTo => 7,
        }
    }
}

/// Whether coordinates are absolute (uppercase) or relative (lowercase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Absolute,
    Relative,
}

impl Mode {
    /// The letter for `kind` in this mode's case
    pub fn apply(self, kind: CommandKind) -> char {
        match self {
            Mode::Absolute => kind.letter(),
            Mode::Relative => kind.letter().to_ascii_lowercase(),
        }
    }
}

/// One path instruction: a cased letter code followed by its arguments
///
/// Arity is not enforced here; whatever arguments were supplied are kept
/// and rendered. See [`crate::PathBuilder::validate`] for the strict check.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: CommandKind,
    mode: Mode,
    args: Vec<f64>,
}

impl Command {
    pub fn new(kind: CommandKind, mode: Mode, args: Vec<f64>) -> Self {
        Self {
            kind,
            mode,
            args,
        }
    }

    /// Uppercase variant of `kind`
    pub fn absolute(kind: CommandKind, args: Vec<f64>) -> Self {
        Self::new(kind, Mode::Absolute, args)
    }

    /// Lowercase variant of `kind`
    pub fn relative(kind: CommandKind, args: Vec<f64>) -> Self {
        Self::new(kind, Mode::Relative, args)
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The letter as it appears in the output, e.g. `'M'` or `'m'`
    pub fn code(&self) -> char {
        self.mode.apply(self.kind)
    }

    pub fn args(&self) -> &[f64] {
        &self.args
    }

    /// Render as `"<code> <arg> <arg> ..."` with default number formatting
    pub fn render(&self) -> String {
        self.render_with(NumberFormat::Default)
    }

    pub(crate) fn render_with(&self, format: NumberFormat) -> String {
        let mut out = String::new();
        self.write_to(&mut out, format);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String, format: NumberFormat) {
        out.push(self.code());
        for arg in &self.args {
            out.push(' ');
            out.push_str(&format_number(*arg, format));
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
