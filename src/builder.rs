//! Chainable path builder
//!
//! [`PathBuilder`] collects [`Command`]s in call order and renders them to a
//! `d` attribute string. Sugar methods (`to`, `line`, `bezier3`, ...) pick
//! the letter case from the builder's current [`Mode`]; the raw per-letter
//! methods (`M`, `m`, `L`, `l`, ...) always use the case of their name.

use std::fmt;

use crate::args::{CurveArgs, CurveForm};
use crate::command::{Command, CommandKind, Mode};
use crate::config::RenderConfig;
use crate::error::PathError;
use crate::format::NumberFormat;
use crate::point::Point;

/// Accumulates path commands and renders them as SVG path data
///
/// # Example
///
/// ```rust
/// use svg_path_builder::PathBuilder;
///
/// let d = PathBuilder::new()
///     .to((0.0, 0.0))
///     .line((10.0, 0.0))
///     .line((10.0, 10.0))
///     .close()
///     .render();
///
/// assert_eq!(d, "M 0 0 L 10 0 L 10 10 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    mode: Mode,
    commands: Vec<Command>,
}

/// Generates the raw per-letter methods
macro_rules! letter_methods {
    ($($name:ident => $kind:ident, $mode:ident;)*) => {
        $(
            #[allow(non_snake_case)]
            #[doc = concat!("Append a `", stringify!($name), "` command with `args` as given.")]
            pub fn $name(&mut self, args: &[f64]) -> &mut Self {
                self.emit(CommandKind::$kind, Mode::$mode, args)
            }
        )*
    };
}

impl PathBuilder {
    /// Create an empty builder in absolute mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to relative mode: later sugar calls emit lowercase commands
    pub fn rel(&mut self) -> &mut Self {
        self.mode = Mode::Relative;
        self
    }

    /// Switch to absolute mode: later sugar calls emit uppercase commands
    pub fn abs(&mut self) -> &mut Self {
        self.mode = Mode::Absolute;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_relative(&self) -> bool {
        self.mode == Mode::Relative
    }

    /// Commands appended so far, in rendering order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a prebuilt command
    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    /// Append `kind` with an explicit case, ignoring the current mode
    pub fn emit(&mut self, kind: CommandKind, mode: Mode, args: &[f64]) -> &mut Self {
        self.push(Command::new(kind, mode, args.to_vec()))
    }

    /// Append `kind` in the case of the current mode
    ///
    /// Every sugar method goes through here, so the case is decided when the
    /// command is appended.
    fn dispatch(&mut self, kind: CommandKind, args: &[f64]) -> &mut Self {
        let mode = self.mode;
        self.emit(kind, mode, args)
    }

    /// Move the pen (`M`/`m`)
    pub fn to(&mut self, p: impl Into<Point>) -> &mut Self {
        let p = p.into();
        self.dispatch(CommandKind::MoveTo, &[p.x, p.y])
    }

    /// Straight line (`L`/`l`)
    pub fn line(&mut self, p: impl Into<Point>) -> &mut Self {
        let p = p.into();
        self.dispatch(CommandKind::LineTo, &[p.x, p.y])
    }

    /// Horizontal line (`H`/`h`)
    pub fn hline(&mut self, x: f64) -> &mut Self {
        self.dispatch(CommandKind::HorizontalLineTo, &[x])
    }

    /// Vertical line (`V`/`v`)
    pub fn vline(&mut self, y: f64) -> &mut Self {
        self.dispatch(CommandKind::VerticalLineTo, &[y])
    }

    /// Close the current subpath (`Z`/`z`)
    pub fn close(&mut self) -> &mut Self {
        self.dispatch(CommandKind::Close, &[])
    }

    /// Cubic Bezier curve
    ///
    /// Six numbers (`x1 y1 x2 y2 x y`) or three points emit `C`/`c`. Fewer
    /// emit the smooth shortcut `S`/`s` from the first four numbers or two
    /// points.
    ///
    /// ```rust
    /// use svg_path_builder::{path, Point};
    ///
    /// assert_eq!(path().bezier3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).render(), "C 1 2 3 4 5 6");
    /// assert_eq!(path().bezier3([1.0, 2.0, 3.0, 4.0]).render(), "S 1 2 3 4");
    /// assert_eq!(
    ///     path().bezier3([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).render(),
    ///     "S 1 2 3 4"
    /// );
    /// ```
    pub fn bezier3(&mut self, args: impl Into<CurveArgs>) -> &mut Self {
        match args.into().resolve(3) {
            CurveForm::Full(values) => self.dispatch(CommandKind::CubicTo, &values),
            CurveForm::Shortcut(values) => self.dispatch(CommandKind::SmoothCubicTo, &values),
        }
    }

    /// Quadratic Bezier curve
    ///
    /// Four numbers (`x1 y1 x y`) or two points emit `Q`/`q`. Fewer emit the
    /// smooth shortcut `T`/`t` with just the end point.
    pub fn bezier2(&mut self, args: impl Into<CurveArgs>) -> &mut Self {
        match args.into().resolve(2) {
            CurveForm::Full(values) => self.dispatch(CommandKind::QuadraticTo, &values),
            CurveForm::Shortcut(values) => {
                self.dispatch(CommandKind::SmoothQuadraticTo, &values)
            }
        }
    }

    /// Elliptical arc (`A`/`a`)
    ///
    /// The flags are written as given; only the end point takes point sugar.
    pub fn arc(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large: f64,
        sweep: f64,
        end: impl Into<Point>,
    ) -> &mut Self {
        let end = end.into();
        self.dispatch(
            CommandKind::ArcTo,
            &[rx, ry, rotation, large, sweep, end.x, end.y],
        )
    }

    letter_methods! {
        M => MoveTo, Absolute;
        m => MoveTo, Relative;
        Z => Close, Absolute;
        z => Close, Relative;
        L => LineTo, Absolute;
        l => LineTo, Relative;
        H => HorizontalLineTo, Absolute;
        h => HorizontalLineTo, Relative;
        V => VerticalLineTo, Absolute;
        v => VerticalLineTo, Relative;
        C => CubicTo, Absolute;
        c => CubicTo, Relative;
        S => SmoothCubicTo, Absolute;
        s => SmoothCubicTo, Relative;
        Q => QuadraticTo, Absolute;
        q => QuadraticTo, Relative;
        T => SmoothQuadraticTo, Absolute;
        t => SmoothQuadraticTo, Relative;
        A => ArcTo, Absolute;
        a => ArcTo, Relative;
    }

    /// Render the `d` string: every command, space separated
    pub fn render(&self) -> String {
        self.render_format(NumberFormat::Default)
    }

    /// Alias for [`PathBuilder::render`]
    pub fn str(&self) -> String {
        self.render()
    }

    /// Render with the number format from `config`, without validating
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.render_format(config.number_format())
    }

    /// Render with `config`, validating first when `config.strict` is set
    pub fn try_render(&self, config: &RenderConfig) -> Result<String, PathError> {
        if config.strict {
            self.validate()?;
        }
        Ok(self.render_with(config))
    }

    /// Check every command for SVG arity and finite arguments
    ///
    /// Returns the first violation in sequence order. Arc flag values and
    /// numeric ranges are not checked.
    pub fn validate(&self) -> Result<(), PathError> {
        for (index, command) in self.commands.iter().enumerate() {
            let expected = command.kind().arity();
            let found = command.args().len();
            if found != expected {
                return Err(PathError::Arity {
                    index,
                    code: command.code(),
                    expected,
                    found,
                });
            }

            if let Some((position, &value)) = command
                .args()
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite())
            {
                return Err(PathError::NonFinite {
                    index,
                    code: command.code(),
                    position,
                    value,
                });
            }
        }
        Ok(())
    }

    fn render_format(&self, format: NumberFormat) -> String {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            command.write_to(&mut d, format);
        }
        d
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(build: impl FnOnce(&mut PathBuilder)) -> String {
        let mut b = PathBuilder::new();
        build(&mut b);
        b.render()
    }

    #[test]
    fn test_new_builder_is_empty_and_absolute() {
        let b = PathBuilder::new();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.mode(), Mode::Absolute);
        assert_eq!(b.render(), "");
    }

    #[test]
    fn test_chaining_returns_same_builder() {
        let mut b = PathBuilder::new();
        let original: *const PathBuilder = &b;
        assert!(std::ptr::eq(b.to((1.0, 2.0)), original));
        assert!(std::ptr::eq(b.rel(), original));
        assert!(std::ptr::eq(b.M(&[0.0, 0.0]), original));
        assert!(std::ptr::eq(b.close(), original));
    }

    #[test]
    fn test_raw_methods_ignore_mode() {
        let mut b = PathBuilder::new();
        b.rel().M(&[1.0, 2.0]).abs().m(&[3.0, 4.0]);
        assert_eq!(b.render(), "M 1 2 m 3 4");
    }

    #[test]
    fn test_all_raw_letters_in_either_mode() {
        for relative in [false, true] {
            let mut b = PathBuilder::new();
            if relative {
                b.rel();
            } else {
                b.abs();
            }
            b.M(&[]).m(&[]).Z(&[]).z(&[]).L(&[]).l(&[]).H(&[]).h(&[]).V(&[]).v(&[]);
            b.C(&[]).c(&[]).S(&[]).s(&[]).Q(&[]).q(&[]).T(&[]).t(&[]).A(&[]).a(&[]);
            assert_eq!(b.render(), "M m Z z L l H h V v C c S s Q q T t A a");
            assert_eq!(b.is_relative(), relative);
        }
    }

    #[test]
    fn test_raw_methods_pass_args_through() {
        assert_eq!(rendered(|b| { b.H(&[1.0, 2.0, 3.0]); }), "H 1 2 3");
    }

    #[test]
    fn test_mode_affects_only_later_commands() {
        let mut b = PathBuilder::new();
        b.to((0.0, 0.0)).rel().line((5.0, 5.0));
        b.abs().line((20.0, 20.0));

        let codes: Vec<char> = b.commands().iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!['M', 'l', 'L']);
        assert_eq!(b.render(), "M 0 0 l 5 5 L 20 20");
    }

    #[test]
    fn test_close_respects_mode() {
        assert_eq!(rendered(|b| { b.close(); }), "Z");
        assert_eq!(rendered(|b| { b.rel().close(); }), "z");
    }

    #[test]
    fn test_to_and_line_point_forms_match() {
        let pair = rendered(|b| { b.to((1.0, 2.0)).line((3.0, 4.0)); });
        let point = rendered(|b| {
            b.to(Point::new(1.0, 2.0)).line(&Point::new(3.0, 4.0));
        });
        let array = rendered(|b| { b.to([1.0, 2.0]).line([3.0, 4.0]); });
        assert_eq!(pair, "M 1 2 L 3 4");
        assert_eq!(point, pair);
        assert_eq!(array, pair);
    }

    #[test]
    fn test_hline_vline() {
        assert_eq!(rendered(|b| { b.hline(5.0).vline(-3.0); }), "H 5 V -3");
        assert_eq!(rendered(|b| { b.rel().hline(5.0).vline(-3.0); }), "h 5 v -3");
    }

    #[test]
    fn test_bezier3_branches() {
        assert_eq!(
            rendered(|b| { b.bezier3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]); }),
            "C 1 2 3 4 5 6"
        );
        assert_eq!(rendered(|b| { b.bezier3([1.0, 2.0, 3.0, 4.0]); }), "S 1 2 3 4");
        assert_eq!(
            rendered(|b| { b.bezier3([1.0, 2.0, 3.0, 4.0, 5.0]); }),
            "S 1 2 3 4"
        );
        assert_eq!(
            rendered(|b| { b.bezier3([(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]); }),
            "C 1 2 3 4 5 6"
        );
        assert_eq!(
            rendered(|b| { b.bezier3([(1.0, 2.0), (3.0, 4.0)]); }),
            "S 1 2 3 4"
        );
    }

    #[test]
    fn test_bezier2_branches() {
        assert_eq!(rendered(|b| { b.bezier2([1.0, 2.0, 3.0, 4.0]); }), "Q 1 2 3 4");
        assert_eq!(rendered(|b| { b.bezier2([3.0, 4.0]); }), "T 3 4");
        assert_eq!(
            rendered(|b| { b.bezier2([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]); }),
            "Q 1 2 3 4"
        );
        assert_eq!(rendered(|b| { b.bezier2([Point::new(3.0, 4.0)]); }), "T 3 4");
    }

    #[test]
    fn test_curves_respect_mode() {
        assert_eq!(
            rendered(|b| { b.rel().bezier3([1.0, 2.0, 3.0, 4.0]).bezier2([1.0, 1.0]); }),
            "s 1 2 3 4 t 1 1"
        );
    }

    #[test]
    fn test_arc() {
        assert_eq!(
            rendered(|b| { b.arc(5.0, 5.0, 0.0, 1.0, 0.0, Point::new(10.0, 10.0)); }),
            "A 5 5 0 1 0 10 10"
        );
        assert_eq!(
            rendered(|b| { b.rel().arc(5.0, 5.0, 45.0, 0.0, 1.0, (10.0, -10.0)); }),
            "a 5 5 45 0 1 10 -10"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut b = PathBuilder::new();
        b.to((1.5, 2.0)).line((3.0, 4.25));
        let first = b.render();
        assert_eq!(b.render(), first);
        assert_eq!(b.str(), first);
        assert_eq!(b.to_string(), first);
    }

    #[test]
    fn test_render_with_precision() {
        let mut b = PathBuilder::new();
        b.to((1.0 / 3.0, 2.0)).line((0.126, -0.5));
        let config = RenderConfig::new().with_precision(2);
        assert_eq!(b.render_with(&config), "M 0.33 2 L 0.13 -0.5");
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let mut b = PathBuilder::new();
        b.to((0.0, 0.0))
            .line((1.0, 1.0))
            .hline(2.0)
            .vline(3.0)
            .bezier3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .bezier3([1.0, 2.0, 3.0, 4.0])
            .bezier2([1.0, 2.0, 3.0, 4.0])
            .bezier2([1.0, 2.0])
            .arc(1.0, 1.0, 0.0, 0.0, 1.0, (2.0, 2.0))
            .close();
        assert_eq!(b.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_arity() {
        let mut b = PathBuilder::new();
        b.to((0.0, 0.0)).c(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            b.validate(),
            Err(PathError::Arity {
                index: 1,
                code: 'c',
                expected: 6,
                found: 4,
            })
        );
    }

    #[test]
    fn test_validate_reports_non_finite() {
        let mut b = PathBuilder::new();
        b.line((1.0, f64::INFINITY));
        assert!(matches!(
            b.validate(),
            Err(PathError::NonFinite {
                index: 0,
                code: 'L',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_try_render_permissive_by_default() {
        let mut b = PathBuilder::new();
        b.L(&[1.0]);
        assert_eq!(b.try_render(&RenderConfig::default()), Ok("L 1".to_string()));
        assert!(b.try_render(&RenderConfig::new().with_strict(true)).is_err());
    }

    #[test]
    fn test_push_prebuilt_command() {
        let mut b = PathBuilder::new();
        b.push(Command::relative(CommandKind::LineTo, vec![1.0, 1.0]));
        assert_eq!(b.render(), "l 1 1");
    }
}
