//! Argument shapes for the curve sugar methods

use crate::point::Point;

/// Arguments to [`crate::PathBuilder::bezier3`] and [`crate::PathBuilder::bezier2`]
///
/// Curves accept either a flat list of numbers or a list of points. Which
/// SVG command gets emitted depends on how many values were supplied: the
/// full form needs every control point, anything less becomes the smooth
/// shortcut (`S`/`T`).
#[derive(Debug, Clone, PartialEq)]
pub enum CurveArgs {
    Numbers(Vec<f64>),
    Points(Vec<Point>),
}

/// Result of resolving [`CurveArgs`] against a curve's full point count
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CurveForm {
    Full(Vec<f64>),
    Shortcut(Vec<f64>),
}

impl CurveArgs {
    /// Resolve into the full or shortcut form of a curve with `full_points`
    /// points (3 for cubic, 2 for quadratic).
    ///
    /// Numbers are counted as numbers and points as points. Surplus values
    /// beyond what the chosen form takes are dropped; a short list is passed
    /// through as-is.
    pub(crate) fn resolve(self, full_points: usize) -> CurveForm {
        let full_len = full_points * 2;
        let shortcut_len = full_len.saturating_sub(2);

        let (is_full, mut values) = match self {
            CurveArgs::Numbers(numbers) => (numbers.len() >= full_len, numbers),
            CurveArgs::Points(points) => (
                points.len() >= full_points,
                points.iter().flat_map(|p| [p.x, p.y]).collect(),
            ),
        };

        if is_full {
            values.truncate(full_len);
            CurveForm::Full(values)
        } else {
            values.truncate(shortcut_len);
            CurveForm::Shortcut(values)
        }
    }
}

impl<const N: usize> From<[f64; N]> for CurveArgs {
    fn from(numbers: [f64; N]) -> Self {
        CurveArgs::Numbers(numbers.to_vec())
    }
}

impl From<&[f64]> for CurveArgs {
    fn from(numbers: &[f64]) -> Self {
        CurveArgs::Numbers(numbers.to_vec())
    }
}

impl From<Vec<f64>> for CurveArgs {
    fn from(numbers: Vec<f64>) -> Self {
        CurveArgs::Numbers(numbers)
    }
}

impl<const N: usize> From<[Point; N]> for CurveArgs {
    fn from(points: [Point; N]) -> Self {
        CurveArgs::Points(points.to_vec())
    }
}

impl<const N: usize> From<[(f64, f64); N]> for CurveArgs {
    fn from(pairs: [(f64, f64); N]) -> Self {
        CurveArgs::Points(pairs.iter().map(|&p| Point::from(p)).collect())
    }
}

impl From<&[Point]> for CurveArgs {
    fn from(points: &[Point]) -> Self {
        CurveArgs::Points(points.to_vec())
    }
}

impl From<Vec<Point>> for CurveArgs {
    fn from(points: Vec<Point>) -> Self {
        CurveArgs::Points(points)
    }
}
