//! SVG Path Builder - chainable construction of SVG path `d` strings
//!
//! Commands are appended through a fluent API and rendered on demand.
//! Sugar methods follow the builder's absolute/relative mode; the raw
//! per-letter methods (`M`, `m`, `L`, `l`, ...) always use their own case.
//!
//! # Example
//!
//! ```rust
//! use svg_path_builder::path;
//!
//! let d = path()
//!     .to((0.0, 0.0))
//!     .rel()
//!     .line((5.0, 5.0))
//!     .abs()
//!     .line((20.0, 20.0))
//!     .render();
//!
//! assert_eq!(d, "M 0 0 l 5 5 L 20 20");
//! ```

pub mod args;
pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod point;

pub use args::CurveArgs;
pub use builder::PathBuilder;
pub use command::{Command, CommandKind, Mode};
pub use config::RenderConfig;
pub use error::PathError;
pub use format::{NumberFormat, MAX_PRECISION};
pub use point::{Point, PointLike};

/// Start a new, empty path in absolute mode
pub fn path() -> PathBuilder {
    PathBuilder::new()
}
