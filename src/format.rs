//! Number-to-text conversion for path arguments

/// Largest number of decimals [`NumberFormat::Fixed`] writes
pub const MAX_PRECISION: usize = 17;

/// How numbers are written into the `d` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest round-trip form: `10`, `0.5`, `-3.25`; exponent form
    /// (`1e+21`, `1.5e-7`) at or above 1e21 and below 1e-6
    #[default]
    Default,
    /// Rounded to this many decimals (at most [`MAX_PRECISION`]), trailing
    /// zeros stripped
    Fixed(usize),
}

impl NumberFormat {
    pub fn from_precision(precision: Option<usize>) -> Self {
        match precision {
            Some(p) => NumberFormat::Fixed(p.min(MAX_PRECISION)),
            None => NumberFormat::Default,
        }
    }
}

/// Format a single argument
///
/// Non-finite values are spelled `NaN`, `Infinity` and `-Infinity`
/// regardless of the format, and negative zero is written as `0`.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let text = match format {
        NumberFormat::Default => shortest(value),
        NumberFormat::Fixed(precision) => {
            trim_fraction(format!("{:.*}", precision.min(MAX_PRECISION), value))
        }
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn shortest(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        format!("{}", value)
    }
}

/// Strip trailing zeros and a dangling decimal point
fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
