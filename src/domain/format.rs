//! Rendering of computed values for the display.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown instead of a number when a result is undefined or non-finite.
pub const ERROR_MARKER: &str = "Error";

/// Decimal places kept when rounding away floating-point noise.
pub const DISPLAY_DECIMALS: u32 = 10;

/// Longest plain rendering before switching to exponential notation.
pub const MAX_PLAIN_LEN: usize = 12;

const EXPONENT_DIGITS: usize = 6;

/// Formats a computed value for the display.
///
/// Non-finite values become [`ERROR_MARKER`]. Finite values are rounded to
/// [`DISPLAY_DECIMALS`] places and rendered plainly, falling back to
/// exponential notation (`1.234568e+12`) when the plain form is longer than
/// [`MAX_PLAIN_LEN`] characters.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }

    if let Some(rounded) = round_for_display(value) {
        let plain = rounded.to_string();
        if plain.len() <= MAX_PLAIN_LEN {
            return plain;
        }
    }

    exponential(value)
}

/// Rounds `value` to [`DISPLAY_DECIMALS`] places, dropping trailing zeros and
/// the sign of zero.
///
/// Returns `None` for finite values outside the range `Decimal` can hold;
/// those are always too long for a plain rendering anyway.
pub fn round_for_display(value: f64) -> Option<Decimal> {
    let decimal = match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        // Below Decimal's resolution, so it rounds to zero at any display precision.
        None if value.abs() < 1.0 => Decimal::ZERO,
        None => return None,
    };

    Some(
        decimal
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    )
}

fn exponential(value: f64) -> String {
    let rendered = format!("{:.*e}", EXPONENT_DIGITS, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
