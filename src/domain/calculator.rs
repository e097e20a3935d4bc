//! The calculator's key-driven state machine.
//!
//! [`submit`] is a pure function: it reads one snapshot of the previous state
//! and builds the next one in a single step. Operators fold any pending
//! calculation immediately, so there is no precedence.

use super::format::format_number;
use super::key::{Digit, KeyToken, Operator};
use super::state::CalculatorState;

/// Computes the state that follows pressing `key` in `state`.
///
/// Total over every key and reachable state. Invalid arithmetic lands in the
/// error snapshot rather than failing.
pub fn submit(key: KeyToken, state: &CalculatorState) -> CalculatorState {
    match key {
        KeyToken::Clear => CalculatorState::default(),
        _ if state.is_error() => recover(key, state),
        KeyToken::Digit(digit) => enter_digit(digit, state),
        KeyToken::Decimal => enter_decimal(state),
        KeyToken::Operator(op) => choose_operator(op, state),
        KeyToken::Equals => equals(state),
    }
}

/// Feeds `keys` through [`submit`], starting from the initial state.
pub fn replay<I>(keys: I) -> CalculatorState
where
    I: IntoIterator<Item = KeyToken>,
{
    keys.into_iter()
        .fold(CalculatorState::default(), |state, key| submit(key, &state))
}

fn recover(key: KeyToken, state: &CalculatorState) -> CalculatorState {
    match key {
        KeyToken::Digit(digit) => CalculatorState::with_display(digit.as_char()),
        KeyToken::Decimal => CalculatorState::with_display("0."),
        _ => state.clone(),
    }
}

fn enter_digit(digit: Digit, state: &CalculatorState) -> CalculatorState {
    let display = if state.awaiting_second_operand || state.display == "0" {
        digit.as_char().to_string()
    } else {
        let mut display = state.display.clone();
        display.push(digit.as_char());
        display
    };

    CalculatorState {
        display,
        awaiting_second_operand: false,
        ..state.clone()
    }
}

fn enter_decimal(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_second_operand {
        return CalculatorState {
            display: "0.".to_string(),
            awaiting_second_operand: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

fn choose_operator(op: Operator, state: &CalculatorState) -> CalculatorState {
    let value = parse_display(&state.display);

    let (display, first_operand) = match (state.first_operand, state.operator) {
        (Some(first), Some(pending)) if !state.awaiting_second_operand => {
            let result = pending.evaluate(first, value);
            if !result.is_finite() {
                return CalculatorState::error();
            }
            (format_number(result), result)
        }
        // Operator pressed again with nothing typed since: keep the capture.
        (Some(first), _) if state.awaiting_second_operand => (state.display.clone(), first),
        // First press, or a number typed after `=`.
        _ => (state.display.clone(), value),
    };

    CalculatorState {
        display,
        first_operand: Some(first_operand),
        operator: Some(op),
        awaiting_second_operand: true,
    }
}

fn equals(state: &CalculatorState) -> CalculatorState {
    let (Some(first), Some(op)) = (state.first_operand, state.operator) else {
        return state.clone();
    };
    if state.awaiting_second_operand {
        return state.clone();
    }

    let result = op.evaluate(first, parse_display(&state.display));
    if !result.is_finite() {
        return CalculatorState::error();
    }

    CalculatorState {
        display: format_number(result),
        first_operand: Some(result),
        operator: None,
        awaiting_second_operand: true,
    }
}

/// Reads the display back as a number. Anything unparsable is NaN, which
/// evaluates to the error snapshot.
fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(f64::NAN)
}
