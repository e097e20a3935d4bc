use super::format::ERROR_MARKER;
use super::key::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator needs to resume after a key press.
///
/// `display` is the only field a view has to render. It is never empty and
/// holds at most one decimal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown: a numeral or [`ERROR_MARKER`].
    pub display: String,
    /// Left-hand value of the pending operation.
    pub first_operand: Option<f64>,
    /// Pending operator. Only set while `first_operand` is set.
    pub operator: Option<Operator>,
    /// The next digit starts a fresh number instead of appending.
    pub awaiting_second_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_display("0")
    }
}

impl CalculatorState {
    /// A state with nothing pending, showing `display`.
    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            first_operand: None,
            operator: None,
            awaiting_second_operand: false,
        }
    }

    /// The sticky error snapshot.
    pub fn error() -> Self {
        Self::with_display(ERROR_MARKER)
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}
