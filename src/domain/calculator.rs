//! Four-function calculator state machine
//!
//! This module implements the calculator as a pure transition function over
//! an explicit state value. It has no knowledge of buttons, rendering, or
//! input devices; callers translate user gestures into [`CalcIntent`] values
//! and feed them through [`CalculatorState::apply`].
//!
//! ## Design Principles
//! - **Pure transitions**: `apply` consumes a state and returns the next one
//! - **Total**: every intent is accepted in every state, invalid input
//!   degrades to a no-op instead of failing
//! - **Eager chaining**: pressing an operator while one is already pending
//!   resolves the previous calculation left-to-right, with no precedence

use serde::{Deserialize, Serialize};

/// Arithmetic operations supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Returns the display symbol for this operation
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Applies the operation to two operands
    ///
    /// Division by zero is intentionally unguarded: it yields the IEEE
    /// infinity or NaN result rather than an error.
    fn evaluate(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// Discrete state-change requests accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcIntent {
    /// A decimal digit key (0-9); values above 9 are ignored
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// An operator key
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key
    Clear,
}

/// Calculator state: the visible display plus any operation in progress
///
/// The display always holds a syntactically valid decimal token and is never
/// empty. `operation` is only ever set together with `pending`. The idle
/// state is `{display: "0", pending: None, operation: None}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Current textual value shown to the user
    display: String,
    /// Operand captured before an operator was chosen
    pending: Option<String>,
    /// Operation selected for the pending operand
    operation: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the idle calculator state
    pub fn new() -> Self {
        Self {
            display: String::from("0"),
            pending: None,
            operation: None,
        }
    }

    /// Returns the current display value
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the captured operand, if an operation is in progress
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Returns the selected operation, if any
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Checks if the calculator is in the idle state
    pub fn is_idle(&self) -> bool {
        self.display == "0" && self.pending.is_none() && self.operation.is_none()
    }

    /// Processes an intent and returns the next state
    ///
    /// This is the calculator's entire public contract. It is pure and
    /// total: no side effects, and every intent is handled in every state.
    pub fn apply(self, intent: CalcIntent) -> CalculatorState {
        match intent {
            CalcIntent::Digit(d) if d <= 9 => self.enter_digit(d),
            // Out-of-range digit, silently ignored
            CalcIntent::Digit(_) => self,
            CalcIntent::Decimal => self.enter_decimal(),
            CalcIntent::Operator(op) => self.enter_operator(op),
            CalcIntent::Equals => self.resolve(),
            CalcIntent::Clear => CalculatorState::new(),
        }
    }

    /// Digit entry: a lone "0" is replaced, anything else is appended
    fn enter_digit(mut self, d: u8) -> CalculatorState {
        let digit = char::from(b'0' + d);
        if self.display == "0" {
            self.display.clear();
        }
        self.display.push(digit);
        self
    }

    /// Decimal entry: at most one '.' per operand, repeat presses are no-ops
    fn enter_decimal(mut self) -> CalculatorState {
        if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Operator entry
    ///
    /// With nothing pending the current display becomes the pending operand.
    /// With an operand and operation already pending, the previous
    /// calculation is resolved first and its result becomes the new pending
    /// operand. Either way the display resets for the next operand.
    fn enter_operator(self, op: Operator) -> CalculatorState {
        let pending = match (&self.pending, self.operation) {
            (Some(captured), Some(current)) => {
                format_value(current.evaluate(parse_operand(captured), parse_operand(&self.display)))
            }
            // Unreachable while the pending/operation invariant holds, but
            // the transition stays total either way
            (Some(captured), None) => captured.clone(),
            (None, _) => self.display,
        };

        CalculatorState {
            display: String::from("0"),
            pending: Some(pending),
            operation: Some(op),
        }
    }

    /// Equals: resolves the pending calculation, or does nothing
    fn resolve(self) -> CalculatorState {
        match (&self.pending, self.operation) {
            (Some(captured), Some(op)) => {
                let result = op.evaluate(parse_operand(captured), parse_operand(&self.display));
                CalculatorState {
                    display: format_value(result),
                    pending: None,
                    operation: None,
                }
            }
            _ => self,
        }
    }
}

/// Parses a display token as a decimal number
///
/// The display invariant keeps tokens parseable; a non-finite display left
/// behind by an unguarded division still flows through as NaN rather than
/// failing.
fn parse_operand(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

/// Formats a computed value back into a display token
///
/// Uses the shortest round-trip representation, so whole results render
/// without a trailing fraction (`8` rather than `8.0`).
fn format_value(value: f64) -> String {
    format!("{value}")
}
