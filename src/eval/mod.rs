use std::fmt;
use std::str::FromStr;

mod cursor;
mod error;
mod evaluator;
mod function_table;

pub use error::*;
pub use evaluator::Evaluator;
pub use function_table::*;

/// Results closer to zero than this are reported as exactly zero.
pub const EPSILON: f64 = 1e-9;

/// How trigonometric functions interpret and produce angles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    pub fn is_radians(self) -> bool {
        self == AngleMode::Radians
    }

    pub fn toggle(self) -> Self {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }

    /// Converts an angle expressed in this mode to radians.
    pub fn angle_in_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle in radians to this mode.
    pub fn radians_in_mode(self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_degrees(),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Radians => write!(f, "radians"),
            AngleMode::Degrees => write!(f, "degrees"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(AngleMode::Radians),
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            _ => Err(format!("Unknown angle mode: {}", value)),
        }
    }
}

/// How forgiving the evaluator is about sloppy input.
///
/// `Permissive` tolerates a missing `)`, reads numeric literals up to their
/// longest valid prefix (`1.2.3` is `1.2`) and ignores a trailing `P`, `I`
/// or `e`. `Strict` rejects all three.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    #[default]
    Permissive,
    Strict,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Factorial,
    Percent,
}

impl UnaryOperator {
    pub fn apply(&self, operand: f64) -> EvaluatorResult<f64> {
        match self {
            UnaryOperator::Factorial => factorial(operand),
            UnaryOperator::Percent => Ok(operand / 100.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Power,
    Modulo,
}

impl BinaryOperator {
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Power => left.powf(right),
            BinaryOperator::Modulo => left % right,
        }
    }
}

/// Operator applied once after a factor's value is known.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Postfix {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl Postfix {
    /// Symbols in the order they are tried.
    pub const SYMBOLS: [char; 4] = ['^', '!', '%', '&'];
}

impl TryFrom<char> for Postfix {
    type Error = EvaluatorError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Postfix::Binary(BinaryOperator::Power)),
            '!' => Ok(Postfix::Unary(UnaryOperator::Factorial)),
            '%' => Ok(Postfix::Unary(UnaryOperator::Percent)),
            '&' => Ok(Postfix::Binary(BinaryOperator::Modulo)),
            _ => Err(EvaluatorError::UnexpectedCharacter(value)),
        }
    }
}

/// `n!` for non-negative integral `n`. Anything past 170! overflows to infinity.
pub fn factorial(n: f64) -> EvaluatorResult<f64> {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return Err(EvaluatorError::FactorialDomain(n));
    }
    if n > 170.0 {
        return Ok(f64::INFINITY);
    }
    Ok((2..=n as u64).fold(1.0, |acc, k| acc * k as f64))
}
