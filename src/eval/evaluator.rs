use crate::eval::cursor::Cursor;
use crate::eval::{
    AngleMode, EvaluatorError, EvaluatorResult, FunctionTable, Postfix, Strictness, EPSILON,
};
use log::{debug, trace};
use std::f64::consts::{E, PI};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Recursive-descent evaluator that computes the value while it parses.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ('+' | '-') factor
///             | ('(' expression ')' | number | name factor) postfix?
/// postfix    := '^' expression | '!' | '%' | '&' expression
/// ```
///
/// The right operand of `^` and `&` is a whole expression, so `2^3+1` is
/// `2^(3+1)`.
pub struct Evaluator<'f> {
    id: u64,
    expression: String,
    functions: &'f dyn FunctionTable,
    angle_mode: AngleMode,
    strictness: Strictness,
}

impl<'f> Evaluator<'f> {
    /// Binds an expression to a function table. Nothing is parsed until
    /// [`Evaluator::parse`].
    pub fn new(functions: &'f dyn FunctionTable, expression: &str, angle_mode: AngleMode) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        trace!("Evaluator {id} created");
        Self {
            id,
            expression: expression.to_string(),
            functions,
            angle_mode,
            strictness: Strictness::default(),
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn set_expression(&mut self, expression: &str) {
        self.expression = expression.to_string();
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = self.angle_mode.toggle();
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    /// Parses and evaluates the bound expression.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value, snapped to `0.0` when its magnitude is
    ///   below [`EPSILON`].
    /// * `Err(EvaluatorError)` if the expression is empty, contains a
    ///   character the grammar cannot place, or names an unknown function.
    pub fn parse(&self) -> EvaluatorResult<f64> {
        if self.expression.is_empty() {
            return Err(EvaluatorError::UndefinedExpression);
        }
        debug!("Evaluator {} parsing: {}", self.id, self.expression);

        let mut cursor = Cursor::new(&self.expression);
        cursor.next_char();
        let value = self.parse_expression(&mut cursor)?;

        if !cursor.at_end() && !self.tolerates_trailing(cursor.current()) {
            return Err(EvaluatorError::unexpected(cursor.current()));
        }

        let value = if value.abs() < EPSILON { 0.0 } else { value };
        debug!("Evaluator {} result: {}", self.id, value);
        Ok(value)
    }

    // A two-letter constant lookahead can stop one character short.
    fn tolerates_trailing(&self, ch: Option<char>) -> bool {
        self.strictness == Strictness::Permissive && matches!(ch, Some('P' | 'I' | 'e'))
    }

    fn parse_expression(&self, cursor: &mut Cursor) -> EvaluatorResult<f64> {
        let mut x = self.parse_term(cursor)?;
        loop {
            if cursor.eat('+') {
                x += self.parse_term(cursor)?;
            } else if cursor.eat('-') {
                x -= self.parse_term(cursor)?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_term(&self, cursor: &mut Cursor) -> EvaluatorResult<f64> {
        let mut x = self.parse_factor(cursor)?;
        loop {
            if cursor.eat('*') {
                x *= self.parse_factor(cursor)?;
            } else if cursor.eat('/') {
                x /= self.parse_factor(cursor)?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_factor(&self, cursor: &mut Cursor) -> EvaluatorResult<f64> {
        if cursor.eat('+') {
            return self.parse_factor(cursor);
        }
        if cursor.eat('-') {
            return Ok(-self.parse_factor(cursor)?);
        }

        let x = if cursor.eat('(') {
            let x = self.parse_expression(cursor)?;
            if !cursor.eat(')') && self.strictness == Strictness::Strict {
                return Err(EvaluatorError::unexpected(cursor.current()));
            }
            x
        } else if starts_number(cursor) {
            self.parse_number(cursor)?
        } else if cursor.current().is_some_and(|c| c.is_ascii_lowercase()) {
            self.parse_function(cursor)?
        } else {
            return Err(EvaluatorError::unexpected(cursor.current()));
        };

        self.parse_postfix(cursor, x)
    }

    fn parse_number(&self, cursor: &mut Cursor) -> EvaluatorResult<f64> {
        match (cursor.current(), cursor.peek()) {
            (Some('p'), Some('i')) | (Some('P'), Some('I')) => {
                cursor.next_char();
                cursor.next_char();
                Ok(PI)
            }
            (Some('e' | 'E'), _) => {
                cursor.next_char();
                Ok(E)
            }
            _ => {
                let literal = cursor.eat_while(|c| c.is_ascii_digit() || c == '.');
                match self.strictness {
                    Strictness::Permissive => Ok(numeric_prefix(literal)),
                    Strictness::Strict => literal
                        .parse()
                        .map_err(|_| EvaluatorError::MalformedNumber(literal.to_string())),
                }
            }
        }
    }

    fn parse_function(&self, cursor: &mut Cursor) -> EvaluatorResult<f64> {
        let name = cursor.eat_while(|c| c.is_ascii_lowercase()).to_string();
        let argument = self.parse_factor(cursor)?;

        self.functions
            .call(&name, argument, self.angle_mode)
            .map_err(|e| {
                debug!("Evaluator {}: {}", self.id, e);
                EvaluatorError::UnexpectedFunction(name)
            })
    }

    // Applied at most once per factor; `5!!` leaves the second `!` behind.
    fn parse_postfix(&self, cursor: &mut Cursor, x: f64) -> EvaluatorResult<f64> {
        let Some(symbol) = cursor.eat_any(&Postfix::SYMBOLS) else {
            return Ok(x);
        };
        match Postfix::try_from(symbol)? {
            Postfix::Unary(operator) => operator.apply(x),
            Postfix::Binary(operator) => Ok(operator.apply(x, self.parse_expression(cursor)?)),
        }
    }
}

impl Clone for Evaluator<'_> {
    fn clone(&self) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        trace!("Evaluator {id} cloned from {}", self.id);
        Self {
            id,
            expression: self.expression.clone(),
            functions: self.functions,
            angle_mode: self.angle_mode,
            strictness: self.strictness,
        }
    }
}

impl Drop for Evaluator<'_> {
    fn drop(&mut self) {
        trace!("Evaluator {} dropped", self.id);
    }
}

impl std::fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("id", &self.id)
            .field("expression", &self.expression)
            .field("angle_mode", &self.angle_mode)
            .field("strictness", &self.strictness)
            .finish()
    }
}

fn starts_number(cursor: &Cursor) -> bool {
    match (cursor.current(), cursor.peek()) {
        (Some(c), _) if c.is_ascii_digit() || c == '.' => true,
        (Some('p'), Some('i')) | (Some('P'), Some('I')) => true,
        (Some('e' | 'E'), _) => true,
        _ => false,
    }
}

/// Value of the longest prefix of `literal` that reads as a decimal number.
/// A literal with no leading digits (`.`, `..5`) is zero.
fn numeric_prefix(literal: &str) -> f64 {
    let end = match literal.find('.') {
        Some(dot) => literal[dot + 1..]
            .find('.')
            .map_or(literal.len(), |second| dot + 1 + second),
        None => literal.len(),
    };
    literal[..end].parse().unwrap_or(0.0)
}
