pub mod eval;
pub mod functions;

use eval::{AngleMode, Evaluator, EvaluatorResult, FunctionTable, Functions};
use rayon::prelude::*;

/// Evaluates a single expression against the built-in function table.
pub fn evaluate_expression(expression: &str, angle_mode: AngleMode) -> EvaluatorResult<f64> {
    let functions = Functions::with_defaults();
    let evaluator = Evaluator::new(&functions, expression, angle_mode);
    evaluator.parse()
}

/// Evaluates independent expressions in parallel over one shared table.
/// Results are returned in input order.
pub fn evaluate_batch<T>(
    expressions: &[&str],
    functions: &T,
    angle_mode: AngleMode,
) -> Vec<EvaluatorResult<f64>>
where
    T: FunctionTable + Sync,
{
    expressions
        .par_iter()
        .map(|expression| Evaluator::new(functions, expression, angle_mode).parse())
        .collect()
}
