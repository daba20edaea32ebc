use calcexpr_rs::eval::{AngleMode, Functions};
use calcexpr_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "1 + 2 * 3",
        "2^3+1",
        "sin30 + cos60",
        "5! / 10%",
        "sqrt(16) & 3",
        "3 $ 4",
        "zzz5",
    ];

    let functions = Functions::with_defaults();
    let results = evaluate_batch(&expressions, &functions, AngleMode::Degrees);
    for (expression, result) in expressions.iter().zip(results) {
        match result {
            Ok(value) => println!("{expression} = {value}"),
            Err(err) => println!("{expression}: {err}"),
        }
    }
}
