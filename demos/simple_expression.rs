use calcexpr_rs::eval::{AngleMode, Evaluator, Functions};
use log::debug;
use std::env;

fn main() {
    pretty_env_logger::init();

    let angle_mode = match env::var("CALC_ANGLE_MODE") {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            eprintln!("{err}, using radians");
            AngleMode::Radians
        }),
        Err(_) => AngleMode::default(),
    };

    let expression = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let expression = if expression.is_empty() {
        "2^3+1".to_string()
    } else {
        expression
    };

    let functions = Functions::with_defaults();
    debug!("functions: {:?}", functions.names());

    let evaluator = Evaluator::new(&functions, &expression, angle_mode);
    match evaluator.parse() {
        Ok(result) => println!("{} = {} ({})", expression, result, angle_mode),
        Err(err) => println!("Error: {}", err),
    }
}
