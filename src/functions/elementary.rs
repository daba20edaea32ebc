use crate::eval::{AngleMode, Functions};

pub fn register(functions: &mut Functions) {
    functions.register_function("sqrt", sqrt);
    functions.register_function("cbrt", |x, _| Ok(x.cbrt()));
    functions.register_function("ln", ln);
    functions.register_function("lg", lg);
    functions.register_function("log", lg);
    functions.register_function("abs", |x, _| Ok(x.abs()));
    functions.register_function("floor", |x, _| Ok(x.floor()));
    functions.register_function("ceil", |x, _| Ok(x.ceil()));
    functions.register_function("round", |x, _| Ok(x.round()));
    functions.register_function("sgn", sgn);
}

fn sqrt(x: f64, _mode: AngleMode) -> Result<f64, String> {
    if x < 0.0 {
        return Err(format!("Square root of negative number {}", x));
    }
    Ok(x.sqrt())
}

fn ln(x: f64, _mode: AngleMode) -> Result<f64, String> {
    if x <= 0.0 {
        return Err(format!("Logarithm of non-positive number {}", x));
    }
    Ok(x.ln())
}

fn lg(x: f64, _mode: AngleMode) -> Result<f64, String> {
    if x <= 0.0 {
        return Err(format!("Logarithm of non-positive number {}", x));
    }
    Ok(x.log10())
}

fn sgn(x: f64, _mode: AngleMode) -> Result<f64, String> {
    Ok(if x == 0.0 { 0.0 } else { x.signum() })
}
