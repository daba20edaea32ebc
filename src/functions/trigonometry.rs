use crate::eval::{AngleMode, Functions};

pub fn register(functions: &mut Functions) {
    functions.register_function("sin", sin);
    functions.register_function("cos", cos);
    functions.register_function("tan", tan);
    functions.register_function("cot", cot);
    functions.register_function("asin", asin);
    functions.register_function("acos", acos);
    functions.register_function("atan", atan);
}

fn sin(x: f64, mode: AngleMode) -> Result<f64, String> {
    Ok(mode.angle_in_radians(x).sin())
}

fn cos(x: f64, mode: AngleMode) -> Result<f64, String> {
    Ok(mode.angle_in_radians(x).cos())
}

fn tan(x: f64, mode: AngleMode) -> Result<f64, String> {
    Ok(mode.angle_in_radians(x).tan())
}

fn cot(x: f64, mode: AngleMode) -> Result<f64, String> {
    let tan = mode.angle_in_radians(x).tan();
    if tan == 0.0 {
        return Err(format!("cot is undefined at {}", x));
    }
    Ok(1.0 / tan)
}

/// Inverse functions answer in the current angle mode.
fn asin(x: f64, mode: AngleMode) -> Result<f64, String> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(format!("asin is undefined for {}", x));
    }
    Ok(mode.radians_in_mode(x.asin()))
}

fn acos(x: f64, mode: AngleMode) -> Result<f64, String> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(format!("acos is undefined for {}", x));
    }
    Ok(mode.radians_in_mode(x.acos()))
}

fn atan(x: f64, mode: AngleMode) -> Result<f64, String> {
    Ok(mode.radians_in_mode(x.atan()))
}
