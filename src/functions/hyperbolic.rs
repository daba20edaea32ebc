use crate::eval::Functions;

pub fn register(functions: &mut Functions) {
    functions.register_function("sinh", |x, _| Ok(x.sinh()));
    functions.register_function("cosh", |x, _| Ok(x.cosh()));
    functions.register_function("tanh", |x, _| Ok(x.tanh()));
}
