pub mod elementary;
pub mod hyperbolic;
pub mod trigonometry;

use crate::eval::Functions;

pub fn register_functions(functions: &mut Functions) {
    elementary::register(functions);
    hyperbolic::register(functions);
    trigonometry::register(functions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_lowercase_runs() {
        let functions = Functions::with_defaults();
        assert!(!functions.is_empty());
        for name in functions.names() {
            assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{name}");
            // Names the constant lookahead would steal can never be called.
            assert!(!name.starts_with('e') && !name.starts_with("pi"), "{name}");
        }
    }
}
