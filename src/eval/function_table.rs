use crate::eval::AngleMode;
use log::trace;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub type Function = Arc<dyn Fn(f64, AngleMode) -> Result<f64, String> + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error("Function {0} not registered")]
    NotFound(String),

    #[error("Function {name} failed: {reason}")]
    Failed { name: String, reason: String },
}

/// Lookup contract the evaluator resolves function names through.
pub trait FunctionTable {
    /// Applies the function `name` to `operand` under `angle_mode`.
    fn call(&self, name: &str, operand: f64, angle_mode: AngleMode) -> Result<f64, FunctionError>;
}

/// Function table backed by a name → callable map.
#[derive(Clone, Default)]
pub struct Functions {
    functions: HashMap<String, Function>,
}

impl Functions {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// A table populated with the built-in calculator functions.
    pub fn with_defaults() -> Self {
        let mut functions = Self::new();
        crate::functions::register_functions(&mut functions);
        functions
    }

    /// Registers a function, replacing any previous one with the same name.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64, AngleMode) -> Result<f64, String> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionTable for Functions {
    fn call(&self, name: &str, operand: f64, angle_mode: AngleMode) -> Result<f64, FunctionError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionError::NotFound(name.to_string()))?;

        trace!("calling {name}({operand}) in {angle_mode} mode");
        function(operand, angle_mode).map_err(|reason| FunctionError::Failed {
            name: name.to_string(),
            reason,
        })
    }
}

impl std::fmt::Debug for Functions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Functions")
            .field("names", &self.names())
            .finish()
    }
}
