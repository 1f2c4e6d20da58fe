use std::collections::HashMap;

use tracing::trace;

use crate::ast::types::Proposition;

/// One frame of bindings, opened by a function body.
#[derive(Debug, Default)]
pub struct Scope {
    pub variable_lookup: HashMap<String, Proposition>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn declare_variable(&mut self, variable_name: String, variable_type: Proposition) {
        self.variable_lookup.insert(variable_name, variable_type);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Proposition> {
        self.variable_lookup.get(variable_name)
    }
}

/// Stack of scopes, innermost last. The root scope is never popped.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.depth(), "pushed scope");
    }

    /// Returns `None` instead of removing the root scope.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() <= 1 {
            return None;
        }

        let scope = self.scopes.pop();
        trace!(depth = self.depth(), "popped scope");
        scope
    }

    /// Binds (or rebinds) a variable in the innermost scope only.
    pub fn declare_variable(&mut self, variable_name: String, variable_type: Proposition) {
        trace!(variable = %variable_name, proposition = %variable_type, depth = self.depth(), "bound variable");
        if let Some(scope) = self.scopes.last_mut() {
            scope.declare_variable(variable_name, variable_type);
        }
    }

    pub fn fetch_variable_type(&self, variable_name: &str) -> Option<&Proposition> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_variable(variable_name))
    }
}
