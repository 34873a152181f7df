//! Name bindings for a single run.
//!
//! Every name the steps read goes through [`Scope::get`], so referencing a
//! name that was never bound surfaces as [`RuntimeError::UndefinedName`].

use indexmap::IndexMap;

use crate::error::RuntimeError;
use crate::Value;

/// Ordered name to value bindings.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: IndexMap<String, Value>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Resolve `name`.
    pub fn get(&self, name: &str) -> Result<&Value, RuntimeError> {
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::undefined_name(name))
    }

    /// Resolve `name` and require an integer.
    pub fn get_integer(&self, name: &str) -> Result<i64, RuntimeError> {
        let value = self.get(name)?;
        value.as_integer().ok_or_else(|| {
            RuntimeError::type_mismatch(format!(
                "'{}' is {}, expected int",
                name,
                value.type_name()
            ))
        })
    }

    /// Rebind an existing name.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RuntimeError> {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(RuntimeError::undefined_name(name)),
        }
    }

    /// Evaluate `name[index]`.
    pub fn index(&self, name: &str, index: usize) -> Result<Value, RuntimeError> {
        match self.get(name)? {
            Value::List(items) => items
                .get(index)
                .cloned()
                .ok_or(RuntimeError::IndexOutOfRange {
                    index,
                    len: items.len(),
                }),
            other => Err(RuntimeError::type_mismatch(format!(
                "'{}' object is not subscriptable",
                other.type_name()
            ))),
        }
    }

    /// Bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unbound_is_name_error() {
        let scope = Scope::new();
        assert_eq!(
            scope.get("arreglo"),
            Err(RuntimeError::undefined_name("arreglo"))
        );
    }

    #[test]
    fn test_set_requires_existing_binding() {
        let mut scope = Scope::new();
        assert!(scope.set("x", 1_i64).is_err());
        scope.define("x", 5_i64);
        scope.set("x", 4_i64).unwrap();
        assert_eq!(scope.get_integer("x").unwrap(), 4);
    }

    #[test]
    fn test_index() {
        let mut scope = Scope::new();
        scope.define(
            "arr",
            vec![Value::from(0_i64), Value::from("azul"), Value::from(34_i64)],
        );
        assert_eq!(scope.index("arr", 2).unwrap(), Value::Integer(34));
        assert_eq!(
            scope.index("arr", 4),
            Err(RuntimeError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert!(scope.index("arreglo", 4).unwrap_err().is_name_resolution());
    }

    #[test]
    fn test_index_non_list() {
        let mut scope = Scope::new();
        scope.define("n", -42_i64);
        assert!(matches!(
            scope.index("n", 0),
            Err(RuntimeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_get_integer_type_mismatch() {
        let mut scope = Scope::new();
        scope.define("activo", true);
        assert!(matches!(
            scope.get_integer("activo"),
            Err(RuntimeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_names_in_binding_order() {
        let mut scope = Scope::new();
        scope.define("x", 5_i64);
        scope.define("y", 15_i64);
        scope.define("x", 0_i64);
        assert_eq!(scope.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(scope.get_integer("y").unwrap(), 15);
    }
}
