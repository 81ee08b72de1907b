use indexmap::IndexMap;

/// The interpreter's state store: variables and arrays, in two independent
/// namespaces. Both keep insertion order so dumps are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: IndexMap<String, String>,
    arrays: IndexMap<String, Vec<String>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Create or overwrite a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get_array(&self, name: &str) -> Option<&[String]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Create or replace an array.
    pub fn set_array<I, S>(&mut self, name: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arrays
            .insert(name.into(), items.into_iter().map(Into::into).collect());
    }

    pub fn contains_array(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn arrays(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.arrays
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of names bound across both namespaces.
    pub fn len(&self) -> usize {
        self.variables.len() + self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.arrays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_set_get() {
        let mut env = Environment::new();
        env.set("x", "42");
        assert_eq!(env.get("x"), Some("42"));
        assert_eq!(env.get("X"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut env = Environment::new();
        env.set("a", "1");
        env.set("b", "2");
        env.set("a", "3");
        let names: Vec<_> = env.variables().collect();
        assert_eq!(names, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut env = Environment::new();
        env.set("xs", "scalar");
        env.set_array("xs", ["a", "b"]);
        assert_eq!(env.get("xs"), Some("scalar"));
        assert_eq!(env.get_array("xs"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_arrays_in_insertion_order() {
        let mut env = Environment::new();
        env.set_array("b", ["1"]);
        env.set_array("a", Vec::<String>::new());
        let names: Vec<_> = env.arrays().map(|(name, items)| (name, items.len())).collect();
        assert_eq!(names, vec![("b", 1), ("a", 0)]);
    }

    #[test]
    fn test_empty_array_is_still_bound() {
        let mut env = Environment::new();
        env.set_array("none", Vec::<String>::new());
        assert!(env.contains_array("none"));
        assert!(!env.contains("none"));
        assert!(!env.is_empty());
    }
}
