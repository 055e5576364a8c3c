use indexmap::IndexMap;

/// Values for `{{name}}` placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    values: IndexMap<String, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Helper to substitute template placeholders in a string.
    ///
    /// Unknown placeholders are left untouched.
    pub fn substitute(&self, s: &str) -> String {
        self.values
            .iter()
            .fold(s.to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{{{name}}}}}"), value)
            })
    }

    /// Helper to substitute template placeholders for a slice of strings.
    pub fn substitute_all(&self, items: &[String]) -> Vec<String> {
        items.iter().map(|s| self.substitute(s)).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateVariables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let vars = TemplateVariables::new().set("role", "Python security");
        assert_eq!(
            vars.substitute("You are a {{role}} expert. Act as a {{role}}."),
            "You are a Python security expert. Act as a Python security."
        );
    }

    #[test]
    fn leaves_unknown_and_single_braces_alone() {
        let vars = TemplateVariables::from_iter([("task", "audit")]);
        assert_eq!(
            vars.substitute("{{task}} {{code}} {task}"),
            "audit {{code}} {task}"
        );
        assert_eq!(vars.get("task"), Some("audit"));
        assert_eq!(vars.get("code"), None);
    }

    #[test]
    fn substitutes_slices() {
        let vars = TemplateVariables::new().set("name", "mei");
        let out = vars.substitute_all(&["hi {{name}}".to_string(), "bye".to_string()]);
        assert_eq!(out, vec!["hi mei", "bye"]);
    }
}
