use std::{
    fmt::Display,
    ops::{Add, AddAssign, Deref},
};

use serde::{Deserialize, Deserializer, Serialize};

use super::{normalize::normalize, template::TemplateVariables};

/// Block text with its common indentation removed.
///
/// Parts passed to [`Prompt::new`] are joined with newlines and then
/// normalized. Appending (`+`, `+=`) adds raw text and does not normalize
/// again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Prompt {
    inner: String,
}

impl Prompt {
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = parts
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        let inner = normalize(&joined);
        log::debug!(
            "normalized prompt: {} -> {} bytes",
            joined.len(),
            inner.len()
        );

        Self { inner }
    }

    pub fn render(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    /// Replaces every `{{name}}` placeholder with its value.
    pub fn fill(&self, variables: &TemplateVariables) -> Self {
        Self {
            inner: variables.substitute(&self.inner),
        }
    }

    fn append(mut self, tail: &str) -> Self {
        self.inner.push_str(tail);
        self
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<String> for Prompt {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.inner
    }
}

// stored text is trusted only after normalizing it again
impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl Deref for Prompt {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl PartialEq<str> for Prompt {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Prompt {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl Add<&str> for Prompt {
    type Output = Prompt;

    fn add(self, rhs: &str) -> Self::Output {
        self.append(rhs)
    }
}

impl Add<String> for Prompt {
    type Output = Prompt;

    fn add(self, rhs: String) -> Self::Output {
        self.append(&rhs)
    }
}

impl Add<&Prompt> for Prompt {
    type Output = Prompt;

    fn add(self, rhs: &Prompt) -> Self::Output {
        self.append(&rhs.inner)
    }
}

impl Add<Prompt> for Prompt {
    type Output = Prompt;

    fn add(self, rhs: Prompt) -> Self::Output {
        self.append(&rhs.inner)
    }
}

impl AddAssign<&str> for Prompt {
    fn add_assign(&mut self, rhs: &str) {
        self.inner.push_str(rhs);
    }
}

impl AddAssign<String> for Prompt {
    fn add_assign(&mut self, rhs: String) {
        self.inner.push_str(&rhs);
    }
}

impl AddAssign<&Prompt> for Prompt {
    fn add_assign(&mut self, rhs: &Prompt) {
        self.inner.push_str(&rhs.inner);
    }
}

impl AddAssign<Prompt> for Prompt {
    fn add_assign(&mut self, rhs: Prompt) {
        self.inner.push_str(&rhs.inner);
    }
}
