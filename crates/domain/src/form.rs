//! Form field types
//!
//! A contact form submission is an ordered list of `name=value` pairs.
//! Order is kept so the encoded body matches the order fields were added.

/// A single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name as sent on the wire.
    pub name: String,
    /// Field value.
    pub value: String,
}

impl FormField {
    /// Creates a new form field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    fields: Vec<FormField>,
}

impl FormFields {
    /// Creates an empty field list.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field. Later values for the same name are kept as extra pairs.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField::new(name, value));
    }

    /// Returns the first value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Returns the fields as `(name, value)` pairs, ready for url-encoding.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for FormFields
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(n, v)| FormField::new(n, v))
                .collect(),
        }
    }
}
