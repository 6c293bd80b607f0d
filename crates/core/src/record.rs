use std::fmt;

/// One cell of an iteration record.
///
/// Numeric cells hold values already rounded for display; diagnostic cells
/// hold placeholder text such as `"Undefined or Infinite"`. A [`Value::Missing`]
/// cell renders as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A cosmetically rounded number.
    Num(f64),
    /// An iteration counter or other exact count.
    Int(u64),
    /// A remark, sign label, formatted residual, or diagnostic placeholder.
    Text(String),
    /// No value could be computed for this cell.
    Missing,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Missing => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

/// One row of a solver's iteration table.
///
/// Fields keep their insertion order, which is the column order a
/// presentation layer renders. Records are append-only: a solver builds the
/// row, pushes it onto its [`Trace`](crate::Trace), and never mutates it
/// afterwards (the one exception is a trailing diagnostic field such as a
/// max-iterations marker, which is itself an append).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named field.
    pub fn push(&mut self, name: &'static str, value: impl Into<Value>) {
        self.fields.push((name, value.into()));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Returns the first field with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Iterates fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Returns the field names in insertion order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Rounds `x` to `digits` decimal places for display.
///
/// Rounding happens at the point of recording only; iteration state is never
/// derived from a rounded value.
#[must_use]
pub fn round_to(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(digits.try_into().unwrap_or(i32::MAX));
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fields_keep_insertion_order() {
        let record = Record::new()
            .with("Iteration", 1u64)
            .with("xl", 0.5)
            .with("Remark", "1st subinterval");

        assert_eq!(record.field_names(), vec!["Iteration", "xl", "Remark"]);
        assert_eq!(record.get("Remark"), Some(&Value::Text("1st subinterval".into())));
        assert_eq!(record.get("absent"), None);
    }

    #[test]
    fn missing_renders_empty() {
        assert_eq!(Value::Missing.to_string(), "");
        assert_eq!(Value::Num(2.5).to_string(), "2.5");
    }

    #[test]
    fn rounds_to_requested_digits() {
        assert_relative_eq!(round_to(2.718_281_828, 3), 2.718);
        assert_relative_eq!(round_to(-1.234_567_89, 6), -1.234_568);
        assert_relative_eq!(round_to(1.5, 0), 2.0);
    }

    #[test]
    fn rounding_passes_non_finite_through() {
        assert!(round_to(f64::NAN, 6).is_nan());
        assert_eq!(round_to(f64::INFINITY, 6), f64::INFINITY);
    }
}
