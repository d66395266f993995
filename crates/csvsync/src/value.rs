use crate::number::format_canonical_f64;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) => f.write_str(&format_canonical_f64(*num)),
        }
    }
}

/// A single cell handed to stringify.
///
/// Only `Text` is ever escaped or quoted; the other variants are written in
/// their natural form.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Number(Number),
    Bool(bool),
    /// Written as an empty field.
    Null,
}

impl Field {
    pub fn is_text(&self) -> bool {
        matches!(self, Field::Text(_))
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Bool(b)
    }
}

impl From<i64> for Field {
    fn from(i: i64) -> Self {
        Field::Number(Number::I64(i))
    }
}

impl From<u64> for Field {
    fn from(u: u64) -> Self {
        Field::Number(Number::U64(u))
    }
}

impl From<f64> for Field {
    fn from(f: f64) -> Self {
        Field::Number(Number::F64(f))
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(v: Option<T>) -> Self {
        v.map_or(Field::Null, Into::into)
    }
}

/// Positional form of a parsed line.
pub type Row = Vec<String>;

/// Header-keyed form of a parsed line.
///
/// Keys keep the order in which they were first assigned. Assigning an
/// existing key replaces its value in place, so with duplicate header keys
/// the later column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    pub fn insert(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Append an entry without looking for an existing key; the caller
    /// guarantees `key` is not present yet.
    pub(crate) fn push_unique(&mut self, key: &str, value: String) {
        debug_assert!(!self.contains_key(key));
        self.entries.push((key.to_string(), value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = Record::new();
        for (k, v) in iter {
            let k = k.into();
            rec.insert(&k, v.into());
        }
        rec
    }
}

/// Result of [`crate::parse`]; which variant depends on `Options::return_object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    Rows(Vec<Row>),
    Records(Vec<Record>),
}

impl Table {
    pub fn len(&self) -> usize {
        match self {
            Table::Rows(rows) => rows.len(),
            Table::Records(recs) => recs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_rows(self) -> Option<Vec<Row>> {
        match self {
            Table::Rows(rows) => Some(rows),
            Table::Records(_) => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Table::Records(recs) => Some(recs),
            Table::Rows(_) => None,
        }
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Table::Rows(rows) => Value::Array(
                rows.iter()
                    .map(|r| Value::Array(r.iter().cloned().map(Value::String).collect()))
                    .collect(),
            ),
            Table::Records(recs) => Value::Array(recs.iter().map(Record::to_json).collect()),
        }
    }
}
