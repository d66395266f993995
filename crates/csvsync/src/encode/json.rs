use serde_json::Value;

use crate::{
    Error, Result,
    value::{Field, Number},
};

/// Lay out a JSON document as rows of fields.
///
/// The top level must be an array. Its items are either arrays of scalars
/// (one row each) or objects; with objects a header row is emitted first,
/// holding every key in first-seen order, and missing keys become empty
/// fields.
pub fn rows_from_value(value: &Value) -> Result<Vec<Vec<Field>>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::Message(format!(
                "expected an array of rows, found {}",
                kind_name(other)
            )));
        }
    };
    if let Some(keys) = object_header(items) {
        return object_rows(items, &keys);
    }
    items
        .iter()
        .enumerate()
        .map(|(r, item)| match item {
            Value::Array(cells) => cells
                .iter()
                .enumerate()
                .map(|(c, v)| scalar_field(v, r, c))
                .collect::<Result<Vec<_>>>(),
            other => Err(Error::Shape {
                row: r,
                column: 0,
                message: format!("expected an array row, found {}", kind_name(other)),
            }),
        })
        .collect()
}

fn object_header(items: &[Value]) -> Option<Vec<String>> {
    if !matches!(items.first(), Some(Value::Object(_))) {
        return None;
    }
    let mut keys: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(obj) = item {
            for k in obj.keys() {
                if !keys.iter().any(|seen| seen == k) {
                    keys.push(k.clone());
                }
            }
        }
    }
    Some(keys)
}

fn object_rows(items: &[Value], keys: &[String]) -> Result<Vec<Vec<Field>>> {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(keys.iter().map(|k| Field::Text(k.clone())).collect());
    for (r, item) in items.iter().enumerate() {
        let obj = match item {
            Value::Object(obj) => obj,
            other => {
                return Err(Error::Shape {
                    row: r,
                    column: 0,
                    message: format!("expected an object row, found {}", kind_name(other)),
                });
            }
        };
        let row = keys
            .iter()
            .enumerate()
            .map(|(c, k)| obj.get(k).map_or(Ok(Field::Null), |v| scalar_field(v, r, c)))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn scalar_field(v: &Value, row: usize, column: usize) -> Result<Field> {
    Ok(match v {
        Value::Null => Field::Null,
        Value::Bool(b) => Field::Bool(*b),
        Value::String(s) => Field::Text(s.clone()),
        Value::Number(n) => Field::Number(if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }),
        Value::Array(_) | Value::Object(_) => {
            return Err(Error::Shape {
                row,
                column,
                message: format!("nested {} cannot be written as a field", kind_name(v)),
            });
        }
    })
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
