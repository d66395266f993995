#![cfg(feature = "json")]
use std::collections::HashMap;

use csvsync::{Delimiter, Options};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Person {
    name: String,
    city: String,
}

#[derive(Debug, Serialize)]
struct Measurement {
    sensor: &'static str,
    value: f64,
    ok: bool,
    note: Option<&'static str>,
}

#[test]
fn decode_records_into_structs() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        return_object: true,
        ..Options::default()
    };
    let people: Vec<Person> =
        csvsync::decode_from_str("name,city\nAda,London\n\"Hopper, Grace\",Arlington\n", &opts)?;
    assert_eq!(
        people,
        vec![
            Person { name: "Ada".into(), city: "London".into() },
            Person { name: "Hopper, Grace".into(), city: "Arlington".into() },
        ]
    );
    Ok(())
}

#[test]
fn decode_rows_into_nested_vectors() -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<Vec<String>> = csvsync::decode_from_str("a,b\n1,2", &Options::default())?;
    assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    Ok(())
}

#[test]
fn decoded_json_keeps_header_order_and_absent_keys() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        return_object: true,
        ..Options::default()
    };
    let v: serde_json::Value = csvsync::decode_from_str("z,a,m\n1,2\n", &opts)?;
    assert_eq!(v, json!([{"z": "1", "a": "2"}]));
    let keys: Vec<_> = v[0].as_object().ok_or("object")?.keys().cloned().collect();
    assert_eq!(keys, ["z", "a"]);
    let maps: Vec<HashMap<String, String>> = csvsync::decode_from_str("z,a,m\n1,2\n", &opts)?;
    assert!(!maps[0].contains_key("m"));
    Ok(())
}

#[test]
fn encode_structs_writes_header_and_natural_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let data = vec![
        Measurement { sensor: "t1", value: 21.5, ok: true, note: None },
        Measurement { sensor: "t,2", value: 3.0, ok: false, note: Some("said \"hi\"") },
    ];
    let out = csvsync::encode_to_string(&data, &Options::default())?;
    assert_eq!(
        out,
        "sensor,value,ok,note\nt1,21.5,true,\n\"t,2\",3,false,\"said \"\"hi\"\"\"\n"
    );
    Ok(())
}

#[test]
fn encode_arrays_of_json_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let out = csvsync::encode_to_string(&json!([["x", 1, null, true], [-7, "y\nz"]]), &Options::default())?;
    assert_eq!(out, "x,1,,true\n-7,\"y\nz\"\n");
    Ok(())
}

#[test]
fn encode_rejects_non_tabular_values() {
    let err = csvsync::encode_to_string(&json!({"a": 1}), &Options::default()).unwrap_err();
    assert!(err.to_string().contains("expected an array"));
    let err = csvsync::encode_to_string(&json!([[{"deep": 1}]]), &Options::default()).unwrap_err();
    assert!(matches!(err, csvsync::Error::Shape { row: 0, column: 0, .. }));
}

#[test]
fn options_load_from_camel_case_json() -> Result<(), Box<dyn std::error::Error>> {
    let opts: Options = serde_json::from_value(json!({
        "delimiter": "|",
        "skipHeader": true,
        "returnObject": true,
        "headerKeys": ["invoice", "pos"],
        "removeFieldQuote": "\"",
        "trim": true
    }))?;
    assert_eq!(opts.delimiter, Delimiter::Pipe);
    assert!(opts.skip_header && opts.return_object && opts.trim);
    assert!(!opts.quote_all && !opts.unquoted_fields);
    assert_eq!(opts.header_keys.as_deref(), Some(&["invoice".to_string(), "pos".to_string()][..]));
    assert_eq!(opts.remove_field_quote, Some('"'));
    Ok(())
}

#[test]
fn options_reject_empty_delimiter() {
    let res: Result<Options, _> = serde_json::from_value(json!({"delimiter": ""}));
    let err = res.unwrap_err();
    assert!(err.to_string().contains("delimiter must not be empty"));
}
