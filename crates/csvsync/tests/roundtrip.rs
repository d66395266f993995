use csvsync::{Options, Table};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn numeric_grid_with_trailing_delimiters_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let (m, n) = (500, 500);
    let mut input = String::new();
    for i in 1..=m * n {
        input.push_str(&i.to_string());
        input.push(',');
        if i % m == 0 {
            input.push('\n');
        }
    }
    let opts = Options::default();
    let rows = csvsync::parse_rows(&input, &opts)?;
    assert_eq!(rows.len(), n);
    assert_eq!(rows[0].len(), m + 1);
    let output = csvsync::stringify(&rows, &opts)?;
    assert_eq!(input, output);
    Ok(())
}

#[test]
fn json_text_in_a_field_survives() -> Result<(), Box<dyn std::error::Error>> {
    let payload = serde_json::json!({
        "glossary": {
            "title": "example glossary",
            "nullfield": null,
            "GlossDiv": {
                "title": "S",
                "GlossList": {
                    "GlossEntry": {
                        "ID": "SGML",
                        "GlossTerm": "Standard Generalized Markup Language",
                        "Abbrev": "ISO 8879:1986",
                        "GlossDef": {
                            "para": "A meta-markup language",
                            "GlossSeeAlso": ["GML", "XML"]
                        }
                    }
                }
            }
        }
    });
    let text = serde_json::to_string(&payload)?;
    let csv = csvsync::stringify(&[vec!["header", "json"], vec!["column data", text.as_str()]], &Options::default())?;

    let opts = Options {
        return_object: true,
        ..Options::default()
    };
    let Table::Records(recs) = csvsync::parse(&csv, &opts)? else {
        panic!("expected records");
    };
    let field = recs[0].get("json").ok_or("missing json column")?;
    let back: serde_json::Value = serde_json::from_str(field)?;
    assert_eq!(back, payload);
    Ok(())
}

const ALPHABET: &[&str] = &["a", "b", "Z", "0", ",", ";", "\"", "\"\"", "\n", " ", "é", "∑"];

fn random_field(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..6);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

fn random_rows(rng: &mut StdRng) -> Vec<Vec<String>> {
    let rows = rng.random_range(1..8);
    (0..rows)
        .map(|_| {
            let width = rng.random_range(1..5);
            let mut row: Vec<String> = (0..width).map(|_| random_field(rng)).collect();
            // A lone empty or blank field would be an empty line, which the
            // document trim removes at either end.
            if row.len() == 1 && row[0].trim().is_empty() {
                row[0].push('x');
            }
            row
        })
        .collect()
}

fn fix_document_edges(rows: &mut [Vec<String>]) {
    if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
        if first.is_empty() || first.starts_with(char::is_whitespace) {
            first.insert(0, 'x');
        }
    }
    if let Some(last) = rows.last_mut().and_then(|r| r.last_mut()) {
        if last.is_empty() || last.ends_with(char::is_whitespace) {
            last.push('x');
        }
    }
}

#[test]
fn seeded_random_tables_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for delim in [',', ';', '\t'] {
        let opts = Options::with_delimiter(delim);
        for _ in 0..300 {
            let mut rows = random_rows(&mut rng);
            fix_document_edges(&mut rows);
            let text = csvsync::stringify(&rows, &opts)?;
            let back = csvsync::parse_rows(&text, &opts)?;
            assert_eq!(back, rows, "delimiter {:?}, text {:?}", delim, text);
        }
    }
    Ok(())
}

#[test]
fn quote_all_roundtrips_too() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![vec!["", "a", "b\"c"], vec!["multi\nline", ",", "\"\""]];
    let opts = Options {
        quote_all: true,
        ..Options::default()
    };
    let text = csvsync::stringify(&rows, &opts)?;
    assert_eq!(csvsync::parse_rows(&text, &opts)?, rows);
    Ok(())
}
