// Example demonstrating the simple parse API

use leptjson::{parse, Value, ValueType};

fn describe(value: &Value) -> String {
    match value.get_type() {
        ValueType::Null => "null".to_string(),
        ValueType::True | ValueType::False => format!("bool {}", value.get_boolean()),
        ValueType::Number => format!("number {}", value.get_number()),
        ValueType::String => format!("string '{}'", value.get_string()),
        other => format!("{other}"),
    }
}

fn main() {
    let inputs = [
        "null",
        "  true  ",
        "-1.5e3",
        r#""hello""#,
        "",
        "nul",
        "0123",
        "1e309",
        r#""unterminated"#,
    ];

    let mut value = Value::new();
    for json in inputs {
        match parse(&mut value, json) {
            Ok(()) => println!("{json:?} -> {}", describe(&value)),
            Err(e) => println!("{json:?} -> error {} ({e})", e.code()),
        }
    }
}
