//! Writing and reading both wire formats.
//!
//! Run with: cargo run --example codecs

use serde::{Deserialize, Serialize};
use serial_value::{
    read, write, Binary, BinaryOptions, Format, Json, JsonOptions, Value,
};
use std::error::Error;
use std::io::Cursor;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Reading {
    sensor: String,
    offset: i32,
    samples: Vec<f64>,
    flag: char,
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn Error>> {
    let reading = Reading {
        sensor: "north-7".to_string(),
        offset: 4,
        samples: vec![1.0, 2.5, f64::INFINITY],
        flag: 'K',
    };

    // Same data, two formats
    let mut text = Vec::new();
    write(&Json::fancy(), &reading, &mut text)?;
    println!("JSON dialect:\n{}\n", String::from_utf8(text.clone())?);

    let mut bytes = Vec::new();
    write(&Binary::new(), &reading, &mut bytes)?;
    println!("Binary ({} bytes):\n{}\n", bytes.len(), hex(&bytes));

    let from_text: Reading = read(&Json::new(), Cursor::new(&text))?;
    let from_bytes: Reading = read(&Binary::new(), bytes.as_slice())?;
    assert_eq!(from_text, reading);
    assert_eq!(from_bytes, reading);
    println!("Both formats read back: {:?}\n", from_bytes);

    // The dialect keeps every variant distinguishable
    for text in ["+5", "5", "5.0", "\"x\"", "\"xy\"", "\"@pointer=0x1f\"", "-Infinity"] {
        let value = Json::new().parse_str(text)?;
        println!("{:<18} reads as {}", text, value.kind().name());
    }
    println!();

    // Permissive by default, strict on request
    let sloppy = "[1,,2,]";
    println!("Permissive {}: {}", sloppy, Json::new().parse_str(sloppy)?);
    let strict = Json::with_options(JsonOptions::new().with_strict(true));
    if let Err(e) = strict.parse_str(sloppy) {
        println!("Strict {}: {}\n", sloppy, e);
    }

    // Malformed input reports where it went wrong
    if let Err(e) = Json::new().parse_str("{\n  \"a\": }") {
        println!("Syntax error: {}", e);
    }
    if let Err(e) = Binary::new().from_slice(&bytes[..bytes.len() - 1]) {
        println!("Binary error: {}", e);
    }

    // Depth limits guard against hostile nesting
    let deep = "[".repeat(200) + &"]".repeat(200);
    if let Err(e) = Json::new().parse_str(&deep) {
        println!("Depth error: {}", e);
    }
    let lenient = Binary::with_options(BinaryOptions::new().with_max_depth(256));
    let nested = Json::with_options(JsonOptions::new().with_max_depth(256)).parse_str(&deep)?;
    let encoded = lenient.to_vec(&nested)?;
    println!(
        "Depth 200 with a raised limit: {} bytes, decoded {}",
        encoded.len(),
        lenient.from_slice(&encoded)? == nested
    );

    // Values that one format cannot carry
    if let Err(e) = Binary::new().to_vec(&Value::Char('€')) {
        println!("Unencodable: {}", e);
    }

    Ok(())
}
