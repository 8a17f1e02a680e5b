//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serial_value::{from_value, to_json_string_pretty, to_value, value, Kind, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with value! macro
    let mut config = value!({
        "host": "localhost",
        "port": "8080",
        "features": ["auth", "logging", "metrics"],
        "debug": "off"
    });

    println!("Config as JSON:\n{}\n", to_json_string_pretty(&config)?);

    // Access values dynamically, coercing as needed
    println!("Accessing field 'host': {}", config.member("host")?.get_string()?);
    println!("Accessing field 'port': {}", config.member("port")?.get_unsigned()?);
    println!("Accessing field 'debug': {}", config.member("debug")?.get_bool()?);
    println!(
        "Accessing field 'features': {} items\n",
        config.member("features")?.len()
    );

    // Mutating accessors rewrite the value to the requested kind
    *config.member_mut("port")?.get_unsigned_mut()? += 1;
    config.member_mut("features")?.get_object_mut()?;
    println!("After mutation:\n{}\n", config);

    // Missing members and failed coercions are errors, not panics
    if let Err(e) = config.member("timeout") {
        println!("Lookup failed: {}", e);
    }
    if let Err(e) = config.member("host")?.get_float() {
        println!("Coercion failed: {}\n", e);
    }

    // Convert existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let mut user_value = to_value(&user)?;
    println!("User as Value:\n{}\n", to_json_string_pretty(&user_value)?);

    // Runtime type checking
    println!("Type checks:");
    println!("  kind:      {}", user_value.kind().name());
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    // Edit dynamically, then go back to the typed struct
    *user_value.member_mut("id")?.set_unsigned() = 7;
    user_value
        .member_mut("roles")?
        .get_array_mut()?
        .push(Value::from("auditor"));
    let edited: User = from_value(user_value)?;
    println!("\nEdited user: {:?}", edited);

    let blank = Value::new(Kind::Object);
    println!("A fresh object: {}", blank);

    Ok(())
}
