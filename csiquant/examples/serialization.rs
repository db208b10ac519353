//! Serializing and deserializing quantities and units.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use csiquant::prelude::*;
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // A quantity keeps its unit: magnitude, dimension exponents and scale.
    println!("1. Basic JSON Serialization:");
    let distance = 42.5 * KILOMETERS;
    let json = serde_json::to_string(&distance).unwrap();
    println!("   {:?}\n   → {}", distance, json);
    println!();

    println!("2. Round trip keeps equality:");
    let restored: Quantity = serde_json::from_str(&json).unwrap();
    println!("   Equal: {}", restored == distance);
    println!("   In metres: {}", restored.get_as(METERS).unwrap());
    println!();

    println!("3. Quantities inside structs:");
    #[derive(Serialize, Deserialize, Debug)]
    struct Reading {
        sensor: String,
        pressure: Quantity,
        tolerance: Quantity,
    }

    let reading = Reading {
        sensor: "P-101".to_string(),
        pressure: 2.5 * MEGAPASCALS,
        tolerance: 10.0 * KILOPASCALS,
    };
    let json = serde_json::to_string_pretty(&reading).unwrap();
    println!("{json}");
    let back: Reading = serde_json::from_str(&json).unwrap();
    println!(
        "   Within tolerance of 2.505 MPa: {}",
        back.pressure
            .q_approx(2.505 * MEGAPASCALS, back.tolerance)
            .unwrap()
    );
    println!();

    println!("4. Invalid units are rejected:");
    let mut value = serde_json::to_value(METERS).unwrap();
    value["scale"] = serde_json::json!(0.0);
    match serde_json::from_value::<Unit>(value) {
        Ok(u) => println!("   unexpectedly accepted {u:?}"),
        Err(e) => println!("   rejected: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
