//! Flat conversion with typed scalars.
//!
//! Run with: cargo run --example flat

use props2json::{to_document, Options};

fn main() {
    // Pairs as an upstream properties parser would supply them, in file order.
    // The source file looked like:
    //
    //   app.name=demo
    //   app.workers=4
    //   app.ratio=0.75
    //   app.verbose=true
    let pairs = vec![
        ("app.name".to_string(), "demo".to_string()),
        ("app.workers".to_string(), "4".to_string()),
        ("app.ratio".to_string(), "0.75".to_string()),
        ("app.verbose".to_string(), "true".to_string()),
    ];

    // Default options: flat structure, typed values
    let document = to_document(pairs, &Options::new());

    println!("{}", serde_json::to_string_pretty(&document).unwrap());
    // {
    //   "app.name": "demo",
    //   "app.workers": 4,
    //   "app.ratio": 0.75,
    //   "app.verbose": true
    // }
}
