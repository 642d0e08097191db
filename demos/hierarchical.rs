//! Dotted keys becoming nested objects.
//!
//! Run with: cargo run --example hierarchical

use props2json::{to_document, Options};

fn main() {
    let pairs = vec![
        ("server.http.port".to_string(), "8080".to_string()),
        ("server.http.host".to_string(), "localhost".to_string()),
        ("server.tls".to_string(), "false".to_string()),
        ("name".to_string(), "demo".to_string()),
    ];

    let options = Options::new().with_hierarchical(true);
    let document = to_document(pairs.clone(), &options);

    println!("hierarchical:");
    println!("{}", serde_json::to_string_pretty(&document).unwrap());
    // {
    //   "server": {
    //     "http": { "port": 8080, "host": "localhost" },
    //     "tls": false
    //   },
    //   "name": "demo"
    // }

    // Raw-data mode keeps every value as its original string
    let options = options.with_raw_data(true);
    let document = to_document(pairs, &options);

    println!("hierarchical + raw-data:");
    println!("{}", serde_json::to_string_pretty(&document).unwrap());
}
