//! Replacing repeated early returns with raising helpers.
//!
//! This example demonstrates:
//! 1. Extracting call results with `capture(..).extract()`
//! 2. Adding context with `extract_with_context` and `hold!`
//! 3. Recovering at a single boundary with `catch`
//! 4. Telling sentinel failures apart from propagated errors

use std::{collections::HashMap, num::ParseIntError};

use must::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("port {0} is reserved")]
struct ReservedPort(u16);

fn check_port(port: u16) -> Result<u16, ReservedPort> {
    if port < 1024 {
        return Err(ReservedPort(port));
    }
    Ok(port)
}

fn parse(value: &str) -> Result<u16, ParseIntError> {
    value.parse()
}

/// Every fallible step is a single expression. The first one that fails
/// unwinds straight to the `catch` below.
fn listen_address(settings: &HashMap<&str, &str>) -> Result<String, Failure> {
    catch(|| {
        let host = *get(settings, "host");
        let port = capture(parse(get(settings, "port")))
            .extract_with_context(format_args!("settings[\"port\"]"));
        let port = capture(check_port(port)).extract();
        hold!(!host.is_empty(), "empty host");
        format!("{host}:{port}")
    })
}

fn main() {
    println!("=== Early Returns ===\n");

    let cases = [
        HashMap::from([("host", "localhost"), ("port", "8080")]),
        HashMap::from([("host", "localhost"), ("port", "eighty")]),
        HashMap::from([("host", "localhost"), ("port", "80")]),
        HashMap::from([("port", "8080")]),
        HashMap::from([("host", ""), ("port", "8080")]),
    ];

    for settings in &cases {
        match listen_address(settings) {
            Ok(address) => println!("listening on {address}"),
            Err(failure) => {
                println!("{failure}");
                match failure.sentinel() {
                    Some(sentinel) => println!("  (assertion: {sentinel:?})"),
                    None => println!("  (propagated: {})", failure.underlying()),
                }
            }
        }
    }
}
