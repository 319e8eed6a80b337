use anyhow::{Context, Result};
use bitspack_core::{analyze_transmission, Analysis};
use std::fs;
use std::io::{self, Read};
use tracing::info;

pub fn execute(input: &str, json: bool) -> Result<()> {
    let analysis = analyze_input(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        // Version sum first, then the evaluated value
        println!("{}", analysis.version_sum);
        println!("{}", analysis.value);
    }

    Ok(())
}

/// Read a transmission from a file (or stdin for "-") and run both walks
pub fn analyze_input(input: &str) -> Result<Analysis> {
    info!("Reading transmission: {}", input);

    let hex = read_transmission(input)?;
    let analysis = analyze_transmission(&hex)
        .with_context(|| format!("Failed to decode transmission from {}", input))?;

    Ok(analysis)
}

fn read_transmission(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}
