use anyhow::{Context, Result};
use bitspack_core::{decode_transmission, evaluate, version_sum, Packet, PacketBody};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

#[derive(Serialize, Deserialize)]
pub struct TreeSummary {
    pub packets: usize,
    pub literals: usize,
    pub operators: usize,
    pub max_depth: usize,
    pub version_sum: u64,
    pub value: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct InspectReport {
    pub summary: TreeSummary,
    pub tree: Packet,
}

pub fn execute(input: &str, json: bool, output: Option<&str>) -> Result<()> {
    info!("Inspecting transmission: {}", input);

    let hex = read_transmission(input)?;
    let packet = decode_transmission(&hex)
        .with_context(|| format!("Failed to decode transmission from {}", input))?;

    let value = match evaluate(&packet) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Expression could not be evaluated: {}", e);
            None
        }
    };

    let literals = count_literals(&packet);
    let report = InspectReport {
        summary: TreeSummary {
            packets: packet.packet_count(),
            literals,
            operators: packet.packet_count() - literals,
            max_depth: packet.depth(),
            version_sum: version_sum(&packet),
            value,
        },
        tree: packet,
    };

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize inspection report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Inspection report written to: {}", output_path);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Packet Tree ===");
    print_tree(&report.tree, 0);

    println!("\n=== Summary ===");
    println!("Packets:      {}", report.summary.packets);
    println!("Literals:     {}", report.summary.literals);
    println!("Operators:    {}", report.summary.operators);
    println!("Max depth:    {}", report.summary.max_depth);
    println!("Version sum:  {}", report.summary.version_sum);
    match report.summary.value {
        Some(value) => println!("Value:        {}", value.to_string().green()),
        None => println!("Value:        {}", "not evaluable".red()),
    }

    Ok(())
}

fn print_tree(packet: &Packet, depth: usize) {
    let indent = "  ".repeat(depth);
    match &packet.body {
        PacketBody::Literal(value) => {
            println!("{}{} v{} {}", indent, "literal".cyan(), packet.version, value);
        }
        PacketBody::Operator { op, children } => {
            println!(
                "{}{} v{} ({} sub-packets)",
                indent,
                op.to_string().yellow(),
                packet.version,
                children.len()
            );
            for child in children {
                print_tree(child, depth + 1);
            }
        }
    }
}

fn count_literals(packet: &Packet) -> usize {
    match &packet.body {
        PacketBody::Literal(_) => 1,
        PacketBody::Operator { children, .. } => children.iter().map(count_literals).sum(),
    }
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
