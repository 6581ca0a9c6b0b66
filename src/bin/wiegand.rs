//! Wiegand conversion utility
//! Encodes plate identifiers to Wiegand codes and decodes codes back to fields

use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use wiegand_rs::{wiegand26, wiegand64, Wiegand26Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode26,
    Decode26,
    Encode64,
    Decode64,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "encode26" => Some(Command::Encode26),
            "decode26" => Some(Command::Decode26),
            "encode64" => Some(Command::Encode64),
            "decode64" => Some(Command::Decode64),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so stdout stays machine-readable
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).and_then(|name| Command::parse(name)) else {
        print_usage(&args[0]);
        std::process::exit(1);
    };

    let json = args[2..].iter().any(|a| a == "--json");
    let mut values: Vec<String> = args[2..]
        .iter()
        .filter(|a| a.as_str() != "--json")
        .cloned()
        .collect();

    if values.is_empty() {
        tracing::debug!("No values on the command line, reading stdin");
        values = read_stdin_lines().await?;
    }

    let mut failures = 0usize;
    for value in &values {
        match convert(command, value, json) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                tracing::warn!("Failed to convert {:?}: {}", value, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} values failed", failures, values.len());
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <encode26|decode26|encode64|decode64> [--json] [VALUE...]",
        program
    );
    eprintln!("\nExamples:");
    eprintln!("  {} encode26 1WFV385           # Wiegand 26-bit fields", program);
    eprintln!("  {} decode26 1A98B4B           # Fields of a 26-bit code", program);
    eprintln!("  {} encode64 --json AZERTYUIOP # 64-bit code as JSON", program);
    eprintln!("  {} decode64 < codes.txt       # One code per stdin line", program);
    eprintln!("\nSet RUST_LOG=debug to trace each conversion.");
}

async fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut values = Vec::new();

    while let Some(line) = lines.next_line().await? {
        values.push(line);
    }

    Ok(values)
}

fn convert(command: Command, value: &str, json: bool) -> anyhow::Result<String> {
    match command {
        Command::Encode26 => render_wiegand26(wiegand26::encode(Some(value))?, json),
        Command::Decode26 => render_wiegand26(wiegand26::decode(Some(value))?, json),
        Command::Encode64 => render_text(wiegand64::encode(Some(value))?, json),
        Command::Decode64 => render_text(wiegand64::decode(Some(value))?, json),
    }
}

fn render_wiegand26(result: Option<Wiegand26Result>, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(&result)?);
    }

    Ok(match result {
        Some(r) => format!(
            "{} payload={} FC+ID={}",
            r,
            r.decimal_payload(),
            r.facility_code_and_id_number()
        ),
        None => String::new(),
    })
}

fn render_text(result: Option<String>, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(&result)?)
    } else {
        Ok(result.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("encode26"), Some(Command::Encode26));
        assert_eq!(Command::parse("decode64"), Some(Command::Decode64));
        assert_eq!(Command::parse("encode"), None);
    }

    #[test]
    fn test_convert_plain() {
        assert_eq!(
            convert(Command::Encode26, "1WFV385", false).unwrap(),
            "1A98B4B FC=212 ID=50597 payload=13944229 FC+ID=21250597"
        );
        assert_eq!(
            convert(Command::Encode64, "AZERTYUIOP", false).unwrap(),
            "66B37ABB72BA2A29"
        );
        assert_eq!(convert(Command::Decode64, "6000000000000033", false).unwrap(), "Z");
        assert_eq!(convert(Command::Encode64, "  ", false).unwrap(), "");
    }

    #[test]
    fn test_convert_json() {
        assert_eq!(convert(Command::Encode64, "Z", true).unwrap(), "\"6000000000000033\"");
        assert_eq!(convert(Command::Decode26, "", true).unwrap(), "null");

        let line = convert(Command::Decode26, "31C234A", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["facilityCode"], 142);
        assert_eq!(value["idNumber"], 4517);
    }

    #[test]
    fn test_convert_errors() {
        assert!(convert(Command::Encode26, "AZERTYUIOP0987", false).is_err());
        assert!(convert(Command::Decode26, "4000000", false).is_err());
        assert!(convert(Command::Decode64, "not-hex", false).is_err());
    }
}
