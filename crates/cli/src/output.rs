//! Output formatting for CLI responses

use std::net::SocketAddr;

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;
use xplane_autopilot::Phase;
use xplane_fields::{CATALOGUE, DataPacket, NamedQuantity, read_group};
use xplane_udp::{TakeoffSummary, TelemetryFrame};

use crate::error::CliError;

/// One catalogue group as reported in a packet.
#[derive(Debug, Serialize)]
pub struct GroupReading {
    pub group: &'static str,
    pub index: u16,
    pub values: Vec<NamedQuantity>,
}

/// Readable catalogue groups present in `packet`, in catalogue order.
pub fn readings(packet: &DataPacket) -> Vec<GroupReading> {
    CATALOGUE
        .iter()
        .filter(|group| group.access.readable())
        .filter_map(|group| {
            read_group(packet, group).ok().map(|values| GroupReading {
                group: group.name,
                index: group.index,
                values,
            })
        })
        .collect()
}

/// JSON document for one telemetry frame.
pub fn frame_json(frame: &TelemetryFrame) -> serde_json::Value {
    json!({
        "source": frame.source.to_string(),
        "sequence": frame.sequence,
        "raw_size": frame.raw_size,
        "timestamp_ns": frame.timestamp_ns,
        "groups": readings(&frame.packet),
    })
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "code": error.downcast_ref::<CliError>().map_or(1, CliError::exit_code),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
    }
}

pub fn print_listening(local: SocketAddr) {
    println!(
        "{} {} {}",
        "Listening on".bold(),
        local.to_string().cyan(),
        "(Ctrl-C to stop)".dimmed()
    );
}

/// Print one telemetry frame: a compact JSON line, or a labelled block.
pub fn print_frame(frame: &TelemetryFrame, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(&frame_json(frame))?);
        return Ok(());
    }

    println!(
        "{} #{} from {} ({} bytes)",
        "DATA".green().bold(),
        frame.sequence,
        frame.source,
        frame.raw_size
    );
    for reading in readings(&frame.packet) {
        println!("  {} [{}]", reading.group.bold(), reading.index);
        for value in &reading.values {
            println!("    {:<24} {:.4}", value.name, value.quantity);
        }
    }
    Ok(())
}

pub fn print_takeoff_start(local: SocketAddr, remote: SocketAddr) {
    println!(
        "{} sending to {}, listening on {}",
        "Takeoff armed:".green().bold(),
        remote.to_string().cyan(),
        local.to_string().cyan()
    );
}

pub fn print_takeoff_summary(
    summary: &TakeoffSummary,
    phase: Phase,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "phase": phase.name(),
            "ticks": summary.ticks,
            "packets_sent": summary.packets_sent,
            "ignored": summary.ignored,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} after {} ticks ({} packets sent, {} ignored)",
            "Climb complete".green().bold(),
            summary.ticks,
            summary.packets_sent,
            summary.ignored
        );
    }
    Ok(())
}

pub fn print_takeoff_aborted(json: bool) -> Result<(), CliError> {
    if json {
        let output = json!({ "success": false, "phase": Phase::Idle.name(), "aborted": true });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", "Takeoff aborted".yellow().bold());
    }
    Ok(())
}
