use super::DetectionArgs;
use crate::config::AppConfig;
use crate::detection::{Inspection, MessageDetector};
use crate::errors::{AppError, AppResult};
use crate::processor::ConfigValidator;
use clap::Args;

/// Run the detection pipeline on a single hex payload
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Payload as hex, with or without 0x prefix
    pub payload: String,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        let mut config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;
        self.detection.apply(&mut config.detection);
        ConfigValidator::validate_detection_config(&config.detection)?;

        let data = decode_payload_hex(&self.payload)?;
        let detector = MessageDetector::new(&config.detection)?;
        let inspection = detector.inspect(&data);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&inspection)?);
        } else {
            print!("{}", format_inspection(&inspection, data.len()));
        }
        Ok(())
    }
}

pub fn decode_payload_hex(input: &str) -> AppResult<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

fn format_inspection(inspection: &Inspection, payload_len: usize) -> String {
    let mut s = format!("Payload: {} bytes\n", payload_len);
    match &inspection.signature {
        Some(name) => s.push_str(&format!("Known call: {} (skipped by scanner)\n", name)),
        None => s.push_str("Known call: none\n"),
    }
    s.push_str(&format!("Decoded: {:?}\n", inspection.decoded));
    if inspection.candidates.is_empty() {
        s.push_str("Candidates: none\n");
    } else {
        s.push_str("Candidates:\n");
        for candidate in &inspection.candidates {
            s.push_str(&format!("  - {:?} [{}]\n", candidate.text, candidate.reason));
        }
    }
    let accepted: Vec<&str> = inspection.accepted().collect();
    s.push_str(&format!("Possible messages: {}\n", accepted.len()));
    for message in accepted {
        s.push_str(&format!("  - {:?}\n", message));
    }
    s
}
