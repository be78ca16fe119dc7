//! Turn a [`Resolution`] into user-facing output.
//!
//! The text wording follows the package manager's established hints exactly;
//! scripts that wrap the shell hook depend on it. JSON output carries the
//! same information plus per-candidate enablement state.

use crate::enablement::EnablementProbe;
use cmdhint_match::classify;
use cmdhint_types::{Classification, Resolution};
use serde::Serialize;

/// Human-readable message for the error stream. Always ends with a newline
/// unless the resolution produced nothing to say (it never does: every
/// classification has a message).
pub fn render_text(command: &str, resolution: &Resolution, probe: &dyn EnablementProbe) -> String {
    let mut out = String::new();
    match classify(resolution) {
        Classification::NotFound => {
            out.push_str(&format!("{command}: command not found\n"));
        }
        Classification::Installable => {
            out.push_str(&format!(
                "The program {command} is not installed. Install it by executing:\n"
            ));
            let last = resolution.candidates.len().saturating_sub(1);
            for (i, (package, candidate)) in resolution.candidates.iter().enumerate() {
                out.push_str(&format!(" pkg install {package}"));
                if !candidate.channel.is_default() && !probe.is_enabled(&candidate.channel) {
                    out.push_str(&format!(
                        ", after running pkg install {}-repo",
                        candidate.channel
                    ));
                }
                out.push('\n');
                if i != last {
                    out.push_str("or\n");
                }
            }
        }
        Classification::Suggest => {
            out.push_str(&format!("No command {command} found, did you mean:\n"));
            for (package, candidate) in &resolution.candidates {
                out.push_str(&format!(
                    " Command {} in package {package}",
                    candidate.binary
                ));
                if !candidate.channel.is_default() && !probe.is_enabled(&candidate.channel) {
                    out.push_str(&format!(
                        " from the {}-repo repository",
                        candidate.channel
                    ));
                }
                out.push('\n');
            }
        }
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    command: &'a str,
    classification: Classification,
    best_distance: Option<u32>,
    candidates: Vec<JsonCandidate<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCandidate<'a> {
    package: &'a str,
    binary: &'a str,
    channel: &'a str,
    enabled: bool,
}

/// Machine-readable rendition: classification, best distance, and the
/// ordered candidate list with enablement state baked in.
pub fn render_json(
    command: &str,
    resolution: &Resolution,
    probe: &dyn EnablementProbe,
) -> anyhow::Result<String> {
    let report = JsonReport {
        command,
        classification: classify(resolution),
        best_distance: resolution.best_distance,
        candidates: resolution
            .candidates
            .iter()
            .map(|(package, candidate)| JsonCandidate {
                package,
                binary: &candidate.binary,
                channel: candidate.channel.as_str(),
                enabled: probe.is_enabled(&candidate.channel),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
