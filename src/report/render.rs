//! Report line formatting

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Deserialize;

use super::mic::parse_mic_name;
use crate::model::{Cue, Production};

/// How the active microphones of a cue are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// `<Q> | <Description>, Mics On: [3, 10]`, skipping names that are not `Mic<N>`
    #[default]
    Numeric,
    /// `Q: <Q>, Description: <Description>, Mics On: ["Mic3", "Lav"]`
    Raw,
}

/// Write one line per cue, in document order
pub fn write_report<W: Write>(
    production: &Production,
    mode: ReportMode,
    out: &mut W,
) -> io::Result<()> {
    for cue in production.cues() {
        log::debug!(
            "cue {} (uid {:?}, type {}, enabled {}): {} message(s)",
            cue.q,
            cue.uid,
            cue.kind,
            cue.enabled,
            cue.msgs.len()
        );
        writeln!(out, "{}", render_cue(cue, mode))?;
    }
    out.flush()
}

/// Render the whole report to a string
pub fn render_to_string(production: &Production, mode: ReportMode) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(production, mode, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn render_cue(cue: &Cue, mode: ReportMode) -> String {
    match mode {
        ReportMode::Numeric => {
            let mics = mic_numbers(cue);
            if mics.is_empty() {
                format!("{} | {}, Mics On: none", cue.q, cue.description)
            } else {
                format!(
                    "{} | {}, Mics On: [{}]",
                    cue.q,
                    cue.description,
                    mics.join(", ")
                )
            }
        }
        ReportMode::Raw => {
            let names: Vec<&str> = cue
                .msgs
                .iter()
                .filter(|m| m.is_on())
                .map(|m| m.name.as_str())
                .collect();
            format!(
                "Q: {}, Description: {}, Mics On: {:?}",
                cue.q, cue.description, names
            )
        }
    }
}

fn mic_numbers(cue: &Cue) -> Vec<String> {
    cue.msgs
        .iter()
        .filter(|m| m.is_on())
        .filter_map(|m| match parse_mic_name(&m.name) {
            Ok(n) => Some(n.to_string()),
            Err(e) => {
                log::debug!("cue {}: skipping '{}': {}", cue.q, m.name, e);
                None
            }
        })
        .collect()
}
