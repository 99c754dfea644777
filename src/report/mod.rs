//! Per-cue microphone report

mod mic;
mod render;

pub use mic::{parse_mic_name, MicNameError};
pub use render::{render_to_string, write_report, ReportMode};
