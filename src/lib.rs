//! Cue list microphone reporter
//!
//! Reads a production cue list (`<Production><CueList><Cue>...`) and reports,
//! per cue, which microphones its messages switch on.

pub mod cli;
pub mod config;
pub mod loader;
pub mod model;
pub mod parser;
pub mod report;
