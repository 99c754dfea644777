//! Mic name parsing

use thiserror::Error;

const MIC_PREFIX: &str = "Mic";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MicNameError {
    #[error("invalid mic name format: must start with 'Mic'")]
    MissingPrefix,

    #[error("invalid mic name format: no number after 'Mic'")]
    MissingNumber,

    #[error("invalid mic name format: non-numeric characters after 'Mic'")]
    NotNumeric,
}

/// Extract the channel number from a name like `Mic12`.
///
/// The prefix is case-sensitive and the remainder must parse entirely as a
/// signed integer, so `Mic+3` and `Mic007` are accepted while `Mic 3` is not.
pub fn parse_mic_name(name: &str) -> Result<i64, MicNameError> {
    let digits = name
        .strip_prefix(MIC_PREFIX)
        .ok_or(MicNameError::MissingPrefix)?;

    if digits.is_empty() {
        return Err(MicNameError::MissingNumber);
    }

    digits.parse().map_err(|_| MicNameError::NotNumeric)
}
