use std::fmt;
use thiserror::Error;

/// The four transmission modes standardised for DAB.
/// Each mode trades the number of subcarriers against the symbol duration to suit a different propagation environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DabTransmissionMode {
    I,
    II,
    III,
    IV,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DabModeError {
    #[error("Invalid transmission mode index {0}, valid modes are [1,2,3,4]")]
    InvalidModeIndex(u32),
}

impl DabTransmissionMode {
    /// All transmission modes in the order they are numbered by the standard.
    pub const ALL: [DabTransmissionMode; 4] = [
        DabTransmissionMode::I,
        DabTransmissionMode::II,
        DabTransmissionMode::III,
        DabTransmissionMode::IV,
    ];

    /// Mode number as written in the standard, from 1 to 4.
    pub fn index(self) -> u32 {
        match self {
            DabTransmissionMode::I => 1,
            DabTransmissionMode::II => 2,
            DabTransmissionMode::III => 3,
            DabTransmissionMode::IV => 4,
        }
    }
}

impl TryFrom<u32> for DabTransmissionMode {
    type Error = DabModeError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(DabTransmissionMode::I),
            2 => Ok(DabTransmissionMode::II),
            3 => Ok(DabTransmissionMode::III),
            4 => Ok(DabTransmissionMode::IV),
            index => Err(DabModeError::InvalidModeIndex(index)),
        }
    }
}

impl fmt::Display for DabTransmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DabTransmissionMode::I => "I",
            DabTransmissionMode::II => "II",
            DabTransmissionMode::III => "III",
            DabTransmissionMode::IV => "IV",
        };
        f.write_str(name)
    }
}
