use crate::dab_transmission_modes::DabTransmissionMode;
use crate::dab_parameters::{DabPrimaryParameters, get_dab_primary_parameters};
use crate::dab_derived_parameters::{DabDerivedParameters, derive_dab_parameters};
use crate::dab_parameter_error::DabParameterError;
use std::sync::OnceLock;
use std::time::Duration;

/// The primary and derived parameters of a transmission mode.
/// This contains all the information required for OFDM demodulation and digital decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DabModeParameters {
    pub mode: DabTransmissionMode,
    pub primary: DabPrimaryParameters,
    pub derived: DabDerivedParameters,
}

impl DabModeParameters {
    /// Derives the full parameter set of a transmission mode from its primary record.
    pub fn new(mode: DabTransmissionMode) -> Result<Self, DabParameterError> {
        let primary = get_dab_primary_parameters(mode);
        let derived = derive_dab_parameters(&primary)?;
        Ok(Self { mode, primary, derived })
    }

    /// Duration of an OFDM symbol including its guard interval in microseconds.
    pub fn symbol_period_us(&self) -> usize {
        self.primary.guard_duration_us + self.primary.symbol_duration_us
    }

    pub fn frame_duration(&self) -> Duration {
        micros(self.primary.frame_duration_us)
    }

    pub fn null_duration(&self) -> Duration {
        micros(self.primary.null_duration_us)
    }

    pub fn guard_duration(&self) -> Duration {
        micros(self.primary.guard_duration_us)
    }

    pub fn symbol_duration(&self) -> Duration {
        micros(self.primary.symbol_duration_us)
    }
}

fn micros(us: usize) -> Duration {
    Duration::from_micros(us as u64)
}

/// Checks that every transmission mode derives without error.
pub fn validate_dab_parameter_table() -> Result<(), DabParameterError> {
    for mode in DabTransmissionMode::ALL {
        DabModeParameters::new(mode)?;
    }
    Ok(())
}

static DAB_MODE_TABLE: OnceLock<[DabModeParameters; 4]> = OnceLock::new();

fn build_dab_mode_table() -> [DabModeParameters; 4] {
    DabTransmissionMode::ALL.map(|mode| {
        match DabModeParameters::new(mode) {
            Ok(params) => {
                tracing::debug!(%mode, derived = ?params.derived, "Derived transmission mode parameters");
                params
            },
            Err(err) => {
                tracing::error!(%mode, %err, "Canonical transmission mode parameters are inconsistent");
                panic!("Transmission mode {} has inconsistent parameters: {}", mode, err);
            },
        }
    })
}

/// Returns the full parameters for a transmission mode.
/// The table is derived once on first use and shared between all callers afterwards.
///
/// # Panics
/// If a canonical record fails derivation. This is a defect in the table itself and is covered by tests.
pub fn get_dab_mode_parameters(transmission_mode: DabTransmissionMode) -> DabModeParameters {
    let table = DAB_MODE_TABLE.get_or_init(build_dab_mode_table);
    let index = (transmission_mode.index() - 1) as usize;
    table[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_mode() {
        for mode in DabTransmissionMode::ALL {
            assert_eq!(get_dab_mode_parameters(mode).mode, mode);
        }
    }

    #[test]
    fn memoized_table_matches_fresh_derivation() {
        for mode in DabTransmissionMode::ALL {
            assert_eq!(get_dab_mode_parameters(mode), DabModeParameters::new(mode).unwrap());
        }
    }

    #[test]
    fn symbol_period_includes_guard() {
        let params = get_dab_mode_parameters(DabTransmissionMode::I);
        assert_eq!(params.symbol_period_us(), 1246);
        assert_eq!(params.frame_duration(), Duration::from_millis(96));
        assert_eq!(params.null_duration(), Duration::from_micros(1297));
    }

    #[test]
    fn canonical_table_is_valid() {
        assert_eq!(validate_dab_parameter_table(), Ok(()));
    }
}
