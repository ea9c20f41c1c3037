use dab_core::dab_transmission_modes::DabTransmissionMode;
use dab_core::dab_mode_parameters::{DabModeParameters, get_dab_mode_parameters};
use num::Integer;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DabRadioParameterError {
    #[error("Cannot split {total} evenly into {parts} parts for {name}")]
    UnevenPartition { name: &'static str, total: usize, parts: usize },
    #[error("Bit count of {name} overflows: {symbols} symbols of {bits_per_symbol} bits")]
    BitCountOverflow { name: &'static str, symbols: usize, bits_per_symbol: usize },
}

/// Bit budget of a DAB frame after OFDM demodulation, used to size decoder buffers.
/// The FIC is split into one fast information group (FIG) of FIBs per CIF of the MSC.
///
/// ```text
/// | SYM*75             |
/// | FIC       | MSC    |
/// | FIG*4     | CIF*4  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DabRadioParameters {
    /// Number of data symbols in each frame.
    pub nb_symbols: usize,
    pub nb_fic_symbols: usize,
    pub nb_msc_symbols: usize,
    pub nb_fibs_in_fic: usize,
    pub nb_cifs_in_msc: usize,
    /// Number of FIBs in the group that describes one CIF.
    pub nb_fibs_per_cif: usize,
    pub nb_bits_per_symbol: usize,
    pub nb_bits_per_frame: usize,
    pub nb_bits_in_fic: usize,
    pub nb_bits_in_msc: usize,
    /// Number of coded bits carrying one FIB.
    pub nb_bits_per_fib: usize,
    /// Number of coded bits carrying one FIG.
    pub nb_bits_per_fig: usize,
    pub nb_bits_per_cif: usize,
    /// Number of uncoded FIB bits describing one CIF.
    pub nb_fib_codeword_bits: usize,
}

fn count_bits(name: &'static str, symbols: usize, bits_per_symbol: usize) -> Result<usize, DabRadioParameterError> {
    symbols.checked_mul(bits_per_symbol)
        .ok_or(DabRadioParameterError::BitCountOverflow { name, symbols, bits_per_symbol })
}

fn split_evenly(name: &'static str, total: usize, parts: usize) -> Result<usize, DabRadioParameterError> {
    let error = DabRadioParameterError::UnevenPartition { name, total, parts };
    if parts == 0 {
        return Err(error);
    }
    match total.div_rem(&parts) {
        (bits, 0) => Ok(bits),
        _ => Err(error),
    }
}

impl DabRadioParameters {
    pub fn new(params: &DabModeParameters) -> Result<Self, DabRadioParameterError> {
        let primary = &params.primary;
        let derived = &params.derived;

        let nb_symbols = derived.frame_symbols;
        let nb_fic_symbols = primary.fic_symbols;
        let nb_msc_symbols = derived.msc_symbols;
        let nb_fibs_in_fic = primary.frame_fibs;
        let nb_cifs_in_msc = primary.frame_cifs;
        let nb_bits_per_symbol = derived.symbol_bits;
        let nb_bits_per_frame = count_bits("frame", nb_symbols, nb_bits_per_symbol)?;
        let nb_bits_in_fic = count_bits("FIC", nb_fic_symbols, nb_bits_per_symbol)?;
        let nb_bits_in_msc = count_bits("MSC", nb_msc_symbols, nb_bits_per_symbol)?;
        let nb_fibs_per_cif = split_evenly("FIBs per CIF", nb_fibs_in_fic, nb_cifs_in_msc)?;
        let nb_bits_per_fib = split_evenly("FIB", nb_bits_in_fic, nb_fibs_in_fic)?;
        let nb_bits_per_fig = split_evenly("FIG", nb_bits_in_fic, nb_cifs_in_msc)?;
        let nb_bits_per_cif = split_evenly("CIF", nb_bits_in_msc, nb_cifs_in_msc)?;

        Ok(Self {
            nb_symbols,
            nb_fic_symbols,
            nb_msc_symbols,
            nb_fibs_in_fic,
            nb_cifs_in_msc,
            nb_fibs_per_cif,
            nb_bits_per_symbol,
            nb_bits_per_frame,
            nb_bits_in_fic,
            nb_bits_in_msc,
            nb_bits_per_fib,
            nb_bits_per_fig,
            nb_bits_per_cif,
            nb_fib_codeword_bits: derived.fib_codeword_bits,
        })
    }
}

/// Returns useful parameters used in DAB digital decoding for a given transmission mode
pub fn get_dab_radio_parameters(transmission_mode: DabTransmissionMode) -> Result<DabRadioParameters, DabRadioParameterError> {
    DabRadioParameters::new(&get_dab_mode_parameters(transmission_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dab_core::dab_derived_parameters::derive_dab_parameters;

    #[test]
    fn mode_i_bit_budget() {
        let params = get_dab_radio_parameters(DabTransmissionMode::I).unwrap();
        assert_eq!(params.nb_bits_per_frame, 230400);
        assert_eq!(params.nb_bits_in_fic, 9216);
        assert_eq!(params.nb_bits_in_msc, 221184);
        assert_eq!(params.nb_bits_per_fib, 768);
        assert_eq!(params.nb_bits_per_fig, 2304);
        assert_eq!(params.nb_bits_per_cif, 55296);
        assert_eq!(params.nb_fibs_per_cif, 3);
        assert_eq!(params.nb_fib_codeword_bits, 768);
    }

    #[test]
    fn every_mode_partitions_evenly() {
        for mode in DabTransmissionMode::ALL {
            let params = get_dab_radio_parameters(mode).unwrap();
            assert_eq!(params.nb_bits_per_frame, params.nb_bits_in_fic + params.nb_bits_in_msc);
            assert_eq!(params.nb_bits_per_fig, params.nb_bits_per_fib*params.nb_fibs_per_cif);
            assert_eq!(params.nb_bits_in_msc, params.nb_bits_per_cif*params.nb_cifs_in_msc);
        }
    }

    #[test]
    fn fig_carries_fib_codeword() {
        // The FIG holds the convolutionally coded FIB bits of one CIF.
        for mode in DabTransmissionMode::ALL {
            let params = get_dab_radio_parameters(mode).unwrap();
            assert!(params.nb_bits_per_fig > params.nb_fib_codeword_bits);
        }
    }

    #[test]
    fn uneven_fib_split_is_reported() {
        let mut params = get_dab_mode_parameters(DabTransmissionMode::I);
        // 3 FIBs over 2 CIFs still derives since the split is over bits, but FIBs do not group evenly.
        params.primary.frame_fibs = 3;
        params.primary.frame_cifs = 2;
        params.derived = derive_dab_parameters(&params.primary).unwrap();
        assert_eq!(
            DabRadioParameters::new(&params),
            Err(DabRadioParameterError::UnevenPartition { name: "FIBs per CIF", total: 3, parts: 2 }),
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_symbols_report_overflow() {
        let mut params = get_dab_mode_parameters(DabTransmissionMode::I);
        params.primary.carriers = 1 << 62;
        params.derived = derive_dab_parameters(&params.primary).unwrap();
        assert_eq!(
            DabRadioParameters::new(&params),
            Err(DabRadioParameterError::BitCountOverflow { name: "frame", symbols: 75, bits_per_symbol: 1 << 63 }),
        );
    }
}
