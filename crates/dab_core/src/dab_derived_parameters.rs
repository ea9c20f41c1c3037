use crate::dab_parameters::DabPrimaryParameters;
use crate::dab_parameter_error::{DabParameterError, SymbolCountViolation};
use crate::power_of_two::next_power_of_two;
use num::Integer;

/// Number of bits in each fast information block (FIB).
pub const FIB_BITS: usize = 256;
/// Each carrier holds one DQPSK symbol, which is 2 bits.
pub const BITS_PER_CARRIER: usize = 2;

/// Parameters derived from a `DabPrimaryParameters` record.
/// These are never stored as a source of truth and are always recomputed with `derive_dab_parameters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DabDerivedParameters {
    /// Number of data symbols in a frame, with the phase reference symbol removed.
    pub frame_symbols: usize,
    /// Number of symbols for the main service channel (MSC). This carries radio data for each channel in the ensemble.
    pub msc_symbols: usize,
    /// Number of FIB bits that describe a single CIF.
    pub fib_codeword_bits: usize,
    /// Number of bits in a single OFDM symbol.
    pub symbol_bits: usize,
    /// Smallest power of two FFT length that holds all carriers.
    pub fft_length: usize,
}

/// Derives the secondary parameters of a transmission mode and checks that the primary record is consistent.
///
/// # Errors
/// - `InvalidSymbolCount` if the frame has no phase reference symbol or the FIC is larger than the frame.
/// - `InvalidCifCount` if there are no CIFs.
/// - `InvalidCifPartition` if the FIB bits cannot be split evenly between the CIFs.
/// - `InvalidCarrierCount` if no FFT length can hold the carriers.
pub fn derive_dab_parameters(params: &DabPrimaryParameters) -> Result<DabDerivedParameters, DabParameterError> {
    let invalid_symbol_count = |violation| DabParameterError::InvalidSymbolCount {
        violation,
        frame_symbols_raw: params.frame_symbols_raw,
        fic_symbols: params.fic_symbols,
    };
    let frame_symbols = params.frame_symbols_raw.checked_sub(1)
        .ok_or_else(|| invalid_symbol_count(SymbolCountViolation::MissingPhaseReference))?;
    let msc_symbols = frame_symbols.checked_sub(params.fic_symbols)
        .ok_or_else(|| invalid_symbol_count(SymbolCountViolation::FicExceedsFrame))?;

    if params.frame_cifs == 0 {
        return Err(DabParameterError::InvalidCifCount {
            frame_fibs: params.frame_fibs,
            frame_cifs: params.frame_cifs,
        });
    }

    let invalid_cif_partition = DabParameterError::InvalidCifPartition {
        frame_fibs: params.frame_fibs,
        frame_cifs: params.frame_cifs,
    };
    let frame_fib_bits = params.frame_fibs.checked_mul(FIB_BITS).ok_or(invalid_cif_partition.clone())?;
    let (fib_codeword_bits, remainder) = frame_fib_bits.div_rem(&params.frame_cifs);
    if remainder != 0 {
        return Err(invalid_cif_partition);
    }

    let invalid_carrier_count = DabParameterError::InvalidCarrierCount { carriers: params.carriers };
    let symbol_bits = params.carriers.checked_mul(BITS_PER_CARRIER).ok_or(invalid_carrier_count.clone())?;
    let fft_length = next_power_of_two(params.carriers).ok_or(invalid_carrier_count)?;

    Ok(DabDerivedParameters {
        frame_symbols,
        msc_symbols,
        fib_codeword_bits,
        symbol_bits,
        fft_length,
    })
}
