use crate::dab_transmission_modes::DabTransmissionMode;

/// The primary parameters that define a DAB transmission mode.
/// Everything else a receiver needs is derived from these, see `DabDerivedParameters`.
///
/// # Diagram of DAB frame
/// This is the frame of a mode I transmission.
/// ```text
/// | Frame                        |
/// | NULL | SYM*76                |
/// | NULL | PRS | SYM*75          |
/// | NULL | PRS | SYM*3  | SYM*72 |
/// | NULL | PRS | FIC    | MSC    |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DabPrimaryParameters {
    /// Number of OFDM subcarriers carrying data.
    pub carriers: usize,
    /// Number of OFDM symbols in a frame, including the phase reference symbol (PRS).
    pub frame_symbols_raw: usize,
    /// Number of symbols for the fast information channel (FIC). This carries metadata about the ensemble.
    pub fic_symbols: usize,
    /// Number of fast information blocks (FIB) in a frame.
    pub frame_fibs: usize,
    /// Number of common interleaved frames (CIF) in the main service channel of a frame.
    pub frame_cifs: usize,
    /// Duration of a transmission frame in microseconds.
    pub frame_duration_us: usize,
    /// Duration of the guard interval (cyclic prefix) of a symbol in microseconds.
    pub guard_duration_us: usize,
    /// Duration of a symbol without its guard interval in microseconds.
    pub symbol_duration_us: usize,
    /// Duration of the NULL symbol in microseconds.
    pub null_duration_us: usize,
}

const MODE_I: DabPrimaryParameters = DabPrimaryParameters {
    carriers: 1536,
    frame_symbols_raw: 76,
    fic_symbols: 3,
    frame_fibs: 12,
    frame_cifs: 4,
    frame_duration_us: 96000,
    guard_duration_us: 246,
    symbol_duration_us: 1000,
    null_duration_us: 1297,
};

const MODE_II: DabPrimaryParameters = DabPrimaryParameters {
    carriers: 384,
    frame_symbols_raw: 76,
    fic_symbols: 3,
    frame_fibs: 3,
    frame_cifs: 1,
    frame_duration_us: 24000,
    guard_duration_us: 62,
    symbol_duration_us: 250,
    null_duration_us: 324,
};

const MODE_III: DabPrimaryParameters = DabPrimaryParameters {
    carriers: 192,
    frame_symbols_raw: 153,
    fic_symbols: 8,
    frame_fibs: 4,
    frame_cifs: 1,
    frame_duration_us: 24000,
    guard_duration_us: 31,
    symbol_duration_us: 125,
    null_duration_us: 168,
};

const MODE_IV: DabPrimaryParameters = DabPrimaryParameters {
    carriers: 768,
    frame_symbols_raw: 76,
    fic_symbols: 3,
    frame_fibs: 6,
    frame_cifs: 2,
    frame_duration_us: 48000,
    guard_duration_us: 123,
    symbol_duration_us: 500,
    null_duration_us: 648,
};

/// Returns the primary parameters for a transmission mode as defined in ETSI EN 300 401.
/// These values are an interoperability boundary and must not be changed.
pub const fn get_dab_primary_parameters(transmission_mode: DabTransmissionMode) -> DabPrimaryParameters {
    match transmission_mode {
        DabTransmissionMode::I => MODE_I,
        DabTransmissionMode::II => MODE_II,
        DabTransmissionMode::III => MODE_III,
        DabTransmissionMode::IV => MODE_IV,
    }
}

