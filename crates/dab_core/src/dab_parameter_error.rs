use thiserror::Error;

/// Which symbol count relation a primary record breaks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCountViolation {
    #[error("frame has no phase reference symbol")]
    MissingPhaseReference,
    #[error("FIC symbols exceed the data symbols of the frame")]
    FicExceedsFrame,
}

/// An inconsistency found while deriving parameters from a `DabPrimaryParameters` record.
/// Each variant carries the primary values that broke the relation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DabParameterError {
    /// The frame must contain the phase reference symbol, and the FIC cannot use more symbols than remain after it.
    #[error("Invalid symbol count: {violation} ({frame_symbols_raw} frame symbols including PRS, {fic_symbols} FIC symbols)")]
    InvalidSymbolCount { violation: SymbolCountViolation, frame_symbols_raw: usize, fic_symbols: usize },
    /// The number of CIFs must be non-zero.
    #[error("Invalid CIF count: {frame_cifs} CIFs for {frame_fibs} FIBs, at least one CIF is required")]
    InvalidCifCount { frame_fibs: usize, frame_cifs: usize },
    /// The FIB bits of a frame must split evenly between its CIFs.
    #[error("Invalid CIF partition: {frame_fibs} FIBs of 256 bits cannot be split evenly between {frame_cifs} CIFs")]
    InvalidCifPartition { frame_fibs: usize, frame_cifs: usize },
    /// No power of two FFT length large enough for the carriers fits in a usize.
    #[error("Invalid carrier count: no FFT length can hold {carriers} carriers")]
    InvalidCarrierCount { carriers: usize },
}
