use dab_core::dab_transmission_modes::DabTransmissionMode;
use dab_core::dab_mode_parameters::{DabModeParameters, get_dab_mode_parameters, validate_dab_parameter_table};
use dab_radio::dab_radio_parameters::get_dab_radio_parameters;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct AppArguments {
    /// DAB transmission mode. Valid modes are \[1,2,3,4\]. If not provided prints all modes.
    #[arg(short, long)]
    mode: Option<u32>,
    /// Check that every transmission mode derives consistent parameters
    #[arg(long)]
    check: bool,
    /// Also print the bit budget used for digital decoding
    #[arg(long)]
    radio: bool,
}

const MODE_COLUMNS: [&str; 15] = [
    "mode", "carriers", "frame_symbols_raw", "fic_symbols", "frame_fibs", "frame_cifs",
    "frame_us", "guard_us", "symbol_us", "null_us",
    "frame_symbols", "msc_symbols", "fib_codeword_bits", "symbol_bits", "fft_length",
];

const RADIO_COLUMNS: [&str; 9] = [
    "mode", "bits_per_symbol", "bits_per_frame", "bits_in_fic", "bits_in_msc",
    "bits_per_fib", "bits_per_fig", "bits_per_cif", "fibs_per_cif",
];

fn mode_row(params: &DabModeParameters) -> String {
    let primary = &params.primary;
    let derived = &params.derived;
    let values = [
        primary.carriers, primary.frame_symbols_raw, primary.fic_symbols, primary.frame_fibs, primary.frame_cifs,
        primary.frame_duration_us, primary.guard_duration_us, primary.symbol_duration_us, primary.null_duration_us,
        derived.frame_symbols, derived.msc_symbols, derived.fib_codeword_bits, derived.symbol_bits, derived.fft_length,
    ];
    format!("{}\t{}", params.mode, values.iter().join("\t"))
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = AppArguments::parse();

    // Parse arguments
    let transmission_modes: Vec<DabTransmissionMode> = match args.mode {
        None => DabTransmissionMode::ALL.to_vec(),
        Some(index) => vec![DabTransmissionMode::try_from(index).map_err(|err| err.to_string())?],
    };

    if args.check {
        match validate_dab_parameter_table() {
            Ok(()) => tracing::info!("All {} transmission modes derive consistent parameters", DabTransmissionMode::ALL.len()),
            Err(err) => return Err(format!("Transmission mode table is inconsistent: {}", err)),
        }
    }

    println!("{}", MODE_COLUMNS.iter().join("\t"));
    for &mode in &transmission_modes {
        println!("{}", mode_row(&get_dab_mode_parameters(mode)));
    }

    if args.radio {
        println!();
        println!("{}", RADIO_COLUMNS.iter().join("\t"));
        for &mode in &transmission_modes {
            let params = get_dab_radio_parameters(mode)
                .map_err(|err| format!("Failed to get radio parameters for mode {}: {}", mode, err))?;
            let row = [
                params.nb_bits_per_symbol, params.nb_bits_per_frame, params.nb_bits_in_fic, params.nb_bits_in_msc,
                params.nb_bits_per_fib, params.nb_bits_per_fig, params.nb_bits_per_cif, params.nb_fibs_per_cif,
            ];
            println!("{}\t{}", mode, row.iter().join("\t"));
        }
    }

    Ok(())
}
