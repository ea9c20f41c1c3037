pub mod dab_radio_parameters;
