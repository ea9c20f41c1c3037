pub mod dab_transmission_modes;
pub mod power_of_two;
pub mod dab_parameters;
pub mod dab_parameter_error;
pub mod dab_derived_parameters;
pub mod dab_mode_parameters;
