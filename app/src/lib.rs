//! Domain logic for TBOS: durations and their display form.

pub mod pretty_time;
pub mod seconds;

pub use pretty_time::make_pretty_time;
