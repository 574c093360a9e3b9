//! CLI actions

pub mod prerun;
