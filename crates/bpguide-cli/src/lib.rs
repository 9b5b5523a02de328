//! Static document exporter and registry checks for the Unifier BP Guide.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
