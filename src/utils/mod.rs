//! Utility modules shared by the binaries

pub mod logger;
