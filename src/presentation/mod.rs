//! Presentation layer for the host's gauge preview.

pub mod gauge;
