//! File based builder API
pub mod embed;
pub mod extract;
