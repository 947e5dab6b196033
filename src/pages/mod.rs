//! Page components for Velcross Chronicles.

mod chronicle;

pub use chronicle::Chronicle;
