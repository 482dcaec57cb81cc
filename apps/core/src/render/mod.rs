//! Payload-to-markup renderers. Every function here is pure.

pub mod correlation;
pub mod dashboard;
pub mod number;
pub mod risk;
pub mod styles;
pub mod temporal;
pub mod vessel_groups;
pub mod welcome;

pub use number::fixed;
