//! wheelfit-ui - Stores and pure view components for the wheel-fitment page
//!
//! Views take store lenses and callbacks; they never fetch data themselves.

pub mod components;
pub mod stores;

pub use components::*;
