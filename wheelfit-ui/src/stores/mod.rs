//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The
//! page controller owns a single `FitmentPageState` and mutates it through
//! the wheelfit-common types held in its fields.

pub mod catalog;
pub mod fitment;
pub mod page;

pub use catalog::*;
pub use fitment::*;
pub use page::*;
