//! Top-level page state store
//!
//! Components access state via lensing: `state.catalog().filter()`

use super::catalog::CatalogState;
use super::fitment::FitmentState;
use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FitmentPageState {
    pub catalog: CatalogState,
    pub fitment: FitmentState,
    /// Message for the dismissable error banner
    pub error: ErrorNotice,
}

/// Banner message plus a serial that grows with every `show`, so repeating
/// the same message still counts as a new error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorNotice {
    serial: u64,
    message: Option<String>,
}

impl ErrorNotice {
    pub fn show(&mut self, message: impl Into<String>) {
        self.serial += 1;
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_message() {
        let notice = ErrorNotice::default();
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn repeated_message_gets_a_new_serial() {
        let mut notice = ErrorNotice::default();
        notice.show("File size must not exceed 10MB");
        let first = notice.serial();
        notice.show("File size must not exceed 10MB");
        assert_eq!(notice.message(), Some("File size must not exceed 10MB"));
        assert_ne!(notice.serial(), first);
    }

    #[test]
    fn clear_hides_message_and_keeps_serial() {
        let mut notice = ErrorNotice::default();
        notice.show("Network error: timeout");
        let serial = notice.serial();
        notice.clear();
        assert_eq!(notice.message(), None);
        assert_eq!(notice.serial(), serial);
    }
}
