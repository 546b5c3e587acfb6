//! Upload, selection and submission state store

use dioxus::prelude::*;
use wheelfit_common::{FitmentForm, FitmentResult};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FitmentState {
    /// Selected image, selected disc and the in-flight flag
    pub form: FitmentForm,
    /// A file is being dragged over the drop zone
    pub dragging: bool,
    /// Last completed fitment
    pub result: Option<FitmentResult>,
}
