use crate::catalog::DiscSummary;
use crate::fitment::FitmentRequest;
use crate::upload::SelectedImage;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please upload an image and choose a disc")]
    MissingSelection,
    #[error("A fitment request is already in progress")]
    InFlight,
}

/// Image + disc selection and the in-flight flag that gates submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitmentForm {
    image: Option<SelectedImage>,
    disc: Option<DiscSummary>,
    submitting: bool,
}

impl FitmentForm {
    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn disc(&self) -> Option<&DiscSummary> {
        self.disc.as_ref()
    }

    pub fn selected_disc_id(&self) -> Option<&str> {
        self.disc.as_ref().map(|d| d.id.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_image(&mut self, image: SelectedImage) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn select_disc(&mut self, disc: DiscSummary) {
        self.disc = Some(disc);
    }

    /// Submit is enabled iff both selections exist and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.image.is_some() && self.disc.is_some() && !self.submitting
    }

    /// Build the request and mark the form as submitting.
    pub fn begin_submission(&mut self) -> Result<FitmentRequest, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }
        let (Some(image), Some(disc)) = (self.image.as_ref(), self.disc.as_ref()) else {
            return Err(FormError::MissingSelection);
        };
        let disc_id = disc.id.trim();
        if disc_id.is_empty() {
            return Err(FormError::MissingSelection);
        }
        let request = FitmentRequest {
            disc_id: disc_id.to_string(),
            car_image_base64: image.data_url.clone(),
        };
        self.submitting = true;
        Ok(request)
    }

    /// Called once the request settles, whatever the outcome.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> SelectedImage {
        SelectedImage {
            data_url: "data:image/png;base64,AAAA".into(),
            file_name: "car.png".into(),
            size: 3,
        }
    }

    fn disc(id: &str) -> DiscSummary {
        DiscSummary {
            id: id.into(),
            brand: "Enkei".into(),
            model: "RPF1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_form_cannot_submit() {
        assert!(!FitmentForm::default().can_submit());
    }

    #[test]
    fn image_alone_cannot_submit() {
        let mut form = FitmentForm::default();
        form.set_image(image());
        assert!(!form.can_submit());
    }

    #[test]
    fn disc_alone_cannot_submit() {
        let mut form = FitmentForm::default();
        form.select_disc(disc("d1"));
        assert!(!form.can_submit());
    }

    #[test]
    fn image_and_disc_can_submit() {
        let mut form = FitmentForm::default();
        form.set_image(image());
        form.select_disc(disc("d1"));
        assert!(form.can_submit());
    }

    #[test]
    fn removing_image_disables_submit() {
        let mut form = FitmentForm::default();
        form.set_image(image());
        form.select_disc(disc("d1"));
        form.clear_image();
        assert!(!form.can_submit());
        assert!(form.image().is_none());
    }

    #[test]
    fn selecting_another_disc_replaces_selection() {
        let mut form = FitmentForm::default();
        form.select_disc(disc("d1"));
        form.select_disc(disc("d2"));
        assert_eq!(form.selected_disc_id(), Some("d2"));
    }

    #[test]
    fn begin_without_selection_is_rejected() {
        let mut form = FitmentForm::default();
        form.set_image(image());
        assert_eq!(form.begin_submission(), Err(FormError::MissingSelection));
        assert!(!form.is_submitting());
    }

    #[test]
    fn submission_lifecycle() {
        let mut form = FitmentForm::default();
        form.set_image(image());
        form.select_disc(disc(" d1 "));

        let request = form.begin_submission().unwrap();
        assert_eq!(request.disc_id, "d1");
        assert_eq!(request.car_image_base64, "data:image/png;base64,AAAA");
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submission(), Err(FormError::InFlight));

        form.finish_submission();
        assert!(form.can_submit());
    }
}
