//! Car photo drop zone and preview - pure view with callbacks
//!
//! Files come from either the hidden file input (click-to-browse through the
//! wrapping label) or a drop. Both paths go through `read_image_file`, which
//! validates type and size before any bytes are read.

use crate::components::icons::{UploadIcon, XIcon};
use crate::components::utils::format_file_size;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::html::FileData;
use dioxus::prelude::*;
use wheelfit_common::{validate_image, SelectedImage, UploadError};

const FILE_INPUT_ID: &str = "imageInput";

/// Validate a browser file and decode it into a data URL.
pub async fn read_image_file(file: FileData) -> Result<SelectedImage, UploadError> {
    let content_type = file.content_type();
    validate_image(content_type.as_deref(), file.size())?;
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?;
    SelectedImage::from_file(file.name(), content_type.as_deref(), &bytes)
}

#[component]
pub fn UploadZoneView(
    image: Option<SelectedImage>,
    dragging: bool,
    on_drag_change: EventHandler<bool>,
    /// Called with the outcome of every attempted upload
    on_image: EventHandler<Result<SelectedImage, UploadError>>,
    on_remove: EventHandler<()>,
) -> Element {
    let accept_first = move |files: Vec<FileData>| {
        if let Some(file) = files.into_iter().next() {
            spawn(async move {
                on_image.call(read_image_file(file).await);
            });
        }
    };

    if let Some(image) = image {
        return rsx! {
            ImagePreview { image, on_remove }
        };
    }

    let zone_class = if dragging {
        "dragover border-orange-400 bg-orange-500/10"
    } else {
        "border-gray-600 hover:border-gray-500 bg-gray-800/40"
    };

    rsx! {
        label {
            r#for: FILE_INPUT_ID,
            id: "uploadArea",
            class: "block border-2 border-dashed rounded-xl p-10 text-center cursor-pointer transition-colors {zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                if !dragging {
                    on_drag_change.call(true);
                }
            },
            ondragleave: move |_| on_drag_change.call(false),
            ondrop: move |evt| {
                evt.prevent_default();
                on_drag_change.call(false);
                accept_first(evt.files());
            },
            UploadIcon { class: "w-10 h-10 mx-auto text-gray-400 mb-3" }
            p { class: "text-gray-200 font-medium", "Drop a photo of your car here" }
            p { class: "text-sm text-gray-500 mt-1", "or click to browse (JPG, PNG, WebP up to 10MB)" }
            input {
                r#type: "file",
                id: FILE_INPUT_ID,
                accept: "image/*",
                class: "hidden",
                onchange: move |evt| accept_first(evt.files()),
            }
        }
    }
}

#[component]
fn ImagePreview(image: SelectedImage, on_remove: EventHandler<()>) -> Element {
    let size = format_file_size(image.size);

    rsx! {
        div { id: "imagePreview", class: "relative rounded-xl overflow-hidden bg-gray-800",
            img {
                src: "{image.data_url}",
                alt: "Selected car photo",
                class: "w-full max-h-96 object-contain",
            }
            div { class: "flex items-center justify-between px-4 py-2 text-sm text-gray-400",
                span { class: "truncate", title: "{image.file_name}", "{image.file_name} · {size}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    id: "removeImage".to_string(),
                    onclick: move |_| on_remove.call(()),
                    XIcon { class: "w-4 h-4" }
                    "Remove"
                }
            }
        }
    }
}
