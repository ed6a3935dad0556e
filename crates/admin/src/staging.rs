//! Product image staging for the add/edit product form.
//!
//! Newly picked files are previewed before the form is submitted, and
//! existing photos can be flagged for deletion. Nothing here talks to the
//! server; the form submission carries the resulting state.

use glyke_core::AttachmentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text shown in the preview area while nothing is staged.
pub const PREVIEW_PLACEHOLDER: &str = "Uploaded images preview will appear here";

/// Prefix of the hidden form field that requests deletion of a photo.
pub const DELETE_FIELD_PREFIX: &str = "to_del_photo_";

/// A file picked in the upload input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl FileDescriptor {
    #[must_use]
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
            content_type: None,
        }
    }
}

/// A staged upload with the handle its preview is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedImage {
    pub file: FileDescriptor,
    pub preview_url: String,
}

/// Hidden input submitted with the product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// Pending uploads, deletion marks, and the primary photo of one product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageStaging {
    staged: Vec<StagedImage>,
    marked_for_deletion: Vec<AttachmentId>,
    primary: Option<AttachmentId>,
}

impl ImageStaging {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage picked files in order, skipping any whose name is already staged.
    ///
    /// Returns how many files were added.
    pub fn stage_files<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = FileDescriptor>,
    {
        let before = self.staged.len();
        for file in files {
            if self.is_staged(&file.name) {
                tracing::debug!(name = %file.name, "Skipping already staged file");
                continue;
            }
            let preview_url = format!("blob:{}", Uuid::new_v4());
            self.staged.push(StagedImage { file, preview_url });
        }
        self.staged.len() - before
    }

    /// Flip the deletion mark of an existing photo and return whether it is now marked.
    ///
    /// Marking the primary photo clears the primary designation.
    pub fn toggle_delete_mark(&mut self, attachment_id: AttachmentId) -> bool {
        if let Some(index) = self
            .marked_for_deletion
            .iter()
            .position(|id| *id == attachment_id)
        {
            self.marked_for_deletion.remove(index);
            false
        } else {
            self.marked_for_deletion.push(attachment_id);
            if self.primary == Some(attachment_id) {
                self.primary = None;
            }
            true
        }
    }

    /// Designate the primary photo, unmarking it if it was flagged for deletion.
    pub fn set_primary(&mut self, attachment_id: AttachmentId) {
        self.marked_for_deletion.retain(|id| *id != attachment_id);
        self.primary = Some(attachment_id);
    }

    /// Drop all staged files, marks, and the primary designation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn staged(&self) -> &[StagedImage] {
        &self.staged
    }

    #[must_use]
    pub fn is_staged(&self, name: &str) -> bool {
        self.staged.iter().any(|image| image.file.name == name)
    }

    /// Photos flagged for deletion, in the order they were flagged.
    #[must_use]
    pub fn marked_for_deletion(&self) -> &[AttachmentId] {
        &self.marked_for_deletion
    }

    #[must_use]
    pub fn is_marked(&self, attachment_id: AttachmentId) -> bool {
        self.marked_for_deletion.contains(&attachment_id)
    }

    #[must_use]
    pub const fn primary(&self) -> Option<AttachmentId> {
        self.primary
    }

    /// Placeholder text for the preview area, if nothing is staged.
    #[must_use]
    pub fn preview_placeholder(&self) -> Option<&'static str> {
        self.staged.is_empty().then_some(PREVIEW_PLACEHOLDER)
    }

    /// Hidden inputs requesting deletion of the marked photos.
    #[must_use]
    pub fn deletion_form_fields(&self) -> Vec<HiddenField> {
        self.marked_for_deletion
            .iter()
            .map(|id| HiddenField {
                name: format!("{DELETE_FIELD_PREFIX}{id}"),
                value: id.to_string(),
            })
            .collect()
    }
}
