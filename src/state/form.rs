use super::data::{
    Field, FormState, ImageFile, ImagePreview, ImageSource, Notice, SubmissionLifecycle,
};
use crate::api::HotelResponse;
use crate::error::{ImageError, SubmitError};

/// Identifies one image selection. Newer selections get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SelectionToken(u64);

/// Identifies one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SubmissionToken(u64);

/// Work the caller must run after an image was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub token: SelectionToken,
    pub file: ImageFile,
}

/// Snapshot handed to the submission task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub token: SubmissionToken,
    pub form: FormState,
}

/// Why `begin_submit` refused to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight
    Busy,
    /// Required fields are still empty
    MissingFields(Vec<Field>),
}

/// The form controller
///
/// Owns the field values, the selected image and its preview, and the
/// submission lifecycle. All mutation happens through the methods below,
/// called from the UI update loop. Async work (preview decode, network call)
/// runs elsewhere and reports back through `apply_preview` / `finish_submit`,
/// tagged with the token it was started with.
#[derive(Debug, Default)]
pub struct FormController {
    form: FormState,
    preview: Option<ImagePreview>,
    lifecycle: SubmissionLifecycle,
    /// Token of the latest accepted selection
    selection: SelectionToken,
    /// Token of the latest submission
    submission: SubmissionToken,
    notice: Option<Notice>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    pub fn lifecycle(&self) -> SubmissionLifecycle {
        self.lifecycle
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether the submit trigger should be enabled
    pub fn can_submit(&self) -> bool {
        self.lifecycle == SubmissionLifecycle::Idle && self.form.missing_fields().is_empty()
    }

    /// Merge one field value into the form. No validation happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("✏️  {} = {} chars", field.key(), value.chars().count());
        self.form.set(field, value);
    }

    /// Accept a new image, replacing any previous one.
    ///
    /// Drops whose declared media type is not `image/*` are ignored and
    /// leave the form untouched. On acceptance the handle is stored right
    /// away and the returned request must be run through
    /// `preview::load_preview`, with its result fed to `apply_preview`.
    pub fn select_image(&mut self, file: ImageFile, source: ImageSource) -> Option<PreviewRequest> {
        if source == ImageSource::Drop && !file.is_image() {
            tracing::debug!(
                "🚫 Ignoring dropped file {} ({})",
                file.file_name,
                file.media_type
            );
            self.notice = Some(Notice::info(format!(
                "Ignored {}: only image files can be dropped",
                file.file_name
            )));
            return None;
        }

        self.selection = SelectionToken(self.selection.0 + 1);
        tracing::info!("📷 Selected image {} via {:?}", file.path.display(), source);

        self.form.image = Some(file.clone());
        self.notice = None;

        Some(PreviewRequest {
            token: self.selection,
            file,
        })
    }

    /// Store the outcome of a preview decode.
    ///
    /// Results from an older selection are discarded and `false` is
    /// returned. A failed decode drops the selection entirely so the form
    /// never holds an image without a preview.
    pub fn apply_preview(
        &mut self,
        token: SelectionToken,
        result: Result<ImagePreview, ImageError>,
    ) -> bool {
        if token != self.selection {
            tracing::debug!("⏭️  Discarding stale preview {:?} (current {:?})", token, self.selection);
            return false;
        }

        match result {
            Ok(preview) => {
                tracing::info!("🖼️  Preview ready ({}x{})", preview.width, preview.height);
                self.preview = Some(preview);
            }
            Err(err) => {
                tracing::warn!("⚠️  Preview failed, discarding selection: {}", err);
                self.form.image = None;
                self.preview = None;
                self.notice = Some(Notice::error(format!("Could not load image: {}", err)));
            }
        }

        true
    }

    /// Move Idle -> Submitting and snapshot the form for the network task.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.lifecycle == SubmissionLifecycle::Submitting {
            return Err(SubmitRejected::Busy);
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }

        self.submission = SubmissionToken(self.submission.0 + 1);
        self.lifecycle = SubmissionLifecycle::Submitting;
        self.notice = None;
        tracing::info!("📤 Submitting hotel {:?} (attempt {:?})", self.form.name, self.submission);

        Ok(SubmitTicket {
            token: self.submission,
            form: self.form.clone(),
        })
    }

    /// Move Submitting -> Idle and surface the outcome.
    ///
    /// The form itself is never modified here, on success or failure.
    pub fn finish_submit(
        &mut self,
        token: SubmissionToken,
        result: Result<HotelResponse, SubmitError>,
    ) {
        if token != self.submission {
            tracing::debug!("⏭️  Ignoring result of superseded submission {:?}", token);
            return;
        }

        self.lifecycle = SubmissionLifecycle::Idle;

        match result {
            Ok(response) => {
                tracing::info!("✅ Hotel created: {}", response.body);
                self.notice = Some(Notice::success(format!("Hotel created: {}", response.summary())));
            }
            Err(err) => {
                tracing::error!("❌ Error creating hotel: {}", err);
                self.notice = Some(Notice::error(format!("Error creating hotel: {}", err)));
            }
        }
    }
}
