//! Avatar Session - the preview/confirm/commit state machine
//!
//! One session backs one avatar widget instance. It owns at most one live
//! preview and reports committed or removed avatars through a single
//! injected callback.
//!
//! ```text
//!            select(valid)             begin_commit
//!   Idle ───────────────────▶ PreviewPending ─────────▶ Uploading
//!    ▲  ◀─────── cancel ──────────┘   ▲                    │
//!    │                                └── commit failed ───┤
//!    └──────────────────── commit succeeded ───────────────┘
//! ```
//!
//! # Teardown during upload
//!
//! [`AvatarSession::teardown`] releases the preview immediately and bumps the
//! commit generation. An upload already in flight is allowed to finish, but
//! its result no longer matches the session and is discarded without being
//! reported.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::AvatarConfig;
use crate::error::{AvatarError, AvatarResult, CommitError, ValidationError};
use crate::preview::{PreviewHandle, PreviewRegistry};
use crate::types::{AvatarReference, SelectedFile};
use crate::uploader::{AvatarUploader, CommitRequest};
use crate::validation::validate;

/// Callback receiving the new avatar, or `None` when it was removed.
pub type AvatarReporter = Box<dyn FnMut(Option<AvatarReference>)>;

/// Observable state of a session.
///
/// Errors are tracked separately (see [`AvatarSession::error`]): a failed
/// validation leaves the session `Idle`, a failed commit returns it to
/// `PreviewPending` with the error set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// No pending selection
    Idle,
    /// A validated image is waiting for confirm or cancel
    PreviewPending,
    /// The pending image is being committed
    Uploading,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Idle => write!(f, "idle"),
            SelectionState::PreviewPending => write!(f, "previewing"),
            SelectionState::Uploading => write!(f, "uploading"),
        }
    }
}

/// Result of applying an upload result to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The avatar was reported to the caller
    Committed(AvatarReference),
    /// The uploader failed; the preview is kept for retry or cancel
    Failed(CommitError),
    /// The result belonged to a commit the session no longer waits for
    Discarded,
}

/// A validated selection and the preview that owns its bytes.
#[derive(Debug)]
struct PendingSelection {
    file_name: String,
    preview: PreviewHandle,
}

/// The preview handle only exists inside the pending/uploading variants.
#[derive(Debug)]
enum Phase {
    Idle,
    PreviewPending(PendingSelection),
    Uploading(PendingSelection),
}

impl Phase {
    fn state(&self) -> SelectionState {
        match self {
            Phase::Idle => SelectionState::Idle,
            Phase::PreviewPending(_) => SelectionState::PreviewPending,
            Phase::Uploading(_) => SelectionState::Uploading,
        }
    }
}

/// State machine behind one avatar widget.
pub struct AvatarSession {
    config: AvatarConfig,
    registry: PreviewRegistry,
    reporter: AvatarReporter,
    phase: Phase,
    error: Option<AvatarError>,
    disabled: bool,
    generation: u64,
}

impl AvatarSession {
    /// Create an idle session.
    ///
    /// `reporter` is called exactly once per successful commit with
    /// `Some(reference)`, and once per removal with `None`.
    pub fn new<F>(config: AvatarConfig, registry: PreviewRegistry, reporter: F) -> Self
    where
        F: FnMut(Option<AvatarReference>) + 'static,
    {
        Self {
            config,
            registry,
            reporter: Box::new(reporter),
            phase: Phase::Idle,
            error: None,
            disabled: false,
            generation: 0,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.phase.state()
    }

    /// Error currently shown inline, if any
    pub fn error(&self) -> Option<&AvatarError> {
        self.error.as_ref()
    }

    /// The live preview while pending or uploading
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.pending().map(|pending| &pending.preview)
    }

    /// Name of the pending file while pending or uploading
    pub fn pending_file_name(&self) -> Option<&str> {
        self.pending().map(|pending| pending.file_name.as_str())
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_uploading(&self) -> bool {
        self.state() == SelectionState::Uploading
    }

    /// Suppress (or re-allow) every mutating action except cancel.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Admit a file to preview.
    ///
    /// An invalid file leaves any existing preview in place and sets the
    /// error. A valid file releases the previous preview before the new one
    /// is created.
    pub fn select(&mut self, file: SelectedFile) -> AvatarResult<()> {
        if self.disabled {
            return Err(AvatarError::Disabled);
        }
        if self.is_uploading() {
            return Err(AvatarError::Busy);
        }

        if let Err(e) = validate(&file, &self.config) {
            debug!(file = %file.name, mime = %file.mime, size = file.size, "Rejected avatar: {}", e);
            return Err(self.fail(e.into()));
        }

        let max = self.config.max_file_bytes;
        let bytes = match file.load_limited(max) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %file.name, "Failed to read avatar file: {}", e);
                return Err(self.fail(AvatarError::Read(e.to_string())));
            }
        };
        if bytes.len() as u64 > max {
            let e = ValidationError::TooLarge {
                size: bytes.len() as u64,
                max,
            };
            debug!(file = %file.name, declared = file.size, "Rejected avatar: {}", e);
            return Err(self.fail(e.into()));
        }

        self.release_preview();
        let preview = self.registry.create(file.mime.clone(), bytes);
        debug!(file = %file.name, preview = %preview.id(), "Avatar preview pending");

        self.phase = Phase::PreviewPending(PendingSelection {
            file_name: file.name,
            preview,
        });
        self.error = None;
        Ok(())
    }

    /// Drop the pending selection and clear any error.
    ///
    /// Allowed while disabled; refused while an upload is in flight.
    pub fn cancel(&mut self) -> AvatarResult<()> {
        if self.is_uploading() {
            return Err(AvatarError::Busy);
        }
        self.release_preview();
        self.error = None;
        Ok(())
    }

    /// Move the pending selection to `Uploading` and describe it for the uploader.
    ///
    /// Refused while disabled; the error is kept so the dialog can show it.
    pub fn begin_commit(&mut self) -> AvatarResult<CommitRequest> {
        if self.disabled {
            return Err(self.fail(AvatarError::Disabled));
        }

        let pending = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PreviewPending(pending) => pending,
            other => {
                let state = other.state();
                self.phase = other;
                return Err(AvatarError::InvalidTransition {
                    action: "confirm",
                    state,
                });
            }
        };

        self.generation += 1;
        let request = CommitRequest {
            generation: self.generation,
            file_name: pending.file_name.clone(),
            mime: pending.preview.mime().to_string(),
            bytes: pending.preview.bytes().clone(),
            preview_url: pending.preview.url(),
        };

        debug!(file = %pending.file_name, generation = self.generation, "Avatar upload started");
        self.phase = Phase::Uploading(pending);
        self.error = None;
        Ok(request)
    }

    /// Apply an uploader result for the commit started with `generation`.
    pub fn finish_commit(
        &mut self,
        generation: u64,
        result: Result<AvatarReference, CommitError>,
    ) -> CommitOutcome {
        if generation != self.generation || !self.is_uploading() {
            warn!(
                generation,
                current = self.generation,
                state = %self.state(),
                "Discarding stale avatar upload result"
            );
            return CommitOutcome::Discarded;
        }

        let pending = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Uploading(pending) => pending,
            other => {
                self.phase = other;
                return CommitOutcome::Discarded;
            }
        };

        match result {
            Ok(avatar) => {
                info!(file = %pending.file_name, kind = avatar.kind(), "Avatar committed");
                (self.reporter)(Some(avatar.clone()));
                pending.preview.release();
                self.error = None;
                CommitOutcome::Committed(avatar)
            }
            Err(e) => {
                warn!(file = %pending.file_name, "Avatar upload failed: {}", e);
                self.phase = Phase::PreviewPending(pending);
                self.error = Some(AvatarError::Commit(e.clone()));
                CommitOutcome::Failed(e)
            }
        }
    }

    /// Run the whole commit step against `uploader`.
    pub async fn confirm(&mut self, uploader: &dyn AvatarUploader) -> AvatarResult<CommitOutcome> {
        let request = self.begin_commit()?;
        let generation = request.generation;
        let result = uploader.upload(request).await;
        Ok(self.finish_commit(generation, result))
    }

    /// Report that the avatar was removed.
    pub fn remove(&mut self) -> AvatarResult<()> {
        if self.disabled {
            return Err(AvatarError::Disabled);
        }
        match self.state() {
            SelectionState::Idle => {
                debug!("Avatar removed");
                (self.reporter)(None);
                Ok(())
            }
            SelectionState::Uploading => Err(AvatarError::Busy),
            state => Err(AvatarError::InvalidTransition {
                action: "remove",
                state,
            }),
        }
    }

    /// Unmount hook: release any preview and abandon any in-flight commit.
    pub fn teardown(&mut self) {
        if self.is_uploading() {
            debug!(generation = self.generation, "Teardown during upload; result will be discarded");
        }
        self.generation += 1;
        self.release_preview();
        self.error = None;
    }

    fn pending(&self) -> Option<&PendingSelection> {
        match &self.phase {
            Phase::Idle => None,
            Phase::PreviewPending(pending) | Phase::Uploading(pending) => Some(pending),
        }
    }

    fn release_preview(&mut self) {
        if let Phase::PreviewPending(pending) | Phase::Uploading(pending) =
            std::mem::replace(&mut self.phase, Phase::Idle)
        {
            pending.preview.release();
        }
    }

    fn fail(&mut self, error: AvatarError) -> AvatarError {
        self.error = Some(error.clone());
        error
    }
}

impl fmt::Debug for AvatarSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarSession")
            .field("state", &self.state())
            .field("error", &self.error)
            .field("disabled", &self.disabled)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> (AvatarSession, Rc<RefCell<Vec<Option<AvatarReference>>>>) {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let session = AvatarSession::new(AvatarConfig::default(), PreviewRegistry::new(), move |a| {
            sink.borrow_mut().push(a)
        });
        (session, reports)
    }

    fn png() -> SelectedFile {
        SelectedFile::from_bytes("me.png", "image/png", vec![7u8; 64])
    }

    #[test]
    fn test_starts_idle() {
        let (session, _) = session();
        assert_eq!(session.state(), SelectionState::Idle);
        assert!(session.error().is_none());
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_select_then_cancel() {
        let (mut session, reports) = session();
        session.select(png()).unwrap();
        assert_eq!(session.state(), SelectionState::PreviewPending);
        assert_eq!(session.registry().live_count(), 1);
        assert_eq!(session.pending_file_name(), Some("me.png"));

        session.cancel().unwrap();
        assert_eq!(session.state(), SelectionState::Idle);
        assert_eq!(session.registry().live_count(), 0);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_begin_commit_requires_pending() {
        let (mut session, _) = session();
        let err = session.begin_commit().unwrap_err();
        assert_eq!(
            err,
            AvatarError::InvalidTransition {
                action: "confirm",
                state: SelectionState::Idle
            }
        );
        assert_eq!(session.state(), SelectionState::Idle);
    }

    #[test]
    fn test_commit_success_reports_and_releases() {
        let (mut session, reports) = session();
        session.select(png()).unwrap();
        let request = session.begin_commit().unwrap();
        assert_eq!(session.state(), SelectionState::Uploading);
        assert_eq!(request.bytes.len(), 64);

        let avatar = AvatarReference::from_url("https://cdn.example.com/a.png");
        let outcome = session.finish_commit(request.generation, Ok(avatar.clone()));

        assert_eq!(outcome, CommitOutcome::Committed(avatar.clone()));
        assert_eq!(session.state(), SelectionState::Idle);
        assert_eq!(session.registry().live_count(), 0);
        assert_eq!(*reports.borrow(), vec![Some(avatar)]);
    }

    #[test]
    fn test_commit_failure_keeps_preview() {
        let (mut session, reports) = session();
        session.select(png()).unwrap();
        let request = session.begin_commit().unwrap();

        let err = CommitError::Transport("offline".to_string());
        let outcome = session.finish_commit(request.generation, Err(err.clone()));

        assert_eq!(outcome, CommitOutcome::Failed(err.clone()));
        assert_eq!(session.state(), SelectionState::PreviewPending);
        assert_eq!(session.error(), Some(&AvatarError::Commit(err)));
        assert_eq!(session.registry().live_count(), 1);
        assert!(reports.borrow().is_empty());

        // retry clears the error
        session.begin_commit().unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_busy_while_uploading() {
        let (mut session, _) = session();
        session.select(png()).unwrap();
        session.begin_commit().unwrap();

        assert_eq!(session.cancel(), Err(AvatarError::Busy));
        assert_eq!(session.select(png()), Err(AvatarError::Busy));
        assert_eq!(session.remove(), Err(AvatarError::Busy));
        assert_eq!(session.state(), SelectionState::Uploading);
        assert_eq!(session.registry().live_count(), 1);
    }

    #[test]
    fn test_confirm_refused_when_disabled_mid_preview() {
        let (mut session, reports) = session();
        session.select(png()).unwrap();
        session.set_disabled(true);

        assert_eq!(session.begin_commit().unwrap_err(), AvatarError::Disabled);
        assert_eq!(session.state(), SelectionState::PreviewPending);
        assert_eq!(session.error(), Some(&AvatarError::Disabled));
        assert!(reports.borrow().is_empty());

        // cancel still releases the preview
        session.cancel().unwrap();
        assert_eq!(session.registry().live_count(), 0);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_remove_reports_none() {
        let (mut session, reports) = session();
        session.remove().unwrap();
        assert_eq!(*reports.borrow(), vec![None]);
        assert_eq!(session.state(), SelectionState::Idle);
    }

    #[test]
    fn test_teardown_discards_inflight_result() {
        let (mut session, reports) = session();
        session.select(png()).unwrap();
        let request = session.begin_commit().unwrap();

        session.teardown();
        assert_eq!(session.state(), SelectionState::Idle);
        assert_eq!(session.registry().live_count(), 0);

        let outcome = session.finish_commit(
            request.generation,
            Ok(AvatarReference::from_url("https://cdn.example.com/late.png")),
        );
        assert_eq!(outcome, CommitOutcome::Discarded);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_preview() {
        let registry = PreviewRegistry::new();
        {
            let mut session = AvatarSession::new(AvatarConfig::default(), registry.clone(), |_| {});
            session.select(png()).unwrap();
            assert_eq!(registry.live_count(), 1);
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SelectionState::Idle.to_string(), "idle");
        assert_eq!(SelectionState::PreviewPending.to_string(), "previewing");
        assert_eq!(SelectionState::Uploading.to_string(), "uploading");
    }
}
