//! Edge case and boundary condition tests
//!
//! These tests verify the session handles replacement, disabled widgets,
//! unreadable files, and teardown at awkward moments.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use avatarkit_core::{
    AvatarConfig, AvatarError, AvatarReference, AvatarSession, CommitOutcome, PreviewRegistry,
    SelectedFile, SelectionState, SimulatedUploader, ValidationError,
};

fn session_with(config: AvatarConfig) -> (AvatarSession, PreviewRegistry, Rc<RefCell<Vec<Option<AvatarReference>>>>) {
    let registry = PreviewRegistry::new();
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();
    let session = AvatarSession::new(config, registry.clone(), move |a| sink.borrow_mut().push(a));
    (session, registry, reports)
}

fn png(name: &str, len: usize) -> SelectedFile {
    SelectedFile::from_bytes(name, "image/png", vec![9u8; len])
}

// ============================================================================
// Replacement
// ============================================================================

/// A second valid pick replaces the first preview instead of adding one
#[test]
fn test_replacement_releases_previous_preview() {
    let (mut session, registry, _) = session_with(AvatarConfig::default());

    session.select(png("first.png", 10)).unwrap();
    let first = session.preview().unwrap().id();

    session.select(png("second.png", 20)).unwrap();
    let second = session.preview().unwrap().id();

    assert_ne!(first, second);
    assert_eq!(registry.live_count(), 1);
    assert_eq!(session.pending_file_name(), Some("second.png"));
}

/// An invalid pick while previewing keeps the current preview and shows the error
#[test]
fn test_invalid_pick_keeps_pending_preview() {
    let (mut session, registry, _) = session_with(AvatarConfig::default());

    session.select(png("keep.png", 10)).unwrap();
    let err = session
        .select(SelectedFile::from_bytes("doc.pdf", "application/pdf", vec![0u8; 10]))
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(session.state(), SelectionState::PreviewPending);
    assert_eq!(session.pending_file_name(), Some("keep.png"));
    assert_eq!(registry.live_count(), 1);
    assert_eq!(session.error(), Some(&err));
}

/// A valid pick after a rejected one clears the inline error
#[test]
fn test_valid_pick_clears_error() {
    let (mut session, _, _) = session_with(AvatarConfig::default());

    let _ = session.select(SelectedFile::from_bytes("a.txt", "text/plain", vec![0u8; 1]));
    assert!(session.error().is_some());

    session.select(png("ok.png", 1)).unwrap();
    assert!(session.error().is_none());
}

/// Cancel with nothing pending just clears the error
#[test]
fn test_cancel_when_idle_clears_error() {
    let (mut session, registry, reports) = session_with(AvatarConfig::default());

    let _ = session.select(SelectedFile::from_bytes("a.txt", "text/plain", vec![0u8; 1]));
    session.cancel().unwrap();

    assert!(session.error().is_none());
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(registry.live_count(), 0);
    assert!(reports.borrow().is_empty());
}

// ============================================================================
// Boundaries
// ============================================================================

/// Exactly 5 MiB is accepted; one byte more is not
#[test]
fn test_five_mebibyte_boundary() {
    let (mut session, _, _) = session_with(AvatarConfig::default());
    let limit = 5 * 1024 * 1024;

    session.select(png("exact.png", limit)).unwrap();
    session.cancel().unwrap();

    let err = session.select(png("over.png", limit + 1)).unwrap_err();
    assert!(matches!(err, AvatarError::Validation(ValidationError::TooLarge { .. })));
}

/// A custom limit from config is honoured
#[test]
fn test_custom_limit() {
    let config = AvatarConfig::from_json_str(r#"{ "max_file_bytes": 100 }"#).unwrap();
    let (mut session, _, _) = session_with(config);

    assert!(session.select(png("small.png", 100)).is_ok());
    let err = session.select(png("big.png", 101)).unwrap_err();
    assert_eq!(
        err,
        AvatarError::Validation(ValidationError::TooLarge { size: 101, max: 100 })
    );
}

/// Remove is refused while a preview is pending
#[test]
fn test_remove_while_previewing() {
    let (mut session, registry, reports) = session_with(AvatarConfig::default());

    session.select(png("a.png", 1)).unwrap();
    let err = session.remove().unwrap_err();

    assert_eq!(
        err,
        AvatarError::InvalidTransition {
            action: "remove",
            state: SelectionState::PreviewPending
        }
    );
    assert_eq!(registry.live_count(), 1);
    assert!(reports.borrow().is_empty());
}

// ============================================================================
// Disk files
// ============================================================================

/// Disk files are read only after they pass validation
#[test]
fn test_disk_file_loaded_into_preview() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"\x89PNG fake").unwrap();

    let (mut session, _, _) = session_with(AvatarConfig::default());
    session
        .select(SelectedFile::on_disk("fake.png", "image/png", 9, tmp.path()))
        .unwrap();

    assert_eq!(session.preview().unwrap().bytes().as_ref(), b"\x89PNG fake");
}

/// A file larger on disk than the picker reported is rejected without a preview
#[test]
fn test_disk_file_larger_than_declared() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&vec![0u8; 10 * 1024 * 1024]).unwrap();

    let (mut session, registry, _) = session_with(AvatarConfig::default());
    let err = session
        .select(SelectedFile::on_disk("me.png", "image/png", 1024, tmp.path()))
        .unwrap_err();

    assert_eq!(
        err,
        AvatarError::Validation(ValidationError::TooLarge {
            size: 5 * 1024 * 1024 + 1,
            max: 5 * 1024 * 1024,
        })
    );
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(session.error(), Some(&err));
    assert_eq!(registry.live_count(), 0);
}

/// A file that grew past the limit keeps the existing preview
#[test]
fn test_grown_disk_file_keeps_pending_preview() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&vec![0u8; 200]).unwrap();

    let config = AvatarConfig::from_json_str(r#"{ "max_file_bytes": 100 }"#).unwrap();
    let (mut session, registry, _) = session_with(config);

    session.select(png("keep.png", 10)).unwrap();
    let err = session
        .select(SelectedFile::on_disk("grown.png", "image/png", 50, tmp.path()))
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(session.pending_file_name(), Some("keep.png"));
    assert_eq!(registry.live_count(), 1);
}

/// An endless source is cut off at the limit instead of read forever
#[cfg(unix)]
#[test]
fn test_endless_disk_file_is_cut_off() {
    let config = AvatarConfig::from_json_str(r#"{ "max_file_bytes": 4096 }"#).unwrap();
    let (mut session, registry, _) = session_with(config);

    let err = session
        .select(SelectedFile::on_disk("zero.png", "image/png", 0, "/dev/zero"))
        .unwrap_err();

    assert_eq!(
        err,
        AvatarError::Validation(ValidationError::TooLarge { size: 4097, max: 4096 })
    );
    assert_eq!(registry.live_count(), 0);
}

/// A file that vanished between picking and reading is reported, not previewed
#[test]
fn test_unreadable_disk_file() {
    let (mut session, registry, _) = session_with(AvatarConfig::default());

    let err = session
        .select(SelectedFile::on_disk("gone.png", "image/png", 10, "/nonexistent/gone.png"))
        .unwrap_err();

    assert!(matches!(err, AvatarError::Read(_)));
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(registry.live_count(), 0);
}

// ============================================================================
// Disabled
// ============================================================================

/// A disabled widget refuses every mutation but can still cancel
#[test]
fn test_disabled_suppresses_mutations() {
    let (mut session, registry, reports) = session_with(AvatarConfig::default());

    session.select(png("a.png", 1)).unwrap();
    session.set_disabled(true);
    assert!(session.is_disabled());

    assert_eq!(session.select(png("b.png", 1)), Err(AvatarError::Disabled));
    assert_eq!(session.begin_commit().unwrap_err(), AvatarError::Disabled);
    assert_eq!(session.error(), Some(&AvatarError::Disabled));
    assert_eq!(session.remove(), Err(AvatarError::Disabled));
    assert_eq!(session.state(), SelectionState::PreviewPending);

    session.cancel().unwrap();
    assert_eq!(registry.live_count(), 0);
    assert!(reports.borrow().is_empty());

    session.set_disabled(false);
    session.remove().unwrap();
    assert_eq!(*reports.borrow(), vec![None]);
}

// ============================================================================
// Teardown
// ============================================================================

/// Teardown while previewing releases the preview
#[test]
fn test_teardown_while_previewing() {
    let (mut session, registry, _) = session_with(AvatarConfig::default());

    session.select(png("a.png", 1)).unwrap();
    session.teardown();

    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(registry.live_count(), 0);
}

/// Teardown in the middle of an upload: the upload finishes, its result is dropped
#[tokio::test(start_paused = true)]
async fn test_teardown_during_upload_discards_result() {
    let (mut session, registry, reports) = session_with(AvatarConfig::default());
    let uploader = SimulatedUploader::new(Duration::from_millis(1500));

    session.select(png("a.png", 32)).unwrap();
    let request = session.begin_commit().unwrap();
    let generation = request.generation;
    let upload = tokio::spawn(async move {
        use avatarkit_core::AvatarUploader;
        uploader.upload(request).await
    });

    session.teardown();
    assert_eq!(registry.live_count(), 0);

    let result = upload.await.unwrap();
    assert!(result.is_ok());
    assert_eq!(session.finish_commit(generation, result), CommitOutcome::Discarded);
    assert_eq!(session.state(), SelectionState::Idle);
    assert!(reports.borrow().is_empty());
}

/// A session can be used again after teardown
#[tokio::test(start_paused = true)]
async fn test_reuse_after_teardown() {
    let (mut session, registry, reports) = session_with(AvatarConfig::default());
    let uploader = SimulatedUploader::new(Duration::from_millis(5));

    session.select(png("a.png", 1)).unwrap();
    session.teardown();

    session.select(png("b.png", 1)).unwrap();
    let outcome = session.confirm(&uploader).await.unwrap();

    assert!(matches!(outcome, CommitOutcome::Committed(_)));
    assert_eq!(reports.borrow().len(), 1);
    assert_eq!(registry.live_count(), 0);
}
