use brandui::ui::modal::{DialogIntent, DialogPhase, DialogReducer, DismissReason, HitTarget};
use brandui::ui::mvi::Reducer;

fn run(intents: impl IntoIterator<Item = DialogIntent>) -> DialogPhase {
    intents
        .into_iter()
        .fold(DialogPhase::default(), DialogReducer::reduce)
}

fn sync(is_open: bool) -> DialogIntent {
    DialogIntent::Sync {
        is_open,
        close_on_backdrop: true,
    }
}

#[test]
fn default_phase_is_closed() {
    assert_eq!(DialogPhase::default(), DialogPhase::Closed);
    assert!(!DialogPhase::default().is_open());
}

#[test]
fn full_cycle_open_dismiss_acknowledge_reopen() {
    let dismissed = run([sync(true), DialogIntent::DismissKey]);
    assert_eq!(dismissed.dismiss_reason(), Some(DismissReason::DismissKey));

    // Host still says open: the dialog stays dismissed.
    let still = DialogReducer::reduce(dismissed, sync(true));
    assert!(!still.is_open());

    // Host acknowledges, then opens again.
    let reopened = run([
        sync(true),
        DialogIntent::DismissKey,
        sync(false),
        sync(true),
    ]);
    assert!(reopened.is_open());
}

#[test]
fn close_button_press_and_release_dismisses() {
    let phase = run([
        sync(true),
        DialogIntent::PointerDown(HitTarget::CloseButton),
        DialogIntent::PointerUp(HitTarget::CloseButton),
    ]);
    assert_eq!(phase.dismiss_reason(), Some(DismissReason::CloseButton));
}

#[test]
fn close_button_press_released_elsewhere_keeps_open() {
    let phase = run([
        sync(true),
        DialogIntent::PointerDown(HitTarget::CloseButton),
        DialogIntent::PointerUp(HitTarget::Content),
    ]);
    assert!(phase.is_open());
}

#[test]
fn backdrop_click_ignored_when_disabled() {
    let phase = run([
        DialogIntent::Sync {
            is_open: true,
            close_on_backdrop: false,
        },
        DialogIntent::PointerDown(HitTarget::Backdrop),
        DialogIntent::PointerUp(HitTarget::Backdrop),
    ]);
    assert!(phase.is_open());
}

#[test]
fn close_on_backdrop_can_change_while_open() {
    let phase = run([
        DialogIntent::Sync {
            is_open: true,
            close_on_backdrop: false,
        },
        sync(true),
        DialogIntent::PointerDown(HitTarget::Backdrop),
        DialogIntent::PointerUp(HitTarget::Backdrop),
    ]);
    assert_eq!(phase.dismiss_reason(), Some(DismissReason::Backdrop));
}

#[test]
fn input_while_closed_is_ignored() {
    for intent in [
        DialogIntent::DismissKey,
        DialogIntent::CloseButton,
        DialogIntent::PointerDown(HitTarget::Backdrop),
        DialogIntent::PointerUp(HitTarget::Backdrop),
    ] {
        assert_eq!(run([intent]), DialogPhase::Closed);
    }
}
