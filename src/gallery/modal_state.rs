use super::project::ProjectKey;

/// Overlay visibility, plus which project is on show while open. There are
/// no in-between states; every input is handled synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalInput {
    /// Parent set `is_open` with this project selected.
    Open(ProjectKey),
    /// Parent cleared `is_open`.
    Close,
    OverlayClick,
    ContentClick,
    CloseButton,
    /// Keydown, by `KeyboardEvent.key`.
    Key(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ModalState,
    /// The owner must be told the user wants the modal closed.
    pub notify_close: bool,
    /// Carousel goes back to the first item of the shown project.
    pub reset_carousel: bool,
    /// Background scrolling stops.
    pub entered: bool,
    /// Background scrolling is restored.
    pub exited: bool,
}

impl Transition {
    fn stay(state: ModalState) -> Self {
        Self {
            next: state,
            notify_close: false,
            reset_carousel: false,
            entered: false,
            exited: false,
        }
    }
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn handle(self, input: &ModalInput) -> Transition {
        let close = |notify_close| Transition {
            next: Self::Closed,
            notify_close,
            reset_carousel: false,
            entered: false,
            exited: true,
        };
        match (self, input) {
            (Self::Closed, ModalInput::Open(key)) => Transition {
                next: Self::Open(*key),
                notify_close: false,
                reset_carousel: true,
                entered: true,
                exited: false,
            },
            // a new selection replaces the old one without leaving Open
            (Self::Open(shown), ModalInput::Open(key)) if shown != *key => Transition {
                next: Self::Open(*key),
                notify_close: false,
                reset_carousel: true,
                entered: false,
                exited: false,
            },
            (Self::Open(_), ModalInput::Close) => close(false),
            (Self::Open(_), ModalInput::OverlayClick | ModalInput::CloseButton) => close(true),
            (Self::Open(_), ModalInput::Key(k)) if k == "Escape" => close(true),
            (state, _) => Transition::stay(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ProjectKey = ProjectKey(0);
    const B: ProjectKey = ProjectKey(1);

    fn escape() -> ModalInput {
        ModalInput::Key("Escape".to_string())
    }

    #[test]
    fn test_open_enters() {
        let t = ModalState::Closed.handle(&ModalInput::Open(A));
        assert_eq!(t.next, ModalState::Open(A));
        assert!(t.entered);
        assert!(t.reset_carousel);
        assert!(!t.notify_close);
    }

    #[test]
    fn test_escape_only_closes_when_open() {
        let t = ModalState::Open(A).handle(&escape());
        assert_eq!(t.next, ModalState::Closed);
        assert!(t.notify_close);
        assert!(t.exited);

        let t = ModalState::Closed.handle(&escape());
        assert_eq!(t, Transition::stay(ModalState::Closed));
    }

    #[test]
    fn test_other_keys_ignored() {
        let t = ModalState::Open(A).handle(&ModalInput::Key("Enter".to_string()));
        assert_eq!(t, Transition::stay(ModalState::Open(A)));
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let t = ModalState::Open(A).handle(&ModalInput::ContentClick);
        assert_eq!(t.next, ModalState::Open(A));
        assert!(!t.notify_close);

        let t = ModalState::Open(A).handle(&ModalInput::OverlayClick);
        assert_eq!(t.next, ModalState::Closed);
        assert!(t.notify_close);

        let t = ModalState::Open(A).handle(&ModalInput::CloseButton);
        assert!(t.notify_close);
    }

    #[test]
    fn test_parent_close_does_not_echo() {
        let t = ModalState::Open(A).handle(&ModalInput::Close);
        assert_eq!(t.next, ModalState::Closed);
        assert!(!t.notify_close);
        assert!(t.exited);
    }

    #[test]
    fn test_reopen_after_close() {
        let mut state = ModalState::Closed;
        for _ in 0..2 {
            let t = state.handle(&ModalInput::Open(A));
            assert!(t.entered);
            assert!(t.reset_carousel);
            state = t.next;
            state = state.handle(&ModalInput::OverlayClick).next;
        }
        assert!(!state.is_open());
    }

    #[test]
    fn test_switching_project_while_open_resets_carousel() {
        let t = ModalState::Open(A).handle(&ModalInput::Open(B));
        assert_eq!(t.next, ModalState::Open(B));
        assert!(t.reset_carousel);
        // scroll lock is already held
        assert!(!t.entered);
        assert!(!t.exited);
    }

    #[test]
    fn test_same_project_rerun_is_a_no_op() {
        let t = ModalState::Open(A).handle(&ModalInput::Open(A));
        assert_eq!(t, Transition::stay(ModalState::Open(A)));
    }
}
