//! Single-slot toast messages with timed dismissal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::utils::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "var(--color-primary)",
            ToastKind::Error => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    /// Exit animation is playing.
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastAction {
    Post { id: u32, kind: ToastKind, message: String },
    Leave(u32),
    Remove(u32),
}

/// Holds the one toast on screen, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Post { id, kind, message } => {
                self.current = Some(Toast {
                    id,
                    kind,
                    message,
                    leaving: false,
                });
            }
            // Timers of a replaced toast carry a stale id and are ignored.
            ToastAction::Leave(id) => {
                if let Some(toast) = self.current.as_mut().filter(|toast| toast.id == id) {
                    toast.leaving = true;
                }
            }
            ToastAction::Remove(id) => {
                if self.current.as_ref().is_some_and(|toast| toast.id == id) {
                    self.current = None;
                }
            }
        }
    }
}

/// Posts toasts and owns their dismissal timers.
pub struct ToastController<S: Scheduler> {
    scheduler: S,
    visible_ms: u32,
    exit_ms: u32,
    dispatch: Rc<dyn Fn(ToastAction)>,
    next_id: Cell<u32>,
    timers: RefCell<Vec<S::Handle>>,
}

impl<S: Scheduler> ToastController<S> {
    pub fn new(scheduler: S, visible_ms: u32, exit_ms: u32, dispatch: Rc<dyn Fn(ToastAction)>) -> Self {
        Self {
            scheduler,
            visible_ms,
            exit_ms,
            dispatch,
            next_id: Cell::new(0),
            timers: RefCell::new(Vec::new()),
        }
    }

    /// Show `message`, replacing whatever toast is on screen.
    pub fn post(&self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);

        let mut timers = self.timers.borrow_mut();
        timers.clear();

        (self.dispatch)(ToastAction::Post {
            id,
            kind,
            message: message.into(),
        });

        let dispatch = self.dispatch.clone();
        timers.push(
            self.scheduler
                .once(self.visible_ms, Box::new(move || dispatch(ToastAction::Leave(id)))),
        );
        let dispatch = self.dispatch.clone();
        timers.push(self.scheduler.once(
            self.visible_ms + self.exit_ms,
            Box::new(move || dispatch(ToastAction::Remove(id))),
        ));
        id
    }

    /// Remove the current toast immediately and cancel its timers.
    pub fn dismiss(&self) {
        self.timers.borrow_mut().clear();
        let id = self.next_id.get();
        (self.dispatch)(ToastAction::Remove(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::testing::FakeScheduler;

    fn controller(scheduler: &FakeScheduler) -> (ToastController<FakeScheduler>, Rc<RefCell<ToastSlot>>) {
        let slot = Rc::new(RefCell::new(ToastSlot::default()));
        let dispatch = {
            let slot = slot.clone();
            Rc::new(move |action: ToastAction| slot.borrow_mut().apply(action)) as Rc<dyn Fn(ToastAction)>
        };
        (ToastController::new(scheduler.clone(), 3000, 300, dispatch), slot)
    }

    #[test]
    fn test_toast_leaves_then_disappears() {
        let scheduler = FakeScheduler::default();
        let (toasts, slot) = controller(&scheduler);

        toasts.post(ToastKind::Success, "¡Mensaje enviado!");
        assert!(!slot.borrow().current().unwrap().leaving);

        scheduler.advance(3000);
        assert!(slot.borrow().current().unwrap().leaving);

        scheduler.advance(300);
        assert!(slot.borrow().current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_current_and_its_timers() {
        let scheduler = FakeScheduler::default();
        let (toasts, slot) = controller(&scheduler);

        toasts.post(ToastKind::Error, "first");
        scheduler.advance(2000);
        let second = toasts.post(ToastKind::Success, "second");
        assert_eq!(scheduler.live(), 2);

        // The first toast's exit time passes without touching the second one.
        scheduler.advance(1500);
        let current = slot.borrow().current().cloned().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "second");
        assert!(!current.leaving);

        scheduler.advance(1800);
        assert!(slot.borrow().current().is_none());
    }

    #[test]
    fn test_dismiss_clears_immediately() {
        let scheduler = FakeScheduler::default();
        let (toasts, slot) = controller(&scheduler);
        toasts.post(ToastKind::Error, "oops");
        toasts.dismiss();
        assert!(slot.borrow().current().is_none());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn test_stale_actions_are_ignored() {
        let mut slot = ToastSlot::default();
        slot.apply(ToastAction::Post {
            id: 2,
            kind: ToastKind::Success,
            message: "hola".into(),
        });
        slot.apply(ToastAction::Leave(1));
        slot.apply(ToastAction::Remove(1));
        assert_eq!(slot.current().map(|toast| toast.leaving), Some(false));
    }

    #[test]
    fn test_kind_background() {
        assert_eq!(ToastKind::Error.background(), "#e74c3c");
        assert_eq!(ToastKind::Success.background(), "var(--color-primary)");
    }
}
