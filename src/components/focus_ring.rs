use log::warn;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::keyboard::{FocusMode, KEYBOARD_NAV_CLASS};
use crate::error::Result;
use crate::utils::dom;

fn apply_focus_mode(mode: FocusMode) -> Result<()> {
    let classes = dom::body()?.class_list();
    match mode {
        FocusMode::Keyboard => classes.add_1(KEYBOARD_NAV_CLASS)?,
        FocusMode::Pointer => classes.remove_1(KEYBOARD_NAV_CLASS)?,
    }
    Ok(())
}

fn set_focus_mode(mode: FocusMode) {
    if let Err(err) = apply_focus_mode(mode) {
        warn!("Focus ring toggle failed: {}", err);
    }
}

/// Shows focus outlines after a Tab press and hides them again on mouse use.
#[hook]
pub fn use_focus_ring() {
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if let Some(mode) = FocusMode::for_key(&e.key()) {
            set_focus_mode(mode);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| set_focus_mode(FocusMode::Pointer));
}
