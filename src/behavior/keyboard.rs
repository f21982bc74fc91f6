//! Keyboard shortcuts and focus-ring mode.

use crate::behavior::slider::SlideCommand;

/// Body class that enables the focus outline for keyboard users.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

pub const FOCUS_STYLE: &str = r#"
    .keyboard-nav *:focus {
        outline: 2px solid var(--color-primary);
        outline-offset: 2px;
    }
"#;

/// Elements that own the arrow keys while focused.
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// Slider command for a keydown, unless focus is in a text field.
pub fn slider_command(key: &str, focused_tag: Option<&str>) -> Option<SlideCommand> {
    if focused_tag.is_some_and(is_text_entry) {
        return None;
    }
    match key {
        "ArrowLeft" => Some(SlideCommand::Prev),
        "ArrowRight" => Some(SlideCommand::Next),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    Keyboard,
    Pointer,
}

impl FocusMode {
    /// A Tab press switches to keyboard mode; other keys leave the mode alone.
    pub fn for_key(key: &str) -> Option<FocusMode> {
        (key == "Tab").then_some(FocusMode::Keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_map_to_slider_commands() {
        assert_eq!(slider_command("ArrowLeft", None), Some(SlideCommand::Prev));
        assert_eq!(slider_command("ArrowRight", Some("BUTTON")), Some(SlideCommand::Next));
        assert_eq!(slider_command("ArrowUp", None), None);
        assert_eq!(slider_command("Enter", Some("DIV")), None);
    }

    #[test]
    fn test_arrows_ignored_while_typing() {
        assert_eq!(slider_command("ArrowLeft", Some("INPUT")), None);
        assert_eq!(slider_command("ArrowRight", Some("TEXTAREA")), None);
        assert_eq!(slider_command("ArrowRight", Some("textarea")), None);
        assert_eq!(slider_command("ArrowRight", Some("SELECT")), Some(SlideCommand::Next));
    }

    #[test]
    fn test_focus_mode_for_key() {
        assert_eq!(FocusMode::for_key("Tab"), Some(FocusMode::Keyboard));
        assert_eq!(FocusMode::for_key("a"), None);
    }
}
