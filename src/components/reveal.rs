use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::behavior::reveal::{RevealLatch, REVEAL_CLASS, VISIBLE_CLASS};
use crate::config::CONFIG;
use crate::utils::visibility::{VisibilityChange, VisibilityWatcher, WatchOptions};

/// Reveal classes for an element that fades in once it scrolls into view.
pub fn reveal_classes(base: &'static str, revealed: bool) -> Classes {
    classes!(base, REVEAL_CLASS, revealed.then_some(VISIBLE_CLASS))
}

/// Returns true once the referenced element has been at least partly on screen.
///
/// The element stops being watched after the first reveal, so leaving and
/// re-entering the viewport never replays the entrance.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watcher = node.cast::<Element>().and_then(|element| {
                    let options = WatchOptions {
                        threshold: CONFIG.reveal_threshold,
                        root_margin: Some(CONFIG.reveal_root_margin),
                    };
                    let on_change = {
                        let revealed = revealed.clone();
                        let mut latch = RevealLatch::default();
                        move |change: VisibilityChange| {
                            if latch.on_visibility(change.is_visible()) {
                                revealed.set(true);
                                change.stop_watching();
                            }
                        }
                    };
                    match VisibilityWatcher::new(options, on_change) {
                        Ok(watcher) => {
                            watcher.observe(&element);
                            Some(watcher)
                        }
                        Err(err) => {
                            // Without an observer the content is shown right away.
                            warn!("Scroll reveal unavailable: {}", err);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(watcher)
            },
            node,
        );
    }

    *revealed
}
