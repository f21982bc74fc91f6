use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::behavior::lazy_image::promote_deferred_source;
use crate::utils::visibility::{VisibilityChange, VisibilityWatcher, WatchOptions};

/// 1x1 transparent gif shown until the real source is swapped in.
const PLACEHOLDER_SRC: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

fn load_when_visible(change: VisibilityChange) {
    if !change.is_visible() {
        return;
    }
    match promote_deferred_source(change.target()) {
        Ok(true) => debug!("Lazy image loaded"),
        Ok(false) => {}
        Err(err) => warn!("Lazy image swap failed: {}", err),
    }
    change.stop_watching();
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();

    use_effect_with_deps(
        move |node: &NodeRef| {
            let watcher = node.cast::<Element>().and_then(|image| {
                match VisibilityWatcher::new(WatchOptions::default(), load_when_visible) {
                    Ok(watcher) => {
                        watcher.observe(&image);
                        Some(watcher)
                    }
                    Err(err) => {
                        warn!("Lazy loading unavailable ({}), loading eagerly", err);
                        if let Err(err) = promote_deferred_source(&image) {
                            warn!("Eager image load failed: {}", err);
                        }
                        None
                    }
                }
            });
            move || drop(watcher)
        },
        node.clone(),
    );

    html! {
        <img
            ref={node}
            class={props.class.clone()}
            src={PLACEHOLDER_SRC}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
        />
    }
}
