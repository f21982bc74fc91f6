use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::nav::{anchor_scroll_top, anchor_target, MobileMenu, NavScroll, NavVisibility};
use crate::config::CONFIG;
use crate::error::Result;
use crate::utils::dom;
use crate::utils::scheduler::FrameThrottle;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#inicio", "Inicio"),
    ("#servicios", "Servicios"),
    ("#proyectos", "Proyectos"),
    ("#proceso", "Proceso"),
    ("#testimonios", "Testimonios"),
    ("#contacto", "Contacto"),
];

fn scroll_to_section(id: &str) -> Result<()> {
    let section = dom::element_by_id(id)?;
    let top = anchor_scroll_top(dom::page_top(&section)?, CONFIG.anchor_scroll_offset);
    dom::smooth_scroll_page_to(top)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let hidden = use_state_eq(|| false);
    let menu = use_state_eq(MobileMenu::default);
    let nav_ref = use_node_ref();
    let scroll = use_mut_ref(|| NavScroll::new(CONFIG.nav_hide_threshold));
    let throttle = use_memo(|_| FrameThrottle::default(), ());

    // Scroll work runs at most once per animation frame.
    let on_frame = {
        let hidden = hidden.clone();
        let throttle = throttle.clone();
        use_memo(
            move |_| {
                Closure::<dyn FnMut()>::new(move || {
                    match dom::scroll_offset() {
                        Ok(offset) => {
                            let visibility = scroll.borrow_mut().update(offset);
                            hidden.set(visibility == NavVisibility::Hidden);
                        }
                        Err(err) => warn!("Nav scroll check skipped: {}", err),
                    }
                    throttle.complete();
                })
            },
            (),
        )
    };

    {
        let throttle = throttle.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !throttle.request() {
                return;
            }
            let requested = dom::window()
                .and_then(|window| Ok(window.request_animation_frame((*on_frame).as_ref().unchecked_ref())?));
            if let Err(err) = requested {
                warn!("Could not schedule nav update: {}", err);
                throttle.complete();
            }
        });
    }

    // Any click outside the bar closes the mobile menu.
    {
        let menu = menu.clone();
        let nav_ref = nav_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(nav) = nav_ref.get() else {
                return;
            };
            let target = e.target().and_then(|target| target.dyn_into::<Node>().ok());
            if !nav.contains(target.as_ref()) {
                menu.set(MobileMenu::closed());
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).toggled());
        })
    };

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            let menu = menu.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                menu.set(MobileMenu::closed());
                if let Some(id) = anchor_target(href) {
                    e.prevent_default();
                    if let Err(err) = scroll_to_section(id) {
                        warn!("Anchor scroll to #{} skipped: {}", id, err);
                    }
                }
            });
            html! {
                <li class="nav__item">
                    <a class="nav__link" {href} {onclick}>{label}</a>
                </li>
            }
        })
        .collect::<Html>();

    let icon = menu.icon();

    html! {
        <nav id="mainNav" ref={nav_ref} class={classes!("nav", (*hidden).then_some("nav--hidden"))}>
            <div class="nav__container">
                <a href="#inicio" class="nav__logo">
                    {"APEX"}<span class="nav__logo-accent">{"CONSTRUCTORA"}</span>
                </a>
                <button
                    id="navToggle"
                    class="nav__toggle"
                    aria-label="Abrir menú"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span style={format!("transform: {};", icon.top)}></span>
                    <span style={format!("opacity: {};", icon.middle_opacity)}></span>
                    <span style={format!("transform: {};", icon.bottom)}></span>
                </button>
                <ul id="navMenu" class={classes!("nav__menu", menu.is_open().then_some("nav__menu--active"))}>
                    {links}
                </ul>
            </div>
        </nav>
    }
}
