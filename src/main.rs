use log::{info, warn};
use yew::prelude::*;

mod config;
mod error;
mod utils {
    pub mod dom;
    pub mod perf;
    pub mod scheduler;
    pub mod visibility;
}
mod behavior {
    pub mod contact;
    pub mod keyboard;
    pub mod lazy_image;
    pub mod nav;
    pub mod portfolio;
    pub mod reveal;
    pub mod slider;
    pub mod stats;
    pub mod toast;
}
mod components {
    pub mod cards;
    pub mod contact_form;
    pub mod focus_ring;
    pub mod lazy_image;
    pub mod nav;
    pub mod portfolio;
    pub mod reveal;
    pub mod stats;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use behavior::keyboard::FOCUS_STYLE;
use config::CONFIG;
use components::focus_ring::use_focus_ring;
use components::nav::Nav;
use components::toast::ToastProvider;
use pages::home::Home;
use utils::perf;

const KEYFRAMES: &str = r#"
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeOut {
        from { opacity: 1; transform: translateY(0); }
        to { opacity: 0; transform: translateY(-20px); }
    }
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .nav {
        transition: transform 0.3s ease;
    }
    .nav--hidden {
        transform: translateY(-100%);
    }
"#;

/// Keyframes plus the reveal transition timed by `animation_duration_ms`.
fn animation_style(animation_duration_ms: u32) -> String {
    let seconds = f64::from(animation_duration_ms) / 1000.0;
    format!(
        "{}    .fade-in {{\n        opacity: 0;\n        transform: translateY(20px);\n        \
         transition: opacity {s}s ease, transform {s}s ease;\n    }}\n",
        KEYFRAMES,
        s = seconds
    )
}

#[function_component]
fn App() -> Html {
    use_focus_ring();

    use_effect_with_deps(
        |_| {
            if let Err(err) = perf::monitor_page_load() {
                warn!("Page load timing unavailable: {}", err);
            }
            gloo_console::log!("%c⚡ APEX CONSTRUCTORA", "font-size: 20px; font-weight: bold; color: #ff6b35;");
            gloo_console::log!("%cSistema inicializado correctamente", "color: #4a4a4a;");
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{animation_style(CONFIG.animation_duration_ms)}{FOCUS_STYLE}</style>
            <ToastProvider>
                <Nav />
                <Home />
            </ToastProvider>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
