use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behavior::toast::{Toast, ToastAction, ToastController, ToastKind, ToastSlot};
use crate::config::CONFIG;
use crate::utils::scheduler::BrowserScheduler;

/// Handle shared through context for posting toasts.
#[derive(Clone)]
pub struct Toaster(Rc<ToastController<BrowserScheduler>>);

impl Toaster {
    pub fn post(&self, kind: ToastKind, message: &str) {
        self.0.post(kind, message);
    }

    pub fn dismiss(&self) {
        self.0.dismiss();
    }
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn toast_style(toast: &Toast) -> String {
    let animation = if toast.leaving { "slideOut" } else { "slideIn" };
    format!(
        "position: fixed; bottom: 2rem; right: 2rem; padding: 1rem 2rem; \
         background-color: {}; color: white; border-radius: 4px; \
         box-shadow: var(--shadow-lg); z-index: 10000; cursor: pointer; \
         animation: {} 0.3s ease forwards;",
        toast.kind.background(),
        animation
    )
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let slot = use_reducer_eq(ToastSlot::default);
    let toaster = {
        let dispatcher = slot.dispatcher();
        use_memo(
            move |_| {
                let dispatch: Rc<dyn Fn(ToastAction)> =
                    Rc::new(move |action: ToastAction| dispatcher.dispatch(action));
                Toaster(Rc::new(ToastController::new(
                    BrowserScheduler,
                    CONFIG.toast_visible_ms,
                    CONFIG.toast_exit_ms,
                    dispatch,
                )))
            },
            (),
        )
    };

    let toast = slot.current().map(|toast| {
        let onclick = {
            let toaster = (*toaster).clone();
            Callback::from(move |_: MouseEvent| toaster.dismiss())
        };
        let kind = match toast.kind {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        };
        html! {
            <div
                key={toast.id}
                class={classes!("toast", kind)}
                role="status"
                aria-live="polite"
                style={toast_style(toast)}
                {onclick}
            >
                {toast.message.clone()}
            </div>
        }
    });

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { props.children.clone() }
            { for toast }
        </ContextProvider<Toaster>>
    }
}
