use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::stats::{format_stat, CounterAnimation, StatsTrigger};
use crate::config::CONFIG;
use crate::error::{Result, SiteError};
use crate::utils::dom;
use crate::utils::scheduler::{BrowserScheduler, Debouncer, Repeater};
use crate::utils::visibility::is_in_viewport;

type CounterTimer = Rc<RefCell<Repeater<BrowserScheduler>>>;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: i64,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq)]
struct CounterValues(Vec<i64>);

impl Reducible for CounterValues {
    type Action = (usize, i64);

    fn reduce(self: Rc<Self>, (index, value): Self::Action) -> Rc<Self> {
        let mut values = self.0.clone();
        if let Some(slot) = values.get_mut(index) {
            *slot = value;
        }
        Rc::new(Self(values))
    }
}

fn any_stat_visible(container: &NodeRef) -> Result<bool> {
    let container = container
        .cast::<Element>()
        .ok_or_else(|| SiteError::missing(".stats"))?;
    let viewport_height = dom::viewport_height()?;
    let stats = container.query_selector_all(".stat")?;

    Ok((0..stats.length())
        .filter_map(|index| stats.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .any(|stat| {
            let rect = stat.get_bounding_client_rect();
            is_in_viewport(rect.top(), rect.bottom(), viewport_height, CONFIG.counter_viewport_offset)
        }))
}

/// Starts one timer per counter. Each timer cancels itself on its final step.
fn start_counters(
    targets: &[i64],
    timers: &RefCell<Vec<CounterTimer>>,
    values: &UseReducerDispatcher<CounterValues>,
) {
    let mut timers = timers.borrow_mut();
    timers.clear();

    for (index, &target) in targets.iter().enumerate() {
        let mut animation =
            CounterAnimation::new(target, CONFIG.counter_duration_ms, CONFIG.counter_steps);
        if animation.is_done() {
            values.dispatch((index, animation.current()));
            continue;
        }

        let timer: CounterTimer = Rc::new(RefCell::new(Repeater::new(
            BrowserScheduler,
            animation.interval_ms(),
        )));
        let own_timer: Weak<RefCell<Repeater<BrowserScheduler>>> = Rc::downgrade(&timer);
        let values = values.clone();
        timer.borrow_mut().start(Box::new(move || {
            values.dispatch((index, animation.tick()));
            if animation.is_done() {
                if let Some(timer) = own_timer.upgrade() {
                    timer.borrow_mut().stop();
                }
            }
        }));
        timers.push(timer);
    }
}

#[function_component(StatsCounter)]
pub fn stats_counter(props: &StatsCounterProps) -> Html {
    let len = props.stats.len();
    let values = use_reducer_eq(move || CounterValues(vec![0; len]));
    let container = use_node_ref();
    let trigger = use_mut_ref(StatsTrigger::default);
    let timers = use_mut_ref(Vec::<CounterTimer>::new);
    let debouncer = use_mut_ref(|| Debouncer::new(BrowserScheduler, CONFIG.counter_debounce_ms));

    let check: Rc<dyn Fn()> = {
        let container = container.clone();
        let timers = timers.clone();
        let dispatcher = values.dispatcher();
        let targets: Vec<i64> = props.stats.iter().map(|stat| stat.target).collect();
        Rc::new(move || {
            if trigger.borrow().has_animated() {
                return;
            }
            match any_stat_visible(&container) {
                Ok(visible) => {
                    if trigger.borrow_mut().should_start(visible) {
                        info!("Stats in view, animating {} counters", targets.len());
                        start_counters(&targets, &timers, &dispatcher);
                    }
                }
                Err(err) => warn!("Stats visibility check skipped: {}", err),
            }
        })
    };

    // Check once on load, then stop everything on unmount.
    {
        let check = check.clone();
        let timers = timers.clone();
        let debouncer = debouncer.clone();
        use_effect_with_deps(
            move |_| {
                check();
                move || {
                    debouncer.borrow_mut().cancel();
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| {
        let check = check.clone();
        debouncer.borrow_mut().call(Box::new(move || check()));
    });

    html! {
        <div class="stats" ref={container}>
            { for props.stats.iter().enumerate().map(|(index, stat)| html! {
                <div class="stat" data-target={stat.target.to_string()}>
                    <span class="stat__number">{format_stat(values.0.get(index).copied().unwrap_or(0))}</span>
                    <span class="stat__label">{stat.label}</span>
                </div>
            }) }
        </div>
    }
}
