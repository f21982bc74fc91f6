use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::keyboard::slider_command;
use crate::behavior::slider::{strip_offset, Carousel, SlideCommand};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::config::CONFIG;
use crate::error::{Result, SiteError};
use crate::utils::dom;
use crate::utils::scheduler::{BrowserScheduler, Repeater};

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

impl Reducible for Carousel {
    type Action = SlideCommand;

    fn reduce(self: Rc<Self>, command: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(command);
        Rc::new(next)
    }
}

/// On narrow screens the cards sit in a horizontal strip that must follow the index.
fn scroll_strip(strip: &NodeRef, index: usize) -> Result<()> {
    if dom::viewport_width()? > CONFIG.slider_mobile_breakpoint {
        return Ok(());
    }
    let strip = strip
        .cast::<HtmlElement>()
        .ok_or_else(|| SiteError::missing(".testimonials__slider"))?;
    let card_width = strip
        .first_element_child()
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())
        .map(|card| f64::from(card.offset_width()))
        .ok_or_else(|| SiteError::missing(".testimonial-card"))?;
    dom::smooth_scroll_strip_to(&strip, strip_offset(index, card_width, CONFIG.slider_card_gap));
    Ok(())
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let testimonial = &props.testimonial;

    html! {
        <blockquote ref={node} class={reveal_classes("testimonial-card", revealed)}>
            <p class="testimonial-card__quote">{testimonial.quote}</p>
            <footer class="testimonial-card__author">
                <strong>{testimonial.author}</strong>
                <span>{testimonial.role}</span>
            </footer>
        </blockquote>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsSliderProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or(CONFIG.testimonial_autoplay)]
    pub autoplay: bool,
}

#[function_component(TestimonialsSlider)]
pub fn testimonials_slider(props: &TestimonialsSliderProps) -> Html {
    let len = props.testimonials.len();
    let carousel = use_reducer_eq(move || Carousel::new(len));
    let strip = use_node_ref();
    let autoplay = use_mut_ref(|| Repeater::new(BrowserScheduler, CONFIG.testimonial_interval_ms));

    let start_autoplay = {
        let autoplay = autoplay.clone();
        let dispatcher = carousel.dispatcher();
        let enabled = props.autoplay && len > 0;
        Callback::from(move |_: ()| {
            if !enabled {
                return;
            }
            let dispatcher = dispatcher.clone();
            autoplay
                .borrow_mut()
                .start(Box::new(move || dispatcher.dispatch(SlideCommand::Next)));
        })
    };
    let stop_autoplay = Callback::from(move |_: ()| {
        autoplay.borrow_mut().stop();
    });

    {
        let start = start_autoplay.clone();
        let stop = stop_autoplay.clone();
        use_effect_with_deps(
            move |_| {
                start.emit(());
                move || stop.emit(())
            },
            (),
        );
    }

    // Every accepted command re-aligns the strip, even onto the current slide.
    {
        let strip = strip.clone();
        let index = carousel.index();
        use_effect_with_deps(
            move |_| {
                if let Err(err) = scroll_strip(&strip, index) {
                    warn!("Testimonial strip not scrolled: {}", err);
                }
                || ()
            },
            carousel.moves(),
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(command) = slider_command(&e.key(), dom::focused_tag().as_deref()) {
                dispatcher.dispatch(command);
            }
        });
    }

    if carousel.is_empty() {
        return html! {};
    }

    let command = |command: SlideCommand| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(command))
    };
    let on_enter = Callback::from(move |_: MouseEvent| stop_autoplay.emit(()));
    let on_leave = Callback::from(move |_: MouseEvent| start_autoplay.emit(()));

    html! {
        <div class="testimonials">
            <div class="testimonials__slider" ref={strip} onmouseenter={on_enter} onmouseleave={on_leave}>
                { for props.testimonials.iter().map(|testimonial| html! {
                    <TestimonialCard testimonial={testimonial.clone()} />
                }) }
            </div>
            <div class="testimonials__controls">
                <button
                    class="testimonials__nav-btn testimonials__nav-btn--prev"
                    aria-label="Testimonio anterior"
                    onclick={command(SlideCommand::Prev)}
                >
                    {"←"}
                </button>
                <div class="testimonials__dots">
                    { for (0..carousel.len()).map(|index| html! {
                        <button
                            class={classes!("dot", carousel.is_active(index).then_some("dot--active"))}
                            aria-label={format!("Ir al testimonio {}", index + 1)}
                            onclick={command(SlideCommand::GoTo(index))}
                        />
                    }) }
                </div>
                <button
                    class="testimonials__nav-btn testimonials__nav-btn--next"
                    aria-label="Testimonio siguiente"
                    onclick={command(SlideCommand::Next)}
                >
                    {"→"}
                </button>
            </div>
        </div>
    }
}
