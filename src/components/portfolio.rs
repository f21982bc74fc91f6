use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behavior::portfolio::{
    plan_transitions, CardPhase, CardTransition, Category, Filter, PortfolioAction, PortfolioState,
};
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::config::CONFIG;
use crate::utils::scheduler::{BrowserScheduler, Scheduler, TimerHandle};

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub category: Category,
    pub image: &'static str,
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    phase: CardPhase,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let project = &props.project;
    let style = props
        .phase
        .inline_style(CONFIG.filter_fade_in_ms, CONFIG.filter_fade_out_ms);

    html! {
        <article
            ref={node}
            class={reveal_classes("project-card", revealed)}
            data-category={project.category.tag()}
            aria-hidden={(!props.phase.is_displayed()).then_some("true")}
            {style}
        >
            <LazyImage class="project-card__image" src={project.image} alt={project.title} />
            <div class="project-card__overlay">
                <span class="project-card__category">{project.category.label()}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__location">{project.location}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: Vec<Project>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let categories: Vec<Category> = props.projects.iter().map(|project| project.category).collect();
    let state = use_reducer_eq(move || PortfolioState::new(categories));
    // Staggered reveals and delayed hides of the latest selection.
    let pending = use_mut_ref(Vec::<TimerHandle>::new);

    let select = {
        let state = state.clone();
        Callback::from(move |filter: Filter| {
            debug!("Portfolio filter: {}", filter.tag());
            let mut pending = pending.borrow_mut();
            pending.clear();
            state.dispatch(PortfolioAction::Select(filter));

            let plan = plan_transitions(
                filter,
                state.cards(),
                CONFIG.filter_stagger_ms,
                CONFIG.filter_fade_out_ms,
            );
            for (index, transition) in plan.into_iter().enumerate() {
                let dispatcher = state.dispatcher();
                let handle = match transition {
                    CardTransition::Reveal { delay_ms } => BrowserScheduler.once(
                        delay_ms,
                        Box::new(move || dispatcher.dispatch(PortfolioAction::Reveal(index))),
                    ),
                    CardTransition::Conceal { hide_after_ms } => {
                        state.dispatch(PortfolioAction::FadeOut(index));
                        BrowserScheduler.once(
                            hide_after_ms,
                            Box::new(move || dispatcher.dispatch(PortfolioAction::Hide(index))),
                        )
                    }
                };
                pending.push(handle);
            }
        })
    };

    html! {
        <>
            <div class="portfolio__filters">
                { for Filter::buttons().map(|filter| {
                    let active = state.filter() == filter;
                    let onclick = {
                        let select = select.clone();
                        Callback::from(move |_: MouseEvent| select.emit(filter))
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", active.then_some("filter-btn--active"))}
                            data-filter={filter.tag()}
                            aria-pressed={active.to_string()}
                            {onclick}
                        >
                            {filter.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio__grid">
                { for props.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard project={project.clone()} phase={state.phase(index)} />
                }) }
            </div>
        </>
    }
}
