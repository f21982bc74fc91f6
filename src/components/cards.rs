use yew::prelude::*;

use crate::components::reveal::{reveal_classes, use_reveal};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={reveal_classes("service-card", revealed)}>
            <span class="service-card__icon" aria-hidden="true">{props.icon}</span>
            <h3 class="service-card__title">{props.title}</h3>
            <p class="service-card__text">{props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub step: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <li ref={node} class={reveal_classes("timeline-item", revealed)}>
            <span class="timeline-item__step">{format!("{:02}", props.step)}</span>
            <div class="timeline-item__body">
                <h3>{props.title}</h3>
                <p>{props.description}</p>
            </div>
        </li>
    }
}
