use web_sys::MouseEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::reveal::use_reveal;
use crate::state::hover::HoverTarget;
use crate::state::reveal::REVEAL_CLASS;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub slug: AttrValue,
    pub title: AttrValue,
    pub summary: AttrValue,
    #[prop_or_default]
    pub tags: Vec<AttrValue>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(AttrValue::from(format!("project-{}", props.slug)), node.clone());
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <article
            ref={node}
            class={classes!("project-card", revealed.then_some(REVEAL_CLASS))}
            style={HoverTarget::ProjectCard.style(*hovered).css()}
            {onmouseenter}
            {onmouseleave}
        >
            <h3>{ props.title.clone() }</h3>
            <p>{ props.summary.clone() }</p>
            <ul class="project-tags">
                { for props.tags.iter().map(|tag| html! { <li key={tag.to_string()}>{ tag.clone() }</li> }) }
            </ul>
        </article>
    }
}
