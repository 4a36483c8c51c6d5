use web_sys::MouseEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::utils::dom::{fragment_target, scroll_to_fragment};

#[derive(Properties, PartialEq)]
pub struct FragmentLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_select: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that scrolls smoothly to an in-page target instead of jumping.
#[function_component(FragmentLink)]
pub fn fragment_link(props: &FragmentLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = fragment_target(&href) {
                e.prevent_default();
                if let Err(err) = scroll_to_fragment(id) {
                    log::warn!("Smooth scroll to #{} failed: {}", id, err);
                }
            }
            if let Some(cb) = &on_select {
                cb.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
