use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::config::SITE;
use crate::state::reveal::REVEAL_CLASS;
use crate::utils::viewport::ViewportWatcher;

/// Shared viewport watcher handed down to every revealable element.
#[derive(Clone)]
pub struct RevealContext(Rc<ViewportWatcher>);

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let watcher = use_memo(
        |_| match ViewportWatcher::new(SITE.reveal_threshold, SITE.reveal_root_margin) {
            Ok(watcher) => Some(RevealContext(Rc::new(watcher))),
            Err(e) => {
                log::error!("Viewport watcher unavailable, content shows without animation: {}", e);
                None
            }
        },
        (),
    );

    match (*watcher).clone() {
        Some(context) => html! {
            <ContextProvider<RevealContext> {context}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        },
        None => html! { { for props.children.iter() } },
    }
}

/// Returns true once the element behind `node` has entered the viewport.
/// The flag never goes back to false.
#[hook]
pub fn use_reveal(id: AttrValue, node: NodeRef) -> bool {
    let context = use_context::<RevealContext>();
    let revealed = use_state(|| context.is_none());

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(id, node)| {
                let watched = match (context, node.cast::<Element>()) {
                    (Some(RevealContext(watcher)), Some(element)) => {
                        watcher.watch(id, &element, Callback::from(move |_| revealed.set(true)));
                        Some((watcher, element))
                    }
                    (_, None) => {
                        log::debug!("Reveal target {} is not mounted", id);
                        None
                    }
                    (None, Some(_)) => None,
                };
                let id = id.clone();
                move || {
                    if let Some((watcher, element)) = watched {
                        watcher.unwatch(&id, &element);
                    }
                }
            },
            (id, node),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Block that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(props.id.clone(), node.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), revealed.then_some(REVEAL_CLASS))}>
            { for props.children.iter() }
        </div>
    }
}
