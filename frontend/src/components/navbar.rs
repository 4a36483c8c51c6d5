use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::anchor::FragmentLink;
use crate::config::SITE;
use crate::content::NAV_LINKS;
use crate::state::keyboard::{shortcut_for, Shortcut};
use crate::state::nav::{NavAction, NavMenu};
use crate::state::scroll::NavbarSurface;
use crate::utils::debounce::debounce;
use crate::utils::dom;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_reducer(NavMenu::default);
    let surface = use_state(NavbarSurface::default);

    // Debounced scroll listener for the navbar surface
    {
        let surface = surface.clone();
        use_effect_with_deps(
            move |_| {
                let update = {
                    let surface = surface.clone();
                    move || {
                        if let Some(scroll_y) = dom::scroll_y() {
                            surface.set(NavbarSurface::for_offset(scroll_y, SITE.scroll_threshold));
                        }
                    }
                };
                if let Some(scroll_y) = dom::scroll_y() {
                    surface.set(NavbarSurface::for_offset(scroll_y, SITE.scroll_threshold));
                }
                let callback = Closure::<dyn Fn()>::new(debounce(SITE.scroll_debounce_ms, update));
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Keyboard shortcuts
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match shortcut_for(&e.key(), e.ctrl_key(), e.meta_key()) {
                        Some(Shortcut::FocusNavigation) => {
                            e.prevent_default();
                            if let Err(err) = dom::focus_first(".nav-menu a") {
                                log::warn!("Cannot focus navigation: {}", err);
                            }
                        }
                        Some(Shortcut::CloseMenu) => menu.dispatch(NavAction::Close),
                        None => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach keydown listener: {:?}", e);
                    }
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Lock background scrolling while the menu is open
    {
        let open = menu.is_open();
        use_effect_with_deps(
            move |open| {
                if let Err(e) = dom::set_body_scroll_locked(*open) {
                    log::debug!("Scroll lock not applied: {}", e);
                }
                || ()
            },
            open,
        );
    }

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Toggle))
    };
    let close = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(NavAction::Close))
    };
    let active = menu.active_class();

    html! {
        <nav class="navbar" style={surface.style()}>
            <div class="nav-container">
                <FragmentLink href="#home" class={classes!("nav-logo")}>{"Jane Doe"}</FragmentLink>
                <ul class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <FragmentLink href={*href} class={classes!("nav-link")} on_select={close.clone()}>
                                {*label}
                            </FragmentLink>
                        </li>
                    }) }
                </ul>
                <button
                    class={classes!("hamburger", active)}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
