use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, ErrorEvent, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::error::SiteError;
use crate::state::contact_link::ContactTarget;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::missing("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or_else(|| SiteError::missing("document"))
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// Element id referenced by an in-page link, e.g. `"#about"` -> `"about"`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
/// Returns `Ok(false)` when there is no such element.
pub fn scroll_to_fragment(id: &str) -> Result<bool, SiteError> {
    let Some(target) = document()?.get_element_by_id(id) else {
        log::debug!("No element for fragment #{}", id);
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

pub fn set_body_scroll_locked(locked: bool) -> Result<(), SiteError> {
    let body = document()?.body().ok_or_else(|| SiteError::missing("body"))?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

pub fn focus_first(selector: &str) -> Result<bool, SiteError> {
    match document()?.query_selector(selector)? {
        Some(element) => {
            let element: HtmlElement = element
                .dyn_into()
                .map_err(|_| SiteError::Js(format!("{} is not an HTML element", selector)))?;
            element.focus()?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Blocking user notice.
pub fn notify(message: &str) {
    match window().and_then(|w| w.alert_with_message(message).map_err(SiteError::from)) {
        Ok(()) => {}
        Err(e) => log::error!("Failed to show notice '{}': {}", message, e),
    }
}

pub fn open_contact(target: &ContactTarget) -> Result<(), SiteError> {
    let window = window()?;
    match target {
        ContactTarget::SameTab(url) => window.location().set_href(url)?,
        ContactTarget::NewTab(url) => {
            window.open_with_url_and_target(url, "_blank")?;
        }
    }
    Ok(())
}

/// Reads a custom property from the root element's computed style.
pub fn css_variable(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    style.get_property_value(name).ok()
}

/// Logs every uncaught runtime error on the page. Nothing is retried.
pub fn install_error_logger() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(move |e: ErrorEvent| {
        log::error!(
            "JavaScript error: {} ({}:{}) {:?}",
            e.message(),
            e.filename(),
            e.lineno(),
            e.error()
        );
    }) as Box<dyn FnMut(ErrorEvent)>);
    if let Err(e) =
        window.add_event_listener_with_callback("error", callback.as_ref().unchecked_ref())
    {
        log::warn!("Failed to install error logger: {:?}", e);
    }
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
        assert_eq!(fragment_target("mailto:hi@example.com"), None);
    }
}
