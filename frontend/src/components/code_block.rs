use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::config::SITE;
use crate::error::{describe_js, SiteError};
use crate::state::clipboard::{CopyAction, CopyButton};
use crate::state::hover::HoverTarget;
use crate::utils::dom;

const COPY_BUTTON_STYLE: &str = "position: absolute; top: 10px; right: 10px; \
    background: rgba(255, 255, 255, 0.1); border: none; color: white; padding: 8px; \
    border-radius: 4px; cursor: pointer; transition: opacity 0.3s ease;";

async fn copy_to_clipboard(text: &str) -> Result<(), SiteError> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| SiteError::Clipboard(describe_js(&e)))
}

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
}

/// `pre > code` block with a copy button that shows on hover.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let button = use_reducer(CopyButton::default);
    let copies = use_mut_ref(|| 0u32);

    let onmouseenter = {
        let button = button.clone();
        Callback::from(move |_: MouseEvent| button.dispatch(CopyAction::Hover(true)))
    };
    let onmouseleave = {
        let button = button.clone();
        Callback::from(move |_: MouseEvent| button.dispatch(CopyAction::Hover(false)))
    };
    let onclick = {
        let button = button.clone();
        let code = props.code.clone();
        Callback::from(move |_: MouseEvent| {
            let token = {
                let mut copies = copies.borrow_mut();
                *copies = copies.wrapping_add(1);
                *copies
            };
            let button = button.clone();
            let code = code.clone();
            spawn_local(async move {
                match copy_to_clipboard(&code).await {
                    Ok(()) => {
                        button.dispatch(CopyAction::Copied(token));
                        TimeoutFuture::new(SITE.copy_feedback_ms).await;
                        button.dispatch(CopyAction::Revert(token));
                    }
                    Err(e) => log::error!("{}", e),
                }
            });
        })
    };

    html! {
        <pre style="position: relative;" {onmouseenter} {onmouseleave}>
            <code>{ props.code.clone() }</code>
            <button
                class="copy-btn"
                aria-label="Copy code"
                style={format!("{} opacity: {};", COPY_BUTTON_STYLE, button.opacity())}
                {onclick}
            >
                <i class={button.icon()}></i>
            </button>
        </pre>
    }
}

/// Tilted code panel in the hero that straightens on hover.
#[function_component(CodePreview)]
pub fn code_preview(props: &CodeBlockProps) -> Html {
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
        <div
            class="code-preview"
            style={HoverTarget::CodePreview.style(*hovered).css()}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="code-header">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
            </div>
            <CodeBlock code={props.code.clone()} />
        </div>
    }
}
