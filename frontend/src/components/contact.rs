use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::reveal::use_reveal;
use crate::config;
use crate::content::{ContactEntry, CONTACTS};
use crate::state::contact::{
    ContactForm, Field, FormAction, FormError, MessageTransport, SimulatedTransport, SUCCESS_NOTICE,
};
use crate::state::contact_link::ContactChannel;
use crate::state::reveal::REVEAL_CLASS;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
struct ContactItemProps {
    icon: AttrValue,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(ContactItem)]
fn contact_item(props: &ContactItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(
        AttrValue::from(format!("contact-{}", props.title.to_lowercase())),
        node.clone(),
    );

    let onclick = {
        let icon = props.icon.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(channel) = ContactChannel::from_icon_class(&icon) else {
                return;
            };
            let target = channel.target(&text, config::linkedin_base());
            if let Err(e) = dom::open_contact(&target) {
                log::error!("Failed to open {:?}: {}", target, e);
            }
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("contact-item", revealed.then_some(REVEAL_CLASS))}
            style="cursor: pointer;"
            {onclick}
        >
            <i class={icon_classes(&props.icon)}></i>
            <div>
                <h4>{ props.title.clone() }</h4>
                <p>{ props.text.clone() }</p>
            </div>
        </div>
    }
}

fn icon_classes(icon: &str) -> Classes {
    classes!(icon.to_string())
}

fn render_contact(entry: &ContactEntry) -> Html {
    html! {
        <ContactItem key={entry.title} icon={entry.icon} title={entry.title} text={entry.text} />
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);

    let edit = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Edit(field, value)))
    };
    let on_name = edit(Field::Name).reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = edit(Field::Email).reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_message =
        edit(Field::Message).reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.check() {
                Ok(message) => {
                    form.dispatch(FormAction::BeginSend);
                    let form = form.clone();
                    spawn_local(async move {
                        let transport = SimulatedTransport::default();
                        match transport.send(message).await {
                            Ok(()) => {
                                dom::notify(SUCCESS_NOTICE);
                                form.dispatch(FormAction::Sent);
                            }
                            Err(e) => {
                                log::error!("Message delivery failed: {}", e);
                                form.dispatch(FormAction::Failed);
                            }
                        }
                    });
                }
                Err(FormError::Busy) => log::debug!("Submit ignored, message still sending"),
                Err(e @ FormError::Incomplete { .. }) => dom::notify(&e.to_string()),
            }
        })
    };

    let fields = form.fields();
    let submit = form.submit();

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        { for CONTACTS.iter().map(render_contact) }
                    </div>
                    <div class="contact-form">
                        <form {onsubmit}>
                            <input
                                type="text"
                                name={Field::Name.name()}
                                placeholder="Your Name"
                                value={fields.name.clone()}
                                oninput={on_name}
                            />
                            <input
                                type="email"
                                name={Field::Email.name()}
                                placeholder="Your Email"
                                value={fields.email.clone()}
                                oninput={on_email}
                            />
                            <textarea
                                name={Field::Message.name()}
                                placeholder="Your Message"
                                rows="5"
                                value={fields.message.clone()}
                                oninput={on_message}
                            ></textarea>
                            <button type="submit" class="btn btn-primary" disabled={submit.disabled()}>
                                { submit.label().to_string() }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_class_icons_keep_every_class() {
        let icon = icon_classes("fab fa-linkedin");
        assert!(icon.contains("fab"));
        assert!(icon.contains("fa-linkedin"));
        assert_eq!(icon.to_string(), "fab fa-linkedin");
    }

    #[test]
    fn every_contact_icon_resolves_to_classes() {
        for entry in CONTACTS {
            assert!(!icon_classes(entry.icon).is_empty(), "{}", entry.title);
        }
    }
}
