use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::anchor::FragmentLink;
use crate::components::code_block::CodePreview;
use crate::config::SITE;
use crate::content::CODE_SNIPPET;
use crate::state::reveal::REVEAL_CLASS;

#[function_component(Hero)]
pub fn hero() -> Html {
    let content_in = use_state(|| false);
    let image_in = use_state(|| false);

    // Staggered entrance on first mount
    {
        let content_in = content_in.clone();
        let image_in = image_in.clone();
        use_effect_with_deps(
            move |_| {
                let content = Timeout::new(SITE.hero_content_delay_ms, move || content_in.set(true));
                let image = Timeout::new(SITE.hero_image_delay_ms, move || image_in.set(true));
                move || {
                    drop(content);
                    drop(image);
                }
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero">
            <div class={classes!("hero-content", content_in.then_some(REVEAL_CLASS))}>
                <h1 class="hero-title">{"Hi, I'm "}<span class="highlight">{"Jane Doe"}</span></h1>
                <p class="hero-subtitle">{"Software engineer building fast, reliable web platforms in Rust."}</p>
                <div class="hero-buttons">
                    <FragmentLink href="#projects" class={classes!("btn", "btn-primary")}>{"View My Work"}</FragmentLink>
                    <FragmentLink href="#contact" class={classes!("btn", "btn-secondary")}>{"Get In Touch"}</FragmentLink>
                </div>
            </div>
            <div class={classes!("hero-image", image_in.then_some(REVEAL_CLASS))}>
                <CodePreview code={CODE_SNIPPET} />
            </div>
        </section>
    }
}
