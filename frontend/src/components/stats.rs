use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::reveal::use_reveal;
use crate::config::SITE;
use crate::content::STATS;
use crate::state::counter::{CounterAction, StatCounter};

#[derive(Properties, PartialEq)]
struct StatProps {
    value: AttrValue,
    label: AttrValue,
    active: bool,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    let counter = {
        let value = props.value.clone();
        use_reducer(move || StatCounter::parse(&value, SITE.counter_steps))
    };

    // Tick until the counter reaches its target; dropping the interval stops it.
    {
        let counter = counter.clone();
        let running = props.active && !counter.is_done();
        use_effect_with_deps(
            move |running| {
                let interval = running.then(|| {
                    Interval::new(SITE.counter_tick_ms, move || counter.dispatch(CounterAction::Tick))
                });
                move || drop(interval)
            },
            running,
        );
    }

    html! {
        <div class="stat">
            <h3>{ counter.text() }</h3>
            <p>{ props.label.clone() }</p>
        </div>
    }
}

/// Stat headings that count up once the section first scrolls into view.
#[function_component(AboutStats)]
pub fn about_stats() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(AttrValue::Static("about-stats"), node.clone());

    html! {
        <div class="about-stats" ref={node}>
            { for STATS.iter().map(|(value, label)| html! {
                <Stat key={*label} value={*value} label={*label} active={visible} />
            }) }
        </div>
    }
}
