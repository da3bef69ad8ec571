use yew::prelude::*;
use log::warn;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Flips to `true` once `delay_ms` has elapsed after mount.
#[hook]
pub fn use_entrance(delay_ms: u32) -> bool {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = Timeout::new(*delay_ms, move || entered.set(true));
                // Dropping the timeout cancels it on unmount.
                move || drop(timeout)
            },
            delay_ms,
        );
    }

    *entered
}

fn observe(element: &Element, visible: UseStateHandle<bool>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            visible.set(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(_) => {
            warn!("Failed to create IntersectionObserver");
            None
        }
    }
}

/// Content that cannot be observed is shown without the transition.
fn needs_fallback_reveal(observing: bool) -> bool {
    !observing
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in while they intersect the viewport, and
/// back out once they leave it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, visible.clone()));

                if needs_fallback_reveal(observer.is_some()) {
                    warn!("Reveal target not observable, showing it immediately");
                    visible.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div
            id={props.id.clone()}
            ref={node}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobservable_content_is_shown() {
        assert!(needs_fallback_reveal(false));
    }

    #[test]
    fn observed_content_waits_for_intersection() {
        assert!(!needs_fallback_reveal(true));
    }
}
