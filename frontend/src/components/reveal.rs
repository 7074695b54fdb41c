use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::visibility::{VisibilityFlag, VisibilityOptions};

/// Staggered transition delay for the `index`-th card in a grid.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * config::REVEAL_STAGGER_MS
}

// Starts observing `node` and reports the first qualifying intersection
// through `on_visible`. None means the element isn't mounted or the browser
// has no IntersectionObserver.
fn observe_once(
    node: &NodeRef,
    options: VisibilityOptions,
    on_visible: UseStateSetter<bool>,
) -> Option<Box<dyn FnOnce()>> {
    let element = node.cast::<Element>()?;
    let flag = Rc::new(RefCell::new(VisibilityFlag::new()));
    let threshold = options.threshold;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let flipped = flag.borrow_mut().observe(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if flipped {
                    observer.unobserve(&entry.target());
                    on_visible.set(true);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            debug!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(&element);

    Some(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// True once the referenced element has scrolled into view. Stays true.
#[hook]
pub fn use_in_view(node: NodeRef, options: VisibilityOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let destructor: Box<dyn FnOnce()> = match observe_once(node, options, visible.setter()) {
                    Some(teardown) => teardown,
                    None => {
                        debug!("Revealing element without observer");
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), VisibilityOptions::default());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), config::REVEAL_STAGGER_MS);
        assert_eq!(stagger_delay(3), 3 * config::REVEAL_STAGGER_MS);
    }
}
