use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::SiteError;

/// Remembers whether an element has already been revealed. Only the first
/// intersecting observation passes; leaving and re-entering the viewport
/// does nothing.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Live observer for one element. Dropping it disconnects the observer.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(
        element: &Element,
        root_margin: &str,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, SiteError> {
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(intersecting) {
                    observer.disconnect();
                    on_reveal();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced node has scrolled into view (shrunk by
/// `root_margin`). Stays true for the life of the component.
#[hook]
pub fn use_reveal_once(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let attached = node
                    .cast::<Element>()
                    .ok_or(SiteError::Unmounted)
                    .and_then(|element| {
                        let revealed = revealed.clone();
                        let class = element.class_name();
                        RevealObserver::attach(&element, root_margin, move || {
                            debug!("revealing .{}", class);
                            revealed.set(true);
                        })
                    });

                let observer = match attached {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("scroll reveal unavailable, showing content: {}", err);
                        revealed.set(true);
                        None
                    }
                };

                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or("-120px")]
    pub margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Container whose motion-preset children animate in the first time it
/// becomes visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), props.margin);

    html! {
        <div ref={node} class={classes!(props.class.clone(), revealed.then(|| "revealed"))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_intersection_only() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn waits_until_first_visible() {
        let mut latch = RevealLatch::default();
        for _ in 0..5 {
            assert!(!latch.observe(false));
        }
        assert!(latch.observe(true));
    }
}
