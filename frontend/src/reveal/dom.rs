use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Notifier, Presenter, RevealOptions, RevealSession, Watcher};

/// Class whose CSS animation carries a card from hidden to visible.
pub const REVEAL_CLASS: &str = "reveal";

/// Reveals an element by adding a CSS class to it.
pub struct ClassPresenter {
    class: &'static str,
}

impl ClassPresenter {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }
}

impl Presenter<Element> for ClassPresenter {
    fn reveal(&self, target: &Element) {
        if let Err(e) = target.class_list().add_1(self.class) {
            log::warn!("Failed to add class {} to reveal target: {:?}", self.class, e);
        }
    }
}

/// `IntersectionObserver` feeding a reveal session.
pub struct DomWatcher {
    observer: IntersectionObserver,
    // Must outlive the observer registration.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomWatcher {
    pub fn connect<P>(
        notifier: Notifier<Element, P>,
        options: &RevealOptions,
    ) -> Result<Self, JsValue>
    where
        P: Presenter<Element> + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    if notifier.notify(&target, ratio) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold.value()));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Watcher<Element> for DomWatcher {
    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn collect_targets(container: Option<&Element>, selector: &str) -> Vec<Element> {
    let Some(container) = container else {
        return Vec::new();
    };
    match container.query_selector_all(selector) {
        Ok(nodes) => (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("Reveal selector {} rejected: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Watch every element under `container` matching `selector`.
///
/// A missing container or no matches gives an inert session.
pub fn watch_within(
    container: Option<&Element>,
    selector: &str,
    options: &RevealOptions,
) -> RevealSession<Element, DomWatcher> {
    let targets = collect_targets(container, selector);
    super::activate(
        targets,
        options.threshold,
        ClassPresenter::new(REVEAL_CLASS),
        |notifier| DomWatcher::connect(notifier, options),
    )
}
