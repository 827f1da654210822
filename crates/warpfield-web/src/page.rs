//! Peripheral page behaviors: scroll-reveal sections and the FAQ
//! accordion. The state machines live in the engine crate, this module
//! only owns the observers and listeners that feed them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use warpfield_engine::{Accordion, RevealSet};

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_CLASS: &str = "visible";
/// An eighth or so of the element has to show before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;

pub const FAQ_QUESTION_SELECTOR: &str = ".faq-q";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_OPEN_CLASS: &str = "open";

/// The reveal observer and its callback, alive for the page lifetime.
pub struct Reveal {
    observer: IntersectionObserver,
    _cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `.reveal` element and add the `visible` class the
/// first time one crosses the threshold. Each element fires once and is
/// then unobserved.
pub fn mount_reveal(document: &Document) -> Result<Option<Reveal>, JsValue> {
    let targets = Rc::new(collect(document, REVEAL_SELECTOR)?);
    if targets.is_empty() {
        return Ok(None);
    }
    log::debug!("reveal: observing {} sections", targets.len());

    let mut tracked = RevealSet::new(targets.len());
    let cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> = {
        let targets = Rc::clone(&targets);
        Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(idx) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracked.on_intersect(idx, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for el in targets.iter() {
        observer.observe(el);
    }

    Ok(Some(Reveal { observer, _cb: cb }))
}

/// The FAQ click handlers, one per question, alive for the page
/// lifetime.
pub struct Faq {
    handlers: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl Drop for Faq {
    fn drop(&mut self) {
        for (question, cb) in &self.handlers {
            let _ = question
                .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
    }
}

/// Wire the single-open accordion over `.faq-item` / `.faq-q` markup.
/// Questions and items are paired by document order, one question per
/// item.
pub fn mount_faq(document: &Document) -> Result<Option<Faq>, JsValue> {
    let questions = collect(document, FAQ_QUESTION_SELECTOR)?;
    let items = collect(document, FAQ_ITEM_SELECTOR)?;
    if questions.is_empty() {
        return Ok(None);
    }
    log::debug!("faq: {} questions wired", questions.len());

    // Markup that ships an item pre-opened starts in that state.
    let initial = items
        .iter()
        .position(|item| item.class_list().contains(FAQ_OPEN_CLASS));
    let state = Rc::new(RefCell::new(Accordion::with_open(initial)));
    let items = Rc::new(items);

    let mut handlers = Vec::with_capacity(questions.len());
    for (idx, question) in questions.into_iter().enumerate() {
        let state = Rc::clone(&state);
        let items = Rc::clone(&items);
        let cb: Closure<dyn FnMut()> = Closure::new(move || {
            let open = state.borrow_mut().toggle(idx);
            for (i, item) in items.iter().enumerate() {
                let classes = item.class_list();
                if open == Some(i) {
                    let _ = classes.add_1(FAQ_OPEN_CLASS);
                } else {
                    let _ = classes.remove_1(FAQ_OPEN_CLASS);
                }
            }
        });
        question.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        handlers.push((question, cb));
    }

    Ok(Some(Faq { handlers }))
}

/// Query a selector into a plain element vec.
fn collect(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                elements.push(el);
            }
        }
    }
    Ok(elements)
}
