//! WASM bindings for the portfolio page.
//!
//! Exposes the markdown renderer and diagram to JavaScript and binds the
//! palette controller to the page markup produced by the index generator.
//! All DOM access lives here; the controller itself only sees plain data.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::markdown::render;
use crate::network::NetworkLayout;
use crate::palette::{KeyInput, Navigation, Palette, PaletteEffect, PaletteItem, Target};

const INDEX_ATTR: &str = "data-index";

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render markdown text to HTML.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(text: &str) -> String {
    render(text)
}

/// Default node network diagram as SVG text.
#[wasm_bindgen(js_name = networkSvg)]
pub fn network_svg() -> String {
    NetworkLayout::default().to_svg_string()
}

struct Session {
    palette: Palette,
    window: Window,
    document: Document,
    root: Element,
    input: HtmlInputElement,
    items: Vec<HtmlElement>,
}

type SharedSession = Rc<RefCell<Session>>;

impl Session {
    /// Mirrors controller state onto the dialog, input and list entries.
    fn sync(&self) -> Result<(), JsValue> {
        let hidden = if self.palette.is_open() { "false" } else { "true" };
        self.root.set_attribute("aria-hidden", hidden)?;

        if self.input.value() != self.palette.query() {
            self.input.set_value(self.palette.query());
        }

        for (index, (element, item)) in self.items.iter().zip(self.palette.items()).enumerate() {
            let style = element.style();
            if item.is_visible() {
                style.remove_property("display")?;
            } else {
                style.set_property("display", "none")?;
            }

            if self.palette.is_selected(index) {
                element.set_attribute("aria-selected", "true")?;
            } else {
                element.remove_attribute("aria-selected")?;
            }
        }

        Ok(())
    }

    fn perform(&self, effect: PaletteEffect) -> Result<(), JsValue> {
        match effect {
            PaletteEffect::FocusInput { delay } => self.focus_input_after(delay),
            PaletteEffect::RevealItem { index } => {
                if let Some(element) = self.items.get(index) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_block(ScrollLogicalPosition::Nearest);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                Ok(())
            }
            PaletteEffect::Navigate(navigation) => self.navigate(&navigation),
        }
    }

    fn focus_input_after(&self, delay: Duration) -> Result<(), JsValue> {
        let input = self.input.clone();
        let callback = Closure::once_into_js(move || {
            if let Err(e) = input.focus() {
                web_sys::console::error_1(&e);
            }
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                delay.as_millis() as i32,
            )
            .map(|_| ())
    }

    fn navigate(&self, navigation: &Navigation) -> Result<(), JsValue> {
        let Some(target) = self.document.query_selector(navigation.target.as_str())? else {
            return Ok(());
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

/// Runs an operation on the session, then syncs the DOM and performs the
/// returned effect.
fn dispatch(session: &SharedSession, op: impl FnOnce(&mut Palette) -> Option<PaletteEffect>) {
    let effect = op(&mut session.borrow_mut().palette);
    let session = session.borrow();
    report(session.sync());
    if let Some(effect) = effect {
        report(session.perform(effect));
    }
}

fn collect_items(document: &Document) -> Result<(Vec<HtmlElement>, Vec<PaletteItem>), JsValue> {
    let nodes = document.query_selector_all("#cmdList li")?;
    let mut elements = Vec::new();
    let mut items = Vec::new();

    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let label = element.text_content().unwrap_or_default();
        let target = element.get_attribute("data-go").map(Target::new);
        element.set_attribute(INDEX_ATTR, &elements.len().to_string())?;
        items.push(PaletteItem::new(label.trim(), target));
        elements.push(element);
    }

    Ok((elements, items))
}

fn listen<E: JsCast + FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wire the command palette in the current document.
///
/// Looks up `#cmd`, `#cmdInput` and `#cmdList li`, builds a [`Palette`]
/// from the entries, and binds keyboard shortcuts, filtering, pointer
/// selection and the `.nav-toggle` button. Pages without a palette are
/// left untouched.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let Some(root) = document.query_selector("#cmd")? else {
        return Ok(());
    };
    let input = document
        .query_selector("#cmdInput")?
        .ok_or_else(|| JsValue::from_str("Missing #cmdInput"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("#cmdInput is not an input element"))?;
    let list = document.query_selector("#cmdList")?;
    let toggle = document.query_selector(".nav-toggle")?;
    let (elements, items) = collect_items(&document)?;

    let session: SharedSession = Rc::new(RefCell::new(Session {
        palette: Palette::new(items),
        window,
        document: document.clone(),
        root,
        input: input.clone(),
        items: elements,
    }));
    report(session.borrow().sync());

    let keys = session.clone();
    listen(&document, "keydown", move |e: KeyboardEvent| {
        let key = KeyInput {
            key: e.key(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
        };
        let mut prevent = false;
        dispatch(&keys, |palette| {
            let outcome = palette.handle_key(&key);
            prevent = outcome.prevent_default;
            outcome.effect
        });
        if prevent {
            e.prevent_default();
        }
    })?;

    let typing = session.clone();
    let query_input = input.clone();
    listen(&input, "input", move |_: Event| {
        let query = query_input.value();
        dispatch(&typing, |palette| {
            palette.set_query(&query);
            None
        });
    })?;

    if let Some(list) = list {
        let clicks = session.clone();
        listen(&list, "click", move |e: Event| {
            let index = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("li").ok().flatten())
                .and_then(|li| li.get_attribute(INDEX_ATTR))
                .and_then(|value| value.parse::<usize>().ok());
            if let Some(index) = index {
                dispatch(&clicks, |palette| {
                    palette.select_with_pointer(index).map(PaletteEffect::Navigate)
                });
            }
        })?;
    }

    if let Some(toggle) = toggle {
        let opener = session.clone();
        listen(&toggle, "click", move |_: Event| {
            dispatch(&opener, |palette| Some(palette.open()));
        })?;
    }

    Ok(())
}
