#![forbid(unsafe_code)]

//! The JavaScript-facing `Typeahead` class.
//!
//! ```js
//! import init, { Typeahead } from "typeahead_web";
//! await init();
//! const widget = new Typeahead(input, list, { minChar: 2, query: "fuzzy" });
//! widget.setQuery((record, text) => record.startsWith(text));
//! ```
//!
//! `query` and `toHtml` may be given as names (`"strict"`, `"fuzzy"`,
//! `"classic"`) or as functions. An exception thrown by a caller function is
//! rethrown to the code that triggered the event once the widget has finished
//! the call; the widget stays usable afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, JSON, Object, Reflect};
use typeahead_core::dom::DisplaySurface;
use typeahead_core::event::Event;
use typeahead_core::id::WidgetId;
use typeahead_core::plugin::Plugin;
use typeahead_core::record::Record;
use typeahead_text::Query;
use typeahead_widgets::{Autocomplete, ConfigError, Formatter, Options};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::callback::{ErrorSlot, run};
use crate::document::DocumentClicks;
use crate::dom::{ItemDispatch, WebDisplay, WebInput};
use crate::options::{CALLBACK_KEYS, dataset_from_json, options_from_json};

type Widget = Autocomplete<WebInput, WebDisplay>;
type Listener = Closure<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>;
type Errors = ErrorSlot<JsValue>;

fn config_error(err: &ConfigError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn busy() -> JsValue {
    JsError::new("typeahead widget is already handling an event").into()
}

fn stringify(value: &JsValue) -> Result<Option<String>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(JSON::stringify(value)?.as_string())
}

fn record_to_js(record: &Record) -> JsValue {
    match record.as_str() {
        Some(text) => JsValue::from_str(text),
        None => JSON::parse(&record.text()).unwrap_or(JsValue::UNDEFINED),
    }
}

/// Wrap a JavaScript `(record, text) => boolean` function.
///
/// A throw counts as "no match" and is parked in `errors`.
fn js_query(function: Function, errors: Errors) -> Query {
    Query::custom(move |record, text| {
        match function.call2(&JsValue::NULL, &record_to_js(record), &JsValue::from_str(text)) {
            Ok(result) => result.is_truthy(),
            Err(err) => {
                errors.park(err);
                false
            }
        }
    })
}

/// Wrap a JavaScript `(record) => string` function.
fn js_formatter(function: Function, errors: Errors) -> Formatter {
    Formatter::custom(move |record| match function.call1(&JsValue::NULL, &record_to_js(record)) {
        Ok(markup) => markup.as_string().unwrap_or_default(),
        Err(err) => {
            errors.park(err);
            String::new()
        }
    })
}

/// A plugin supplied as a JavaScript object `{ name, onRegister? }`.
struct JsPlugin {
    name: String,
    object: JsValue,
    errors: Errors,
}

impl Plugin for JsPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_register(&self, widget: WidgetId) {
        let hook = Reflect::get(&self.object, &JsValue::from_str("onRegister"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(hook) = hook {
            if let Err(err) = hook.call1(&self.object, &JsValue::from_str(&widget.to_string())) {
                self.errors.park(err);
            }
        }
    }
}

fn js_plugin(object: JsValue, errors: &Errors) -> Rc<dyn Plugin> {
    let name = Reflect::get(&object, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string())
        .unwrap_or_else(|| "anonymous".to_owned());
    Rc::new(JsPlugin {
        name,
        object,
        errors: errors.clone(),
    })
}

/// Split a JavaScript options object into data options and callbacks.
fn options_from_js(options: &JsValue, errors: &Errors) -> Result<Options, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Options::new());
    }
    let data = Object::assign(&Object::new(), options.unchecked_ref());
    let mut query = None;
    let mut to_html = None;
    let mut plugins = None;
    for key in CALLBACK_KEYS {
        let js_key = JsValue::from_str(key);
        let value = Reflect::get(&data, &js_key)?;
        if value.is_undefined() || value.is_string() {
            continue;
        }
        Reflect::delete_property(&data, &js_key)?;
        match key {
            "query" => {
                query = value
                    .dyn_into::<Function>()
                    .ok()
                    .map(|f| js_query(f, errors.clone()));
            }
            "toHtml" => {
                to_html = value
                    .dyn_into::<Function>()
                    .ok()
                    .map(|f| js_formatter(f, errors.clone()));
            }
            _ => {
                let list: Vec<Rc<dyn Plugin>> = Array::from(&value)
                    .iter()
                    .map(|object| js_plugin(object, errors))
                    .collect();
                plugins = Some(list);
            }
        }
    }

    let mut parsed =
        options_from_json(stringify(&data)?.as_deref()).map_err(|e| config_error(&e))?;
    if query.is_some() {
        parsed.query = query;
    }
    if to_html.is_some() {
        parsed.to_html = to_html;
    }
    if plugins.is_some() {
        parsed.plugins = plugins;
    }
    Ok(parsed)
}

/// Autocomplete bound to an `<input>` and a display element.
#[wasm_bindgen]
pub struct Typeahead {
    widget: Rc<RefCell<Widget>>,
    errors: Errors,
    input: HtmlInputElement,
    display: WebDisplay,
    // Keeps the page-wide click listener installed while this widget lives.
    _clicks: Rc<DocumentClicks>,
    listeners: Vec<(&'static str, Listener)>,
}

#[wasm_bindgen]
impl Typeahead {
    /// Bind `input` and `display` with optional options.
    #[wasm_bindgen(constructor)]
    pub fn new(
        input: HtmlInputElement,
        display: HtmlElement,
        options: JsValue,
    ) -> Result<Typeahead, JsValue> {
        let errors = Errors::new();
        let options = options_from_js(&options, &errors)?;
        let document = input
            .owner_document()
            .ok_or_else(|| JsError::new("input element has no owner document"))?;
        let clicks = DocumentClicks::shared(&document)?;

        let web_display = WebDisplay::new(display);
        let widget = Rc::new(RefCell::new(Autocomplete::new(
            WebInput::new(input.clone()),
            web_display.clone(),
            options,
        )));
        // A plugin hook may have thrown during registration.
        if let Some(err) = errors.take() {
            return Err(err);
        }
        widget.borrow_mut().attach_document(clicks.channel());

        let weak = Rc::downgrade(&widget);
        let dispatch_errors = errors.clone();
        let dispatch: ItemDispatch = Rc::new(move |index| match weak.upgrade() {
            Some(widget) => run(&*widget, &dispatch_errors, busy, |w| {
                w.handle(Event::ItemClick(index));
            }),
            None => Ok(()),
        });
        web_display.set_dispatch(Some(dispatch));

        let mut this = Self {
            widget,
            errors,
            input,
            display: web_display,
            _clicks: clicks,
            listeners: Vec::new(),
        };
        this.listen("input", |_| Some(Event::Input))?;
        this.listen("focus", |_| Some(Event::Focus))?;
        this.listen("keydown", |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| Event::key(key.key_code()))
        })?;
        Ok(this)
    }

    /// Re-run the filter against the input's current value.
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.call(Widget::refresh)
    }

    /// Replace the dataset with an array of records.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&self, data: JsValue) -> Result<(), JsValue> {
        let json = stringify(&data)?.unwrap_or_else(|| "[]".to_owned());
        let records = dataset_from_json(&json).map_err(|e| config_error(&e))?;
        self.call(|w| w.set_data(records))
    }

    /// Use a `(record, text) => boolean` predicate.
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&self, query: Function) -> Result<(), JsValue> {
        let query = js_query(query, self.errors.clone());
        self.call(|w| w.reconfigure(Options::new().query(query)))
    }

    /// Use a `(record) => string` formatter.
    #[wasm_bindgen(js_name = setFormatter)]
    pub fn set_formatter(&self, formatter: Function) -> Result<(), JsValue> {
        let formatter = js_formatter(formatter, self.errors.clone());
        self.call(|w| w.reconfigure(Options::new().to_html(formatter)))
    }

    /// Merge more options over the current configuration.
    pub fn reconfigure(&self, options: JsValue) -> Result<(), JsValue> {
        let options = options_from_js(&options, &self.errors)?;
        self.call(|w| w.reconfigure(options))
    }

    /// Register a `{ name, onRegister? }` plugin object.
    #[wasm_bindgen(js_name = addPlugin)]
    pub fn add_plugin(&self, plugin: JsValue) -> Result<(), JsValue> {
        let plugin = js_plugin(plugin, &self.errors);
        self.call(|w| w.add_plugin(plugin))
    }

    /// Index of the highlighted item, if any.
    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> Option<u32> {
        let index = self.widget.try_borrow().ok()?.selection().index()?;
        u32::try_from(index).ok()
    }

    /// Number of items currently rendered.
    #[wasm_bindgen(js_name = renderedLength)]
    pub fn rendered_length(&self) -> u32 {
        u32::try_from(self.display.item_count()).unwrap_or(u32::MAX)
    }

    /// Unhook every listener. The widget stops reacting to events.
    pub fn detach(&mut self) {
        for (kind, listener) in self.listeners.drain(..) {
            let _ = self
                .input
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref());
        }
        self.display.set_dispatch(None);
        match self.widget.try_borrow_mut() {
            Ok(mut widget) => widget.detach(),
            Err(_) => tracing::warn!("detach requested while the widget is busy"),
        }
    }
}

impl Typeahead {
    fn call<R>(&self, call: impl FnOnce(&mut Widget) -> R) -> Result<R, JsValue> {
        run(&*self.widget, &self.errors, busy, call)
    }

    fn listen(
        &mut self,
        kind: &'static str,
        translate: impl Fn(&web_sys::Event) -> Option<Event> + 'static,
    ) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.widget);
        let errors = self.errors.clone();
        let listener = Listener::new(move |event: web_sys::Event| {
            let Some(widget) = weak.upgrade() else {
                return Ok(());
            };
            let Some(translated) = translate(&event) else {
                return Ok(());
            };
            if run(&*widget, &errors, busy, |w| w.handle(translated))?.prevent_default() {
                event.prevent_default();
            }
            Ok(())
        });
        self.input
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        self.listeners.push((kind, listener));
        Ok(())
    }
}

impl Drop for Typeahead {
    fn drop(&mut self) {
        self.detach();
    }
}
