#![forbid(unsafe_code)]

//! The autocomplete widget.
//!
//! [`Autocomplete`] binds an input element and a display surface together.
//! The host forwards [`Event`]s through [`handle`](Autocomplete::handle); the
//! widget sequences the filter pass, the render pass, and the highlight state
//! machine, and applies commits back to the input.
//!
//! # Example
//!
//! ```ignore
//! let mut widget = Autocomplete::new(input.clone(), display.clone(), Options::new());
//! input.set_value("vo");
//! widget.handle(Event::Input);
//! widget.handle(NavKey::Down.into());
//! widget.handle(NavKey::Enter.into());
//! assert_eq!(input.value(), "Volkswagen");
//! ```
//!
//! # Event routing
//!
//! | Event | Effect | Returns |
//! |-------|--------|---------|
//! | `Input` | min-length gate, then filter and render | `Ignored` |
//! | `KeyDown` (down/up/tab/enter) | move highlight or commit | `Consumed` |
//! | `KeyDown` (other) | none | `Ignored` |
//! | `Focus` | show the display | `Ignored` |
//! | `ItemClick(i)` | highlight `i`, then commit | `Consumed` |
//!
//! Document clicks arrive through the [`ClickChannel`] passed to
//! [`attach_document`](Autocomplete::attach_document) and hide the display
//! when they land outside both bound elements. The subscription only exists
//! while `close_on_click_away` is set, and is released on
//! [`detach`](Autocomplete::detach), on reconfiguration that turns the flag
//! off, or when the widget is dropped.

use std::fmt;
use std::rc::Rc;

use typeahead_core::advisory::{Advisory, AdvisorySink, RECOMMENDED_MIN_CHAR, TracingAdvisor};
use typeahead_core::document::{ClickChannel, Subscription};
use typeahead_core::dom::{DisplaySurface, Element, InputElement};
use typeahead_core::event::{Event, Handled, NavKey};
use typeahead_core::id::WidgetId;
use typeahead_core::plugin::{Plugin, PluginRegistry};
use typeahead_core::record::Record;
use typeahead_text::filter;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{Configuration, Options};
use crate::render::{apply_highlight, render_into};
use crate::selection::{Selection, SelectionController, Transition};

/// Whether `text` is long enough to trigger a filter pass.
///
/// Length is counted in grapheme clusters after trimming surrounding
/// whitespace. `min_char == 0` always passes.
#[must_use]
pub fn passes_min_char(text: &str, min_char: usize) -> bool {
    min_char == 0 || text.trim().graphemes(true).count() >= min_char
}

/// Autocomplete bound to an input element and a display surface.
pub struct Autocomplete<I, D>
where
    I: InputElement,
    D: DisplaySurface<Node = I::Node>,
{
    id: WidgetId,
    input: I,
    display: D,
    config: Configuration,
    selection: SelectionController,
    plugins: PluginRegistry,
    advisor: Rc<dyn AdvisorySink>,
    document: Option<ClickChannel<I::Node>>,
    click_away: Option<Subscription>,
}

impl<I, D> fmt::Debug for Autocomplete<I, D>
where
    I: InputElement,
    D: DisplaySurface<Node = I::Node>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("plugins", &self.plugins)
            .field("click_away", &self.click_away.is_some())
            .finish()
    }
}

impl<I, D> Autocomplete<I, D>
where
    I: InputElement + Clone + 'static,
    D: DisplaySurface<Node = I::Node> + Clone + 'static,
    I::Node: 'static,
{
    /// Bind `input` and `display`, merging `options` over the defaults.
    ///
    /// Advisories go to a [`TracingAdvisor`].
    pub fn new(input: I, display: D, options: Options) -> Self {
        Self::with_advisor(input, display, options, Rc::new(TracingAdvisor))
    }

    /// Like [`new`](Self::new), with a caller-chosen advisory sink.
    pub fn with_advisor(
        input: I,
        display: D,
        options: Options,
        advisor: Rc<dyn AdvisorySink>,
    ) -> Self {
        let mut widget = Self {
            id: WidgetId::next(),
            input,
            display,
            config: Configuration::from_options(options),
            selection: SelectionController::new(),
            plugins: PluginRegistry::new(),
            advisor,
            document: None,
            click_away: None,
        };
        let _span = tracing::debug_span!("autocomplete_bind", widget = %widget.id).entered();

        widget.register_configured_plugins();
        widget.emit_advisories();
        tracing::debug!(config = ?widget.config, "autocomplete bound");
        widget
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.state()
    }

    /// Number of items the display currently shows.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.display.item_count()
    }

    #[must_use]
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Whether a document click subscription is currently held.
    #[must_use]
    pub fn is_listening_for_clicks(&self) -> bool {
        self.click_away.is_some()
    }

    // --- Event Handling ---

    /// Route one host event.
    ///
    /// The host must prevent the browser's default action when this returns
    /// [`Handled::Consumed`].
    pub fn handle(&mut self, event: Event) -> Handled {
        match event {
            Event::Input => {
                self.refresh();
                Handled::Ignored
            }
            Event::Focus => {
                self.display.set_visible(true);
                Handled::Ignored
            }
            Event::KeyDown(key) => match key.nav() {
                Some(nav) => {
                    self.navigate(nav);
                    Handled::Consumed
                }
                None => Handled::Ignored,
            },
            Event::ItemClick(index) => {
                self.click_item(index);
                Handled::Consumed
            }
        }
    }

    /// Run the filter pipeline against the input's current value.
    ///
    /// Below the minimum length the display is cleared. Otherwise the matches
    /// replace the display content, the display is shown again if a click
    /// away had hidden it, and the highlight returns to idle.
    pub fn refresh(&mut self) {
        let text = self.input.value();
        if !passes_min_char(&text, self.config.min_char) {
            tracing::trace!(widget = %self.id, "input below min_char, clearing");
            self.display.clear();
            self.selection.reset(0);
            return;
        }

        let _span = tracing::debug_span!(
            "refresh",
            widget = %self.id,
            query = self.config.query.name()
        )
        .entered();

        let hits = filter(&self.config.data, &text, &self.config.query);
        let rendered = render_into(&self.display, &hits, &self.config.to_html);
        if rendered != hits.len() {
            tracing::warn!(
                widget = %self.id,
                matches = hits.len(),
                rendered,
                "formatter output does not map one item per match"
            );
        }
        self.display.set_visible(true);
        self.selection.reset(rendered);
    }

    /// Apply a navigation key to the highlight.
    pub fn navigate(&mut self, key: NavKey) {
        match self.selection.navigate(key) {
            Transition::Unchanged => {}
            Transition::Moved { to } => apply_highlight(&self.display, Some(to)),
            Transition::Commit(index) => self.commit(index),
        }
    }

    fn click_item(&mut self, index: usize) {
        match self.selection.highlight(index) {
            Transition::Moved { to } => {
                apply_highlight(&self.display, Some(to));
                self.navigate(NavKey::Enter);
            }
            _ => tracing::debug!(widget = %self.id, index, "click outside rendered list"),
        }
    }

    /// Copy the item's value into the input and clear the display.
    fn commit(&mut self, index: usize) {
        match self.display.item_value(index) {
            Some(value) => {
                self.input.set_value(&value);
                tracing::debug!(widget = %self.id, index, value = %value, "committed");
            }
            None => {
                tracing::warn!(widget = %self.id, index, "rendered item has no data-value");
            }
        }
        self.display.clear();
        self.selection.reset(0);
    }

    // --- Configuration ---

    /// Replace the dataset. The display is left as is until the next input.
    ///
    /// Only the record advisory is re-checked; the others do not depend on
    /// the data.
    pub fn set_data(&mut self, data: Vec<Record>) {
        self.config.data = data;
        tracing::debug!(widget = %self.id, records = self.config.data.len(), "dataset replaced");
        if self.config.show_warnings {
            self.advise_records();
        }
    }

    /// Register one more plugin.
    ///
    /// A plugin whose name is already registered replaces the earlier one.
    pub fn add_plugin(&mut self, plugin: Rc<dyn Plugin>) {
        self.plugins.register(self.id, plugin);
        self.sync_plugin_list();
    }

    /// Merge `options` over the current configuration.
    ///
    /// A supplied plugin list replaces the registered plugins, advisories are
    /// re-evaluated, and the document subscription follows
    /// `close_on_click_away`.
    pub fn reconfigure(&mut self, options: Options) {
        let replaces_plugins = options.plugins.is_some();
        let current = std::mem::take(&mut self.config);
        self.config = current.merged(options);
        if replaces_plugins {
            self.plugins = PluginRegistry::new();
            self.register_configured_plugins();
        }
        self.emit_advisories();
        self.sync_click_away();
    }

    fn register_configured_plugins(&mut self) {
        for plugin in std::mem::take(&mut self.config.plugins) {
            self.plugins.register(self.id, plugin);
        }
        self.sync_plugin_list();
    }

    // Configured plugins always mirror the registry, one entry per name.
    fn sync_plugin_list(&mut self) {
        self.config.plugins = self.plugins.iter().cloned().collect();
    }

    /// Evaluate every advisory against the current configuration.
    ///
    /// Silent when `show_warnings` is off.
    pub fn emit_advisories(&self) {
        if !self.config.show_warnings {
            return;
        }
        self.advise_records();
        self.advisor
            .advise(&Advisory::CustomPredicate, !self.config.query.is_builtin());
        self.advisor.advise(
            &Advisory::MinCharOutOfRange {
                min_char: self.config.min_char,
            },
            !RECOMMENDED_MIN_CHAR.contains(&self.config.min_char),
        );
    }

    fn advise_records(&self) {
        let non_primitive = self.config.non_primitive_count();
        let builtin =
            self.config.query.is_builtin() || self.config.to_html.is_builtin();
        self.advisor.advise(
            &Advisory::NonPrimitiveRecords {
                count: non_primitive,
            },
            non_primitive > 0 && builtin,
        );
    }

    // --- Document ---

    /// Use `channel` for click-away dismissal.
    ///
    /// Replaces any earlier channel. A listener is only registered while
    /// `close_on_click_away` is set.
    pub fn attach_document(&mut self, channel: &ClickChannel<I::Node>) {
        self.document = Some(channel.clone());
        self.sync_click_away();
    }

    /// Release the document subscription and forget the channel.
    pub fn detach(&mut self) {
        if self.click_away.take().is_some() {
            tracing::debug!(widget = %self.id, "click-away listener released");
        }
        self.document = None;
    }

    fn sync_click_away(&mut self) {
        // Release first so a re-attach never holds two listeners.
        if self.click_away.take().is_some() {
            tracing::debug!(widget = %self.id, "click-away listener released");
        }
        if !self.config.close_on_click_away {
            return;
        }
        let Some(channel) = &self.document else {
            return;
        };

        let input = self.input.clone();
        let display = self.display.clone();
        let subscription = channel.subscribe(move |target: &I::Node| {
            if !input.contains_node(target) && !display.contains_node(target) {
                display.set_visible(false);
            }
        });
        tracing::debug!(
            widget = %self.id,
            subscription = subscription.id(),
            "click-away listener registered"
        );
        self.click_away = Some(subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::Cell;
    use tracing_test::traced_test;
    use typeahead_core::advisory::RecordingAdvisor;
    use typeahead_core::record::dataset;
    use typeahead_harness::dom::{MemoryDisplay, MemoryDocument, MemoryInput, NodeId};
    use typeahead_text::Query;

    use crate::render::Formatter;

    type Widget = Autocomplete<MemoryInput, MemoryDisplay>;

    fn bind(options: Options) -> (Widget, MemoryInput, MemoryDisplay) {
        let input = MemoryInput::new();
        let display = MemoryDisplay::new();
        let widget = Autocomplete::with_advisor(
            input.clone(),
            display.clone(),
            options,
            Rc::new(RecordingAdvisor::new()),
        );
        (widget, input, display)
    }

    fn type_text(widget: &mut Widget, input: &MemoryInput, text: &str) {
        input.set_value(text);
        widget.handle(Event::Input);
    }

    fn values(display: &MemoryDisplay) -> Vec<String> {
        (0..display.item_count())
            .filter_map(|i| display.item_value(i))
            .collect()
    }

    // ── min_char gate ───────────────────────────────────────────────

    #[test]
    fn gate_counts_trimmed_graphemes() {
        assert!(passes_min_char("vo", 2));
        assert!(!passes_min_char("  v  ", 2));
        assert!(passes_min_char("e\u{301}x", 2));
        assert!(!passes_min_char("e\u{301}", 2));
    }

    #[test]
    fn gate_zero_always_passes() {
        assert!(passes_min_char("", 0));
        assert!(passes_min_char("   ", 0));
    }

    #[test]
    fn short_input_clears_display() {
        let (mut w, input, display) = bind(Options::new().min_char(3));
        type_text(&mut w, &input, "mer");
        assert_eq!(display.item_count(), 1);

        type_text(&mut w, &input, "me");
        assert_eq!(display.item_count(), 0);
        assert_eq!(w.selection(), Selection::Idle);
    }

    #[test]
    fn min_char_zero_renders_everything_on_empty_input() {
        let (mut w, input, display) = bind(Options::new().min_char(0));
        type_text(&mut w, &input, "");
        assert_eq!(values(&display), vec!["Volkswagen", "Mercedes", "Daimler"]);
    }

    // ── pipeline ────────────────────────────────────────────────────

    #[test]
    fn scenario_vo_down_enter() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "vo");
        assert_eq!(values(&display), vec!["Volkswagen"]);

        assert_eq!(w.handle(NavKey::Down.into()), Handled::Consumed);
        assert_eq!(display.selected_indices(), vec![0]);

        assert_eq!(w.handle(NavKey::Enter.into()), Handled::Consumed);
        assert_eq!(input.value(), "Volkswagen");
        assert_eq!(display.item_count(), 0);
        assert_eq!(w.selection(), Selection::Idle);
    }

    #[test]
    fn input_event_is_not_consumed() {
        let (mut w, input, _display) = bind(Options::new());
        input.set_value("m");
        assert_eq!(w.handle(Event::Input), Handled::Ignored);
    }

    #[test]
    fn fresh_filter_pass_resets_highlight() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        w.handle(NavKey::Down.into());
        w.handle(NavKey::Down.into());
        assert_eq!(w.selection(), Selection::Highlighted(1));

        type_text(&mut w, &input, "er");
        assert_eq!(w.selection(), Selection::Idle);
        assert!(display.selected_indices().is_empty());
    }

    #[test]
    fn fuzzy_query_from_options() {
        let (mut w, input, display) = bind(Options::new().query(Query::Fuzzy));
        type_text(&mut w, &input, "m c s");
        assert_eq!(values(&display), vec!["Mercedes"]);
    }

    #[test]
    fn custom_formatter_items_are_committed() {
        let formatter = Formatter::custom(|r| format!(r#"<li data-value="{r}">{r}!</li>"#));
        let (mut w, input, display) = bind(Options::new().to_html(formatter));
        type_text(&mut w, &input, "dai");
        assert_eq!(display.item_count(), 1);
        w.handle(NavKey::Tab.into());
        w.handle(NavKey::Enter.into());
        assert_eq!(input.value(), "Daimler");
    }

    #[test]
    #[traced_test]
    fn item_without_value_clears_display_only() {
        let formatter = Formatter::custom(|r| format!("<li>{r}</li>"));
        let (mut w, input, display) = bind(Options::new().to_html(formatter));
        type_text(&mut w, &input, "dai");
        w.handle(NavKey::Down.into());
        w.handle(NavKey::Enter.into());
        assert_eq!(input.value(), "dai");
        assert_eq!(display.item_count(), 0);
        assert!(logs_contain("rendered item has no data-value"));
    }

    // ── keys ────────────────────────────────────────────────────────

    #[test]
    fn other_keys_pass_through() {
        let (mut w, input, _display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        assert_eq!(w.handle(Event::key(65)), Handled::Ignored);
        assert_eq!(w.selection(), Selection::Idle);
    }

    #[test]
    fn enter_when_idle_keeps_display() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        assert_eq!(w.handle(NavKey::Enter.into()), Handled::Consumed);
        assert_eq!(display.item_count(), 3);
        assert_eq!(input.value(), "e");
    }

    #[test]
    fn up_at_first_item_stays() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        w.handle(NavKey::Down.into());
        w.handle(NavKey::Up.into());
        w.handle(NavKey::Up.into());
        assert_eq!(w.selection(), Selection::Highlighted(0));
        assert_eq!(display.selected_indices(), vec![0]);
    }

    #[test]
    fn keys_with_nothing_rendered_are_consumed_noops() {
        let (mut w, _input, display) = bind(Options::new());
        assert_eq!(w.handle(NavKey::Down.into()), Handled::Consumed);
        assert_eq!(w.selection(), Selection::Idle);
        assert!(display.selected_indices().is_empty());
    }

    // ── focus and clicks ────────────────────────────────────────────

    #[test]
    fn focus_shows_display() {
        let (mut w, _input, display) = bind(Options::new());
        display.set_visible(false);
        assert_eq!(w.handle(Event::Focus), Handled::Ignored);
        assert!(display.visible());
    }

    #[test]
    fn item_click_commits() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        assert_eq!(w.handle(Event::ItemClick(1)), Handled::Consumed);
        assert_eq!(input.value(), "Mercedes");
        assert_eq!(display.item_count(), 0);
    }

    #[test]
    fn item_click_out_of_range_is_ignored() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        w.handle(Event::ItemClick(7));
        assert_eq!(input.value(), "e");
        assert_eq!(display.item_count(), 3);
    }

    #[test]
    fn click_away_hides_display() {
        let document = MemoryDocument::new();
        let (mut w, input, display) = bind(Options::new().close_on_click_away(true));
        w.attach_document(document.channel());
        type_text(&mut w, &input, "e");

        document.click(&input.node());
        assert!(display.visible());
        document.click(&display.node());
        assert!(display.visible());
        if let Some(item) = display.item_node(0) {
            document.click(&item);
        }
        assert!(display.visible());

        document.click(&NodeId::fresh());
        assert!(!display.visible());
    }

    #[test]
    fn click_away_off_by_default() {
        let document = MemoryDocument::new();
        let (mut w, _input, display) = bind(Options::new());
        w.attach_document(document.channel());
        assert!(!w.is_listening_for_clicks());
        assert_eq!(document.listener_count(), 0);
        document.click(&NodeId::fresh());
        assert!(display.visible());
    }

    #[test]
    fn reattach_replaces_subscription() {
        let document = MemoryDocument::new();
        let (mut w, _input, _display) = bind(Options::new().close_on_click_away(true));
        w.attach_document(document.channel());
        w.attach_document(document.channel());
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn detach_and_drop_release_listener() {
        let document = MemoryDocument::new();
        let (mut w, _input, _display) = bind(Options::new().close_on_click_away(true));
        w.attach_document(document.channel());
        w.detach();
        assert_eq!(document.listener_count(), 0);

        w.attach_document(document.channel());
        assert_eq!(document.listener_count(), 1);
        drop(w);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn reconfigure_toggles_subscription() {
        let document = MemoryDocument::new();
        let (mut w, _input, _display) = bind(Options::new());
        w.attach_document(document.channel());
        assert_eq!(document.listener_count(), 0);

        w.reconfigure(Options::new().close_on_click_away(true));
        assert_eq!(document.listener_count(), 1);
        assert_eq!(w.config().min_char, 1);

        w.reconfigure(Options::new().close_on_click_away(false));
        assert_eq!(document.listener_count(), 0);
    }

    // ── data, plugins, advisories ───────────────────────────────────

    #[test]
    fn set_data_applies_on_next_input() {
        let (mut w, input, display) = bind(Options::new());
        type_text(&mut w, &input, "e");
        w.set_data(dataset(["Peugeot", "Renault"]));
        assert_eq!(display.item_count(), 3);
        assert_eq!(values(&display), vec!["Volkswagen", "Mercedes", "Daimler"]);

        type_text(&mut w, &input, "eu");
        assert_eq!(values(&display), vec!["Peugeot"]);
    }

    struct Counter {
        name: &'static str,
        hits: Cell<u32>,
    }

    impl Plugin for Counter {
        fn name(&self) -> &str {
            self.name
        }

        fn on_register(&self, _widget: WidgetId) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[test]
    fn plugins_register_at_construction_and_later() {
        let first = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        let (mut w, _input, _display) = bind(Options::new().plugin(first.clone()));
        assert_eq!(first.hits.get(), 1);

        let second = Rc::new(Counter {
            name: "recent",
            hits: Cell::new(0),
        });
        w.add_plugin(second.clone());
        assert_eq!(second.hits.get(), 1);
        assert_eq!(w.plugins().len(), 2);
        assert_eq!(w.config().plugins.len(), 2);
    }

    #[test]
    fn add_plugin_with_taken_name_replaces() {
        let first = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        let (mut w, _input, _display) = bind(Options::new().plugin(first.clone()));

        let again = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        w.add_plugin(again.clone());
        assert_eq!(again.hits.get(), 1);
        assert_eq!(w.plugins().len(), 1);
        assert_eq!(w.config().plugins.len(), 1);
        assert!(Rc::ptr_eq(&w.config().plugins[0], &(again as Rc<dyn Plugin>)));
    }

    #[test]
    fn duplicate_names_in_options_collapse() {
        let a = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        let b = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        let (w, _input, _display) = bind(Options::new().plugin(a).plugin(b));
        assert_eq!(w.plugins().len(), 1);
        assert_eq!(w.config().plugins.len(), 1);
    }

    #[test]
    fn reconfigure_plugins_replaces_registry() {
        let old = Rc::new(Counter {
            name: "history",
            hits: Cell::new(0),
        });
        let (mut w, _input, _display) = bind(Options::new().plugin(old));

        let new = Rc::new(Counter {
            name: "recent",
            hits: Cell::new(0),
        });
        w.reconfigure(Options::new().plugin(new.clone()));
        assert_eq!(new.hits.get(), 1);
        assert!(w.plugins().get("history").is_none());
        assert!(w.plugins().get("recent").is_some());
        let names: Vec<&str> = w.config().plugins.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["recent"]);

        w.reconfigure(Options::new().min_char(2));
        assert_eq!(w.plugins().len(), 1);
        assert_eq!(new.hits.get(), 1);
    }

    fn advisories_for(options: Options) -> Vec<Advisory> {
        let sink = Rc::new(RecordingAdvisor::new());
        let _w = Autocomplete::with_advisor(
            MemoryInput::new(),
            MemoryDisplay::new(),
            options,
            sink.clone(),
        );
        sink.advisories()
    }

    #[test]
    fn defaults_raise_no_advisories() {
        assert!(advisories_for(Options::new()).is_empty());
    }

    #[test]
    fn non_primitive_records_with_defaults_advise() {
        let got = advisories_for(Options::new().data([json!({"make": "Volvo"}), json!("Saab")]));
        assert_eq!(got, vec![Advisory::NonPrimitiveRecords { count: 1 }]);
    }

    #[test]
    fn custom_predicate_advises() {
        let got = advisories_for(Options::new().query(|_: &Record, _: &str| true));
        assert_eq!(got, vec![Advisory::CustomPredicate]);
    }

    #[test]
    fn non_primitive_with_all_custom_callbacks_is_quiet_about_records() {
        let got = advisories_for(
            Options::new()
                .data([json!({"make": "Volvo"})])
                .query(|_: &Record, _: &str| true)
                .to_html(Formatter::custom(|_| String::new())),
        );
        assert_eq!(got, vec![Advisory::CustomPredicate]);
    }

    #[test]
    fn min_char_out_of_range_advises() {
        assert_eq!(
            advisories_for(Options::new().min_char(0)),
            vec![Advisory::MinCharOutOfRange { min_char: 0 }]
        );
        assert_eq!(
            advisories_for(Options::new().min_char(6)),
            vec![Advisory::MinCharOutOfRange { min_char: 6 }]
        );
    }

    #[test]
    fn set_data_rechecks_only_records() {
        let sink = Rc::new(RecordingAdvisor::new());
        let mut w = Autocomplete::with_advisor(
            MemoryInput::new(),
            MemoryDisplay::new(),
            Options::new().min_char(0).query(|_: &Record, _: &str| true),
            sink.clone(),
        );
        sink.clear();

        w.set_data(dataset(["Peugeot"]));
        assert!(sink.advisories().is_empty());

        w.set_data(vec![Record::from(json!({"make": "Volvo"}))]);
        assert_eq!(
            sink.advisories(),
            vec![Advisory::NonPrimitiveRecords { count: 1 }]
        );
    }

    #[test]
    fn show_warnings_false_suppresses_everything() {
        let got = advisories_for(
            Options::new()
                .min_char(0)
                .query(|_: &Record, _: &str| true)
                .show_warnings(false),
        );
        assert!(got.is_empty());
    }

    #[test]
    #[traced_test]
    fn default_sink_logs_warnings() {
        let _w = Autocomplete::new(
            MemoryInput::new(),
            MemoryDisplay::new(),
            Options::new().min_char(9),
        );
        assert!(logs_contain("min_char = 9 is outside the recommended range"));
    }

    #[test]
    fn debug_summarizes_state() {
        let (w, _input, _display) = bind(Options::new());
        let dbg = format!("{w:?}");
        assert!(dbg.contains("Autocomplete"));
        assert!(dbg.contains("click_away: false"));
    }
}
