#![forbid(unsafe_code)]

//! Markup rendering for matched records.
//!
//! Each matched record goes through a [`Formatter`] to produce one markup
//! fragment; fragments are joined with `"\n"` and written into the display
//! surface in one replacement.
//!
//! # Rendered item contract
//!
//! Fragments must carry the value to commit in a
//! [`VALUE_ATTRIBUTE`](typeahead_core::dom::VALUE_ATTRIBUTE) attribute. The
//! built-in [`classic`] formatter does:
//!
//! ```text
//! <div class="typeahead-card" data-value="Volkswagen"><span class="typeahead-card__label">Volkswagen</span></div>
//! ```

use std::fmt;
use std::rc::Rc;

use typeahead_core::dom::DisplaySurface;
use typeahead_core::record::Record;

/// Class on the outer element of a classic card.
pub const CARD_CLASS: &str = "typeahead-card";

/// Class on the label inside a classic card.
pub const CARD_LABEL_CLASS: &str = "typeahead-card__label";

/// Separator between rendered fragments.
pub const FRAGMENT_SEPARATOR: &str = "\n";

/// Signature of a formatter: `record -> markup fragment`.
pub type FormatFn = dyn Fn(&Record) -> String;

/// Maps a matched record to a markup fragment.
#[derive(Clone, Default)]
pub enum Formatter {
    /// The built-in labeled card, see [`classic`].
    #[default]
    Classic,
    /// Caller-supplied formatter.
    Custom(Rc<FormatFn>),
}

impl Formatter {
    /// Wrap a closure as a custom formatter.
    pub fn custom(format: impl Fn(&Record) -> String + 'static) -> Self {
        Self::Custom(Rc::new(format))
    }

    /// Resolve a built-in formatter by name (`"classic"`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::Classic),
            _ => None,
        }
    }

    /// Short name, `"custom"` for caller formatters.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Custom(_) => "custom",
        }
    }

    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Classic)
    }

    /// Format one record.
    ///
    /// Panics raised by a custom formatter propagate to the caller.
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        match self {
            Self::Classic => classic(record),
            Self::Custom(format) => format(record),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Escape `text` for element content and quoted attributes alike.
///
/// Line breaks become character references so one record always renders as
/// one line of markup.
fn escape(text: &str) -> String {
    v_htmlescape::escape(text)
        .to_string()
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}

/// The built-in card formatter.
#[must_use]
pub fn classic(record: &Record) -> String {
    let escaped = escape(&record.text());
    format!(
        r#"<div class="{CARD_CLASS}" data-value="{escaped}"><span class="{CARD_LABEL_CLASS}">{escaped}</span></div>"#
    )
}

/// Format every record and join the fragments.
#[must_use]
pub fn render(records: &[&Record], formatter: &Formatter) -> String {
    records
        .iter()
        .map(|record| formatter.format(record))
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Render `records` and replace the surface's content with the result.
///
/// Returns the number of items the surface reports after replacement.
pub fn render_into<D: DisplaySurface>(
    display: &D,
    records: &[&Record],
    formatter: &Formatter,
) -> usize {
    let _span = tracing::debug_span!(
        "render",
        formatter = formatter.name(),
        records = records.len()
    )
    .entered();

    let markup = render(records, formatter);
    display.replace_markup(&markup);
    display.item_count()
}

/// Mark exactly the item at `index` as selected, clearing every other marker.
pub fn apply_highlight<D: DisplaySurface>(display: &D, index: Option<usize>) {
    for i in 0..display.item_count() {
        display.set_item_selected(i, Some(i) == index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typeahead_core::record::dataset;
    use typeahead_harness::dom::MemoryDisplay;

    #[test]
    fn classic_card_shape() {
        assert_eq!(
            classic(&Record::from("Volkswagen")),
            r#"<div class="typeahead-card" data-value="Volkswagen"><span class="typeahead-card__label">Volkswagen</span></div>"#
        );
    }

    #[test]
    fn classic_escapes_value() {
        let html = classic(&Record::from(r#"A "quoted" <tag>"#));
        assert!(html.contains(r#"data-value="A &quot;quoted&quot; &lt;tag&gt;""#));
        assert!(html.contains(r#">A &quot;quoted&quot; &lt;tag&gt;</span>"#));
    }

    #[test]
    fn classic_escapes_apostrophe_and_ampersand() {
        let html = classic(&Record::from("Rock 'n' Roll & Co"));
        assert!(html.contains(r#"data-value="Rock &#x27;n&#x27; Roll &amp; Co""#));
    }

    #[test]
    fn classic_keeps_line_breaks_inside_one_fragment() {
        let html = classic(&Record::from("A\nB\r\nC"));
        assert!(!html.contains('\n'));
        assert!(!html.contains('\r'));
        assert!(html.contains(r#"data-value="A&#10;B&#13;&#10;C""#));
    }

    #[test]
    fn multiline_record_is_one_item() {
        let display = MemoryDisplay::new();
        let data = dataset(["A\nB", "C"]);
        let all: Vec<&Record> = data.iter().collect();
        assert_eq!(render_into(&display, &all, &Formatter::Classic), 2);
        assert_eq!(display.item_value(0).as_deref(), Some("A\nB"));
    }

    #[test]
    fn classic_object_uses_json_text() {
        let html = classic(&Record::from(json!({"a": 1})));
        assert!(html.contains(r#"data-value="{&quot;a&quot;:1}""#));
    }

    #[test]
    fn render_joins_with_newline() {
        let data = dataset(["a", "b"]);
        let refs: Vec<&Record> = data.iter().collect();
        let f = Formatter::custom(|r| format!("<li data-value=\"{r}\">{r}</li>"));
        assert_eq!(
            render(&refs, &f),
            "<li data-value=\"a\">a</li>\n<li data-value=\"b\">b</li>"
        );
    }

    #[test]
    fn render_empty_is_empty() {
        assert_eq!(render(&[], &Formatter::Classic), "");
    }

    #[test]
    fn render_into_replaces_wholesale() {
        let display = MemoryDisplay::new();
        let data = dataset(["Volkswagen", "Mercedes", "Daimler"]);
        let all: Vec<&Record> = data.iter().collect();
        assert_eq!(render_into(&display, &all, &Formatter::Classic), 3);

        let one = vec![&data[1]];
        assert_eq!(render_into(&display, &one, &Formatter::Classic), 1);
        assert_eq!(display.item_value(0).as_deref(), Some("Mercedes"));
    }

    #[test]
    fn apply_highlight_keeps_single_marker() {
        let display = MemoryDisplay::new();
        let data = dataset(["a", "b", "c"]);
        let all: Vec<&Record> = data.iter().collect();
        render_into(&display, &all, &Formatter::Classic);

        apply_highlight(&display, Some(0));
        apply_highlight(&display, Some(2));
        assert_eq!(display.selected_indices(), vec![2]);

        apply_highlight(&display, None);
        assert!(display.selected_indices().is_empty());
    }

    #[test]
    fn formatter_names() {
        assert!(Formatter::by_name("classic").is_some_and(|f| f.is_builtin()));
        assert!(Formatter::by_name("card").is_none());
        assert_eq!(format!("{:?}", Formatter::custom(|_| String::new())), "custom");
    }
}
