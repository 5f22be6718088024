#![forbid(unsafe_code)]

//! Widget configuration: defaults, per-instance options, option documents.
//!
//! A [`Configuration`] starts from the `DEFAULT_*` constants. [`Options`]
//! carries only the fields a caller wants to change; merging is shallow and
//! key-by-key, so a supplied `data` replaces the default dataset wholesale.
//!
//! Options can also be loaded from a JSON (or, with the `toml` feature, TOML)
//! document. Documents name predicates and formatters instead of carrying
//! code:
//!
//! ```
//! use typeahead_widgets::config::{Configuration, Options};
//!
//! let options = Options::from_json(r#"{"query": "fuzzy", "minChar": 2}"#)?;
//! let config = Configuration::from_options(options);
//! assert_eq!(config.min_char, 2);
//! assert_eq!(config.query.name(), "fuzzy");
//! # Ok::<(), typeahead_widgets::config::ConfigError>(())
//! ```

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use typeahead_core::plugin::Plugin;
use typeahead_core::record::{Record, dataset};
use typeahead_text::Query;

use crate::render::Formatter;

/// Dataset used when none is supplied.
pub const DEFAULT_DATA: [&str; 3] = ["Volkswagen", "Mercedes", "Daimler"];

/// Default minimum trimmed input length before filtering.
pub const DEFAULT_MIN_CHAR: usize = 1;

/// Advisories are surfaced by default.
pub const DEFAULT_SHOW_WARNINGS: bool = true;

/// Click-away dismissal is off by default.
pub const DEFAULT_CLOSE_ON_CLICK_AWAY: bool = false;

/// Errors from loading option documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document could not be parsed.
    Parse(String),
    /// `query` named something other than a built-in predicate.
    UnknownQuery(String),
    /// `toHtml` named something other than a built-in formatter.
    UnknownFormatter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::UnknownQuery(name) => {
                write!(f, "unknown query '{name}' (expected 'strict' or 'fuzzy')")
            }
            Self::UnknownFormatter(name) => {
                write!(f, "unknown formatter '{name}' (expected 'classic')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Effective configuration of one widget.
#[derive(Clone)]
pub struct Configuration {
    pub data: Vec<Record>,
    pub query: Query,
    pub to_html: Formatter,
    pub min_char: usize,
    pub show_warnings: bool,
    pub close_on_click_away: bool,
    pub plugins: Vec<Rc<dyn Plugin>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            data: dataset(DEFAULT_DATA),
            query: Query::Strict,
            to_html: Formatter::Classic,
            min_char: DEFAULT_MIN_CHAR,
            show_warnings: DEFAULT_SHOW_WARNINGS,
            close_on_click_away: DEFAULT_CLOSE_ON_CLICK_AWAY,
            plugins: Vec::new(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("data", &self.data.len())
            .field("query", &self.query)
            .field("to_html", &self.to_html)
            .field("min_char", &self.min_char)
            .field("show_warnings", &self.show_warnings)
            .field("close_on_click_away", &self.close_on_click_away)
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Configuration {
    /// Defaults with `options` merged over them.
    #[must_use]
    pub fn from_options(options: Options) -> Self {
        Self::default().merged(options)
    }

    /// Overwrite every field `options` supplies; keep the rest.
    #[must_use]
    pub fn merged(mut self, options: Options) -> Self {
        let Options {
            data,
            query,
            to_html,
            min_char,
            show_warnings,
            close_on_click_away,
            plugins,
        } = options;

        if let Some(data) = data {
            self.data = data;
        }
        if let Some(query) = query {
            self.query = query;
        }
        if let Some(to_html) = to_html {
            self.to_html = to_html;
        }
        if let Some(min_char) = min_char {
            self.min_char = min_char;
        }
        if let Some(show_warnings) = show_warnings {
            self.show_warnings = show_warnings;
        }
        if let Some(close_on_click_away) = close_on_click_away {
            self.close_on_click_away = close_on_click_away;
        }
        if let Some(plugins) = plugins {
            self.plugins = plugins;
        }
        self
    }

    /// Number of records that are objects or arrays.
    #[must_use]
    pub fn non_primitive_count(&self) -> usize {
        self.data.iter().filter(|r| !r.is_primitive()).count()
    }
}

/// Caller-supplied overrides. Unset fields keep their current value.
#[derive(Clone, Default)]
pub struct Options {
    pub data: Option<Vec<Record>>,
    pub query: Option<Query>,
    pub to_html: Option<Formatter>,
    pub min_char: Option<usize>,
    pub show_warnings: Option<bool>,
    pub close_on_click_away: Option<bool>,
    pub plugins: Option<Vec<Rc<dyn Plugin>>>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("data", &self.data.as_ref().map(Vec::len))
            .field("query", &self.query)
            .field("to_html", &self.to_html)
            .field("min_char", &self.min_char)
            .field("show_warnings", &self.show_warnings)
            .field("close_on_click_away", &self.close_on_click_away)
            .field("plugins", &self.plugins.as_ref().map(Vec::len))
            .finish()
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data<T: Into<Record>>(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.data = Some(dataset(items));
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn to_html(mut self, formatter: Formatter) -> Self {
        self.to_html = Some(formatter);
        self
    }

    #[must_use]
    pub fn min_char(mut self, min_char: usize) -> Self {
        self.min_char = Some(min_char);
        self
    }

    #[must_use]
    pub fn show_warnings(mut self, show: bool) -> Self {
        self.show_warnings = Some(show);
        self
    }

    #[must_use]
    pub fn close_on_click_away(mut self, close: bool) -> Self {
        self.close_on_click_away = Some(close);
        self
    }

    /// Append a plugin to the supplied plugin list.
    #[must_use]
    pub fn plugin(mut self, plugin: Rc<dyn Plugin>) -> Self {
        self.plugins.get_or_insert_with(Vec::new).push(plugin);
        self
    }

    /// Parse a JSON options document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let doc: OptionsDocument =
            serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        doc.try_into()
    }

    /// Parse a TOML options document.
    #[cfg(feature = "toml")]
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let doc: OptionsDocument =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        doc.try_into()
    }
}

/// On-disk shape of [`Options`]. Keys accept both `snake_case` and the
/// `camelCase` spelling browser callers use.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsDocument {
    #[serde(default)]
    data: Option<Vec<Record>>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default, alias = "toHtml")]
    to_html: Option<String>,
    #[serde(default, alias = "minChar")]
    min_char: Option<usize>,
    #[serde(default, alias = "showWarnings")]
    show_warnings: Option<bool>,
    #[serde(default, alias = "closeOnClickAway")]
    close_on_click_away: Option<bool>,
}

impl TryFrom<OptionsDocument> for Options {
    type Error = ConfigError;

    fn try_from(doc: OptionsDocument) -> Result<Self, Self::Error> {
        let query = doc
            .query
            .map(|name| Query::by_name(&name).ok_or(ConfigError::UnknownQuery(name)))
            .transpose()?;
        let to_html = doc
            .to_html
            .map(|name| Formatter::by_name(&name).ok_or(ConfigError::UnknownFormatter(name)))
            .transpose()?;

        Ok(Self {
            data: doc.data,
            query,
            to_html,
            min_char: doc.min_char,
            show_warnings: doc.show_warnings,
            close_on_click_away: doc.close_on_click_away,
            plugins: None,
        })
    }
}
