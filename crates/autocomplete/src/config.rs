use crate::render::{Markup, ResultProps};
use crate::search_core::{Search, SearchFn};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BASE_CLASS: &str = "autocomplete";

pub type ResultValueFn<R> = Box<dyn Fn(&R) -> String>;
pub type RenderResultsFn<R> = Box<dyn Fn(&[R], &[ResultProps]) -> Markup>;
pub type SubmitFn<R> = Box<dyn FnMut(R)>;

/// The serializable part of the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Prefix for generated ids and class names.
    pub base_class: String,
    /// Forwarded to the search core.
    pub auto_select: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            auto_select: false,
        }
    }
}

/// Widget configuration. Only `search` is required.
pub struct Config<R> {
    pub(crate) search: SearchFn<R>,
    pub(crate) on_submit: SubmitFn<R>,
    pub(crate) options: WidgetOptions,
    pub(crate) get_result_value: ResultValueFn<R>,
    pub(crate) render_results: Option<RenderResultsFn<R>>,
}

impl<R: fmt::Display> Config<R> {
    /// Results are displayed with their `Display` rendering.
    pub fn new(search: impl FnMut(&str) -> Search<R> + 'static) -> Self {
        Self::with_result_value(search, |r: &R| r.to_string())
    }
}

impl<R> Config<R> {
    pub fn with_result_value(
        search: impl FnMut(&str) -> Search<R> + 'static,
        get_result_value: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            search: Box::new(search),
            on_submit: Box::new(|_| {}),
            options: WidgetOptions::default(),
            get_result_value: Box::new(get_result_value),
            render_results: None,
        }
    }

    pub fn on_submit(mut self, f: impl FnMut(R) + 'static) -> Self {
        self.on_submit = Box::new(f);
        self
    }

    pub fn base_class(mut self, base_class: impl Into<String>) -> Self {
        self.options.base_class = base_class.into();
        self
    }

    pub fn auto_select(mut self, auto_select: bool) -> Self {
        self.options.auto_select = auto_select;
        self
    }

    /// Replace the default list rendering. The returned markup is inserted as is.
    pub fn render_results(
        mut self,
        f: impl Fn(&[R], &[ResultProps]) -> Markup + 'static,
    ) -> Self {
        self.render_results = Some(Box::new(f));
        self
    }

    pub fn options(mut self, options: WidgetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn widget_options(&self) -> &WidgetOptions {
        &self.options
    }
}

impl<R> fmt::Debug for Config<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("options", &self.options)
            .field("render_results", &self.render_results.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::<String>::new(|_| Search::Ready(Vec::new()));
        assert_eq!(config.widget_options().base_class, "autocomplete");
        assert!(!config.widget_options().auto_select);
        assert!(config.render_results.is_none());
        assert_eq!((config.get_result_value)(&"Paris".to_string()), "Paris");
    }

    #[test]
    fn builder_overrides() {
        let config = Config::<String>::new(|_| Search::Ready(Vec::new()))
            .base_class("city")
            .auto_select(true)
            .render_results(|_, _| Markup::new(""));
        assert_eq!(config.widget_options().base_class, "city");
        assert!(config.widget_options().auto_select);
        assert!(config.render_results.is_some());
    }
}
