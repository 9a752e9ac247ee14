#![allow(dead_code)]

use autocomplete::dom::{Document, Id};
use autocomplete::{
    Callbacks, Config, CoreOptions, InputEvent, Key, KeyEvent, Rect, ResultClick,
    ResultsPosition, Search, SearchCore, SearchFn, Viewport, Widget, default_results_position,
};
use std::cell::Cell;
use std::sync::mpsc::Receiver;

pub const FIXTURE: &str = concat!(
    r#"<div id="search"><label>City</label><input type="search"><ul></ul></div>"#,
    r#"<p id="elsewhere">elsewhere</p>"#,
);

pub const INPUT_RECT: Rect = Rect::new(20.0, 100.0, 300.0, 32.0);
pub const RESULTS_RECT: Rect = Rect::new(20.0, 132.0, 300.0, 120.0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
}

pub fn cities(names: &[&'static str]) -> Vec<City> {
    names.iter().map(|&name| City { name }).collect()
}

pub fn city_config() -> Config<City> {
    Config::with_result_value(|_| Search::Ready(Vec::new()), |c: &City| c.name.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Input(String),
    Keydown(Key),
    ResultClick(Option<usize>),
    HideResults,
}

/// Records delegated events and lets the test drive callbacks by hand.
pub struct RecordingCore<R> {
    pub callbacks: Callbacks<R>,
    pub auto_select: bool,
    pub calls: Vec<Call>,
    pub measurements: Cell<usize>,
}

impl<R> RecordingCore<R> {
    pub fn new(options: CoreOptions<R>) -> Self {
        Self {
            callbacks: options.callbacks,
            auto_select: options.auto_select,
            calls: Vec::new(),
            measurements: Cell::new(0),
        }
    }

    pub fn hide_requests(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::HideResults).count()
    }
}

impl<R> SearchCore<R> for RecordingCore<R> {
    fn handle_input(&mut self, event: &InputEvent) {
        self.calls.push(Call::Input(event.value.clone()));
    }

    fn handle_keydown(&mut self, event: &KeyEvent) {
        self.calls.push(Call::Keydown(event.key.clone()));
    }

    fn handle_result_click(&mut self, event: &ResultClick) {
        self.calls.push(Call::ResultClick(event.index));
    }

    fn hide_results(&mut self) {
        self.calls.push(Call::HideResults);
    }

    fn results_position(&self, input: Rect, results: Rect, viewport: Viewport) -> ResultsPosition {
        self.measurements.set(self.measurements.get() + 1);
        default_results_position(input, results, viewport)
    }
}

/// A minimal working core: every input runs the search; results are shown as
/// they arrive, synchronously or through `poll`.
pub struct LiveCore<R> {
    callbacks: Callbacks<R>,
    search: SearchFn<R>,
    pending: Option<Receiver<Vec<R>>>,
}

impl<R> LiveCore<R> {
    pub fn new(options: CoreOptions<R>) -> Self {
        Self {
            callbacks: options.callbacks,
            search: options.search,
            pending: None,
        }
    }

    fn publish(&self, results: Vec<R>) {
        let empty = results.is_empty();
        self.callbacks.update(results, None);
        if empty {
            self.callbacks.hide();
        } else {
            self.callbacks.show();
        }
        self.callbacks.loaded();
    }
}

impl<R> SearchCore<R> for LiveCore<R> {
    fn handle_input(&mut self, event: &InputEvent) {
        self.callbacks.loading();
        match (self.search)(&event.value) {
            Search::Ready(results) => self.publish(results),
            Search::Pending(rx) => self.pending = Some(rx),
        }
    }

    fn handle_keydown(&mut self, event: &KeyEvent) {
        if event.key == Key::Escape {
            self.hide_results();
        }
    }

    fn handle_result_click(&mut self, _event: &ResultClick) {}

    fn hide_results(&mut self) {
        self.callbacks.update(Vec::new(), None);
        self.callbacks.hide();
    }

    fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        if let Ok(results) = rx.try_recv() {
            self.pending = None;
            self.publish(results);
        }
    }
}

pub fn document() -> Document {
    let mut doc = Document::parse(FIXTURE);
    doc.set_viewport(Viewport {
        width: 800.0,
        height: 600.0,
        scroll_y: 0.0,
    });
    doc
}

pub fn lay_out(doc: &mut Document, input: Id, results: Id) {
    doc.set_rect(input, INPUT_RECT);
    doc.set_rect(results, RESULTS_RECT);
}

pub fn recording_widget<R>(
    doc: &mut Document,
    config: Config<R>,
) -> Widget<Id, R, RecordingCore<R>> {
    let widget = Widget::new(doc, "#search", config, RecordingCore::new)
        .expect("fixture has a root with input and list");
    let (input, results) = (*widget.input(), *widget.results());
    lay_out(doc, input, results);
    widget
}

pub fn option_ids(doc: &Document, results: Id) -> Vec<String> {
    doc.query_selector_all(results, "[role=option]")
        .into_iter()
        .map(|id| doc.attribute(id, "id").unwrap_or_default().to_string())
        .collect()
}

pub fn selected_options(doc: &Document, results: Id) -> Vec<Id> {
    doc.query_selector_all(results, "[aria-selected]")
}
