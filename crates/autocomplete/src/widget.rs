//! The widget controller.
//!
//! A [`Widget`] binds one [`SearchCore`] to an input and a results list found
//! under a root element. It owns every DOM mutation on those elements:
//!
//! - accessibility attributes, set once at construction and kept in sync with
//!   the core's callbacks;
//! - the rendered options, rebuilt on every update;
//! - the root dataset and the list's inline style, derived from
//!   [`WidgetState`] after each transition.
//!
//! The widget does not hold the host. Callers pass it to [`Widget::new`],
//! [`Widget::handle_event`] and [`Widget::pump`], which lets many widgets share
//! one document.

use crate::config::{Config, RenderResultsFn, ResultValueFn, SubmitFn};
use crate::error::WidgetError;
use crate::events::{DomEvent, DomEventKind, EventType, Scope, Subscription};
use crate::host::{DomHost, Root};
use crate::id::unique_id;
use crate::render::{default_options, option_id, result_props};
use crate::search_core::{
    Callbacks, CoreEvent, CoreOptions, InputEvent, Key, KeyEvent, ResultClick, SearchCore,
};
use crate::state::WidgetState;
use crate::style::{self, StyleSnapshot};
use std::fmt;
use std::sync::mpsc::Receiver;

const INPUT_ATTRIBUTES: [(&str, &str); 8] = [
    ("role", "combobox"),
    ("autocomplete", "off"),
    ("autocapitalize", "off"),
    ("autocorrect", "off"),
    ("spellcheck", "false"),
    ("aria-autocomplete", "list"),
    ("aria-haspopup", "listbox"),
    ("aria-expanded", "false"),
];

const SUBSCRIPTIONS: [Subscription; 4] = [
    Subscription::new(Scope::Document, EventType::Click),
    Subscription::new(Scope::Input, EventType::Input),
    Subscription::new(Scope::Input, EventType::Keydown),
    Subscription::new(Scope::Results, EventType::Click),
];

pub struct Widget<N, R, C> {
    root: N,
    input: N,
    results: N,
    base_class: String,
    get_result_value: ResultValueFn<R>,
    render_results: Option<RenderResultsFn<R>>,
    on_submit: SubmitFn<R>,
    core: C,
    events: Receiver<CoreEvent<R>>,
    state: WidgetState,
    subscriptions: Vec<Subscription>,
}

impl<N, R, C> Widget<N, R, C>
where
    N: Clone + PartialEq + fmt::Debug,
    C: SearchCore<R>,
{
    /// Resolve the root and its two children, build the core from `make_core`,
    /// and initialize accessibility attributes, listeners and style.
    pub fn new<'a, H>(
        host: &mut H,
        root: impl Into<Root<'a, N>>,
        config: Config<R>,
        make_core: impl FnOnce(CoreOptions<R>) -> C,
    ) -> Result<Self, WidgetError>
    where
        H: DomHost<Node = N>,
    {
        let root = match root.into() {
            Root::Element(node) => node,
            Root::Selector(selector) => {
                host.query_selector(None, selector)
                    .ok_or_else(|| WidgetError::RootNotFound {
                        selector: selector.to_string(),
                    })?
            }
        };
        let input = host
            .query_selector(Some(&root), "input")
            .ok_or(WidgetError::MissingInput)?;
        let results = host
            .query_selector(Some(&root), "ul")
            .ok_or(WidgetError::MissingResults)?;

        let Config {
            search,
            on_submit,
            options,
            get_result_value,
            render_results,
        } = config;

        let (callbacks, events) = Callbacks::channel();
        let core = make_core(CoreOptions {
            search,
            auto_select: options.auto_select,
            callbacks,
        });

        let mut widget = Self {
            root,
            input,
            results,
            base_class: options.base_class,
            get_result_value,
            render_results,
            on_submit,
            core,
            events,
            state: WidgetState::new(),
            subscriptions: Vec::new(),
        };
        widget.initialize(host);
        Ok(widget)
    }

    fn initialize<H: DomHost<Node = N>>(&mut self, host: &mut H) {
        for (name, value) in INPUT_ATTRIBUTES {
            host.set_attribute(&self.input, name, value);
        }
        host.set_attribute(&self.results, "role", "listbox");

        let results_id = match host.attribute(&self.results, "id") {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = unique_id(&format!("{}-results-", self.base_class));
                host.set_attribute(&self.results, "id", &id);
                id
            }
        };
        host.set_attribute(&self.input, "aria-owns", &results_id);

        self.subscriptions = SUBSCRIPTIONS.to_vec();
        self.sync_style(host);
        log::debug!(
            target: "autocomplete.widget",
            "initialized widget root={:?} results={results_id}",
            self.root
        );
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn input(&self) -> &N {
        &self.input
    }

    pub fn results(&self) -> &N {
        &self.results
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// The dataset and inline style the widget currently projects.
    pub fn style(&self) -> StyleSnapshot {
        style::snapshot(&self.state)
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Drop every listener. Later events are ignored and queued callbacks
    /// are discarded.
    pub fn destroy(&mut self) {
        self.subscriptions.clear();
        log::debug!(target: "autocomplete.widget", "destroyed widget root={:?}", self.root);
    }

    /// Route one DOM event through this widget's subscriptions, then apply
    /// whatever the core queued in response.
    ///
    /// Element-level listeners run before the document-level one, as they
    /// would while the event bubbles.
    pub fn handle_event<H: DomHost<Node = N>>(&mut self, host: &mut H, event: &DomEvent<N>) {
        let ty = event.kind.event_type();
        let mut scopes: Vec<Scope> = self
            .subscriptions
            .iter()
            .filter(|s| s.event == ty)
            .map(|s| s.scope)
            .collect();
        scopes.sort_by_key(|scope| *scope == Scope::Document);

        for scope in scopes {
            self.deliver(host, scope, event);
        }
        self.pump(host);
    }

    fn deliver<H: DomHost<Node = N>>(&mut self, host: &H, scope: Scope, event: &DomEvent<N>) {
        let target = &event.target;
        match (scope, &event.kind) {
            (Scope::Document, DomEventKind::Click) => {
                if host.contains(&self.root, target) {
                    return;
                }
                log::trace!(target: "autocomplete.events", "outside click, hiding results");
                self.core.hide_results();
            }
            (Scope::Input, DomEventKind::Input) if host.contains(&self.input, target) => {
                let value = host.value(&self.input).unwrap_or_default();
                log::trace!(target: "autocomplete.events", "input {value:?}");
                self.core.handle_input(&InputEvent { value });
            }
            (Scope::Input, DomEventKind::Keydown { key }) if host.contains(&self.input, target) => {
                log::trace!(target: "autocomplete.events", "keydown {key}");
                self.core.handle_keydown(&KeyEvent {
                    key: Key::from_name(key),
                });
            }
            (Scope::Results, DomEventKind::Click) if host.contains(&self.results, target) => {
                let index = host
                    .closest(target, "[data-result-index]")
                    .filter(|option| host.contains(&self.results, option))
                    .and_then(|option| host.attribute(&option, "data-result-index"))
                    .and_then(|raw| raw.parse::<usize>().ok());
                log::trace!(target: "autocomplete.events", "result click index={index:?}");
                self.core.handle_result_click(&ResultClick { index });
            }
            _ => {}
        }
    }

    /// Let the core surface completed work, then apply queued callbacks in
    /// arrival order.
    pub fn pump<H: DomHost<Node = N>>(&mut self, host: &mut H) {
        self.core.poll();
        while let Ok(event) = self.events.try_recv() {
            if self.is_attached() {
                self.apply(host, event);
            }
        }
    }

    fn apply<H: DomHost<Node = N>>(&mut self, host: &mut H, event: CoreEvent<R>) {
        match event {
            CoreEvent::SetValue(result) => {
                let value = result
                    .as_ref()
                    .map(|r| (self.get_result_value)(r))
                    .unwrap_or_default();
                host.set_value(&self.input, &value);
            }
            CoreEvent::SetAttribute { name, value } => {
                host.set_attribute(&self.input, &name, &value);
            }
            CoreEvent::Update { results, selected } => {
                self.render(host, &results, selected);
            }
            CoreEvent::Submit(result) => (self.on_submit)(result),
            CoreEvent::Show => {
                self.state.show();
                host.set_attribute(&self.input, "aria-expanded", "true");
                log::debug!(target: "autocomplete.widget", "show");
                self.sync_style(host);
            }
            CoreEvent::Hide => {
                self.state.hide();
                host.set_attribute(&self.input, "aria-expanded", "false");
                log::debug!(target: "autocomplete.widget", "hide");
                self.sync_style(host);
            }
            CoreEvent::Loading => {
                self.state.start_loading();
                self.sync_style(host);
            }
            CoreEvent::Loaded => {
                self.state.finish_loading();
                self.sync_style(host);
            }
        }
    }

    fn render<H: DomHost<Node = N>>(&mut self, host: &mut H, results: &[R], selected: Option<usize>) {
        let props = result_props(&self.base_class, results.len(), selected);
        match &self.render_results {
            Some(render) => {
                let markup = render(results, &props);
                host.set_inner_html(&self.results, markup.as_str());
            }
            None => {
                let options = default_options(results, &props, &*self.get_result_value);
                host.replace_children(&self.results, &options);
            }
        }

        let active = selected
            .map(|i| option_id(&self.base_class, i))
            .unwrap_or_default();
        host.set_attribute(&self.input, "aria-activedescendant", &active);

        if self.state.needs_measure() {
            let position = self.core.results_position(
                host.bounding_rect(&self.input),
                host.bounding_rect(&self.results),
                host.viewport(),
            );
            log::debug!(target: "autocomplete.widget", "measured {position:?}");
            self.state.measured(position);
            self.sync_style(host);
        }
    }

    fn sync_style<H: DomHost<Node = N>>(&self, host: &mut H) {
        style::apply(host, &self.root, &self.results, &self.style());
    }
}

impl<N: fmt::Debug, R, C> fmt::Debug for Widget<N, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("root", &self.root)
            .field("input", &self.input)
            .field("results", &self.results)
            .field("base_class", &self.base_class)
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}
