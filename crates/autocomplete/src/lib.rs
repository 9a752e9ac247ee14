//! # autocomplete
//!
//! Presentation-layer controller for an accessible combobox. A [`Widget`] binds a
//! headless [`SearchCore`] (matching, filtering, keyboard navigation) to a text
//! input and a results listbox:
//!
//! - DOM events on the input and list are translated and delegated to the core;
//! - the core answers through [`Callbacks`], queued as [`CoreEvent`]s and applied
//!   by [`Widget::pump`];
//! - the widget reflects results, selection, visibility, loading and anchor
//!   geometry into ARIA attributes, markup, the root's `data-*` hooks and the
//!   list's inline style.
//!
//! ## Host
//!
//! All document access goes through [`DomHost`]. With the default `memory-host`
//! feature, `dom::Document` implements it, which is how the tests drive the
//! widget end to end.
//!
//! The embedder forwards DOM events either to one widget with
//! [`Widget::handle_event`] or to every registered widget through a
//! [`Dispatcher`].
//!
//! ## Safety of rendered text
//!
//! The default renderer inserts result text as text nodes. Raw markup is only
//! inserted when a custom renderer returns a [`Markup`] value.

mod config;
mod dispatch;
mod error;
mod events;
mod host;
mod id;
mod position;
mod render;
mod search_core;
mod state;
mod style;
mod widget;

pub use crate::config::{
    Config, DEFAULT_BASE_CLASS, RenderResultsFn, ResultValueFn, SubmitFn, WidgetOptions,
};
pub use crate::dispatch::{Dispatcher, Listener};
pub use crate::error::WidgetError;
pub use crate::events::{DomEvent, DomEventKind, EventType, Scope, Subscription};
pub use crate::host::{DomHost, ElementSpec, Root};
pub use crate::id::unique_id;
pub use crate::position::{Px, ResultsPosition, VerticalAnchor, default_results_position};
pub use crate::render::{Markup, ResultProps, option_id, result_props};
pub use crate::search_core::{
    Callbacks, CoreEvent, CoreOptions, InputEvent, Key, KeyEvent, ResultClick, Search,
    SearchCore, SearchFn,
};
pub use crate::state::{Placement, Visibility, WidgetState};
pub use crate::style::StyleSnapshot;
pub use crate::widget::Widget;
pub use core_types::{Rect, Viewport};

#[cfg(feature = "memory-host")]
pub use dom;
