//! The seam between the controller and the headless Search Core.
//!
//! The core owns matching, filtering and keyboard navigation. It talks back to
//! the controller only through [`Callbacks`], which queues [`CoreEvent`]s for the
//! controller to apply on its own turn. That keeps every state mutation with a
//! single owner even when a search completes on another thread.

use crate::position::{ResultsPosition, default_results_position};
use core_types::{Rect, Viewport};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Outcome of invoking the configured search function.
pub enum Search<R> {
    Ready(Vec<R>),
    /// Results arrive later on the receiver; the core decides how to wait.
    Pending(Receiver<Vec<R>>),
}

impl<R> fmt::Debug for Search<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Search::Ready(results) => write!(f, "Search::Ready({} results)", results.len()),
            Search::Pending(_) => f.write_str("Search::Pending"),
        }
    }
}

pub type SearchFn<R> = Box<dyn FnMut(&str) -> Search<R>>;

/// Key names the core cares about; everything else is passed through by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

/// A click inside the results list. `index` is the `data-result-index` of the
/// nearest option enclosing the click target, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultClick {
    pub index: Option<usize>,
}

/// One callback invocation, queued for the controller.
#[derive(Debug)]
pub enum CoreEvent<R> {
    SetValue(Option<R>),
    SetAttribute { name: String, value: String },
    Update { results: Vec<R>, selected: Option<usize> },
    Submit(R),
    Show,
    Hide,
    Loading,
    Loaded,
}

/// The callback table handed to the core.
///
/// Cloneable and cheap; every method enqueues one [`CoreEvent`]. Calls made after
/// the controller is dropped are discarded.
pub struct Callbacks<R> {
    tx: Sender<CoreEvent<R>>,
}

impl<R> Clone for Callbacks<R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<R> fmt::Debug for Callbacks<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl<R> Callbacks<R> {
    pub(crate) fn channel() -> (Self, Receiver<CoreEvent<R>>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: CoreEvent<R>) {
        if self.tx.send(event).is_err() {
            log::debug!(target: "autocomplete.events", "callback after controller drop ignored");
        }
    }

    pub fn set_value(&self, result: Option<R>) {
        self.send(CoreEvent::SetValue(result));
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.send(CoreEvent::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// `selected == None` means no selection (index -1).
    pub fn update(&self, results: Vec<R>, selected: Option<usize>) {
        self.send(CoreEvent::Update { results, selected });
    }

    pub fn submit(&self, result: R) {
        self.send(CoreEvent::Submit(result));
    }

    pub fn show(&self) {
        self.send(CoreEvent::Show);
    }

    pub fn hide(&self) {
        self.send(CoreEvent::Hide);
    }

    pub fn loading(&self) {
        self.send(CoreEvent::Loading);
    }

    pub fn loaded(&self) {
        self.send(CoreEvent::Loaded);
    }
}

/// What the controller hands to the core factory.
pub struct CoreOptions<R> {
    pub search: SearchFn<R>,
    pub auto_select: bool,
    pub callbacks: Callbacks<R>,
}

impl<R> fmt::Debug for CoreOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreOptions")
            .field("auto_select", &self.auto_select)
            .finish_non_exhaustive()
    }
}

pub trait SearchCore<R> {
    fn handle_input(&mut self, event: &InputEvent);

    fn handle_keydown(&mut self, event: &KeyEvent);

    fn handle_result_click(&mut self, event: &ResultClick);

    fn hide_results(&mut self);

    /// Give the core a chance to surface completed asynchronous searches.
    fn poll(&mut self) {}

    /// Where the list should be anchored given the current layout.
    fn results_position(&self, input: Rect, results: Rect, viewport: Viewport) -> ResultsPosition {
        default_results_position(input, results, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_queue_in_call_order() {
        let (callbacks, rx) = Callbacks::<&str>::channel();
        callbacks.loading();
        callbacks.update(vec!["a", "b"], Some(1));
        callbacks.clone().loaded();
        let events: Vec<_> = rx.try_iter().collect();
        assert!(matches!(events[0], CoreEvent::Loading));
        assert!(matches!(
            &events[1],
            CoreEvent::Update { results, selected: Some(1) } if results == &["a", "b"]
        ));
        assert!(matches!(events[2], CoreEvent::Loaded));
    }

    #[test]
    fn callbacks_after_receiver_drop_are_discarded() {
        let (callbacks, rx) = Callbacks::<u8>::channel();
        drop(rx);
        callbacks.show();
    }

    #[test]
    fn key_names_map_to_variants() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Other("a".to_string()));
    }
}
