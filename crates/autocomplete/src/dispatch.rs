//! Fan-out of host DOM events to registered widgets.
//!
//! The dispatcher holds weak handles only. Dropping a widget unregisters it,
//! and so does [`Widget::destroy`]: detached listeners are pruned on the next
//! dispatch.

use crate::events::DomEvent;
use crate::host::DomHost;
use crate::search_core::SearchCore;
use crate::widget::Widget;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Anything that consumes routed DOM events.
pub trait Listener<H: DomHost> {
    fn handle_event(&mut self, host: &mut H, event: &DomEvent<H::Node>);

    fn is_attached(&self) -> bool;
}

impl<H, R, C> Listener<H> for Widget<H::Node, R, C>
where
    H: DomHost,
    C: SearchCore<R>,
{
    fn handle_event(&mut self, host: &mut H, event: &DomEvent<H::Node>) {
        Widget::handle_event(self, host, event);
    }

    fn is_attached(&self) -> bool {
        Widget::is_attached(self)
    }
}

type Entry<H> = Weak<RefCell<dyn Listener<H>>>;

pub struct Dispatcher<H: DomHost> {
    listeners: Vec<Entry<H>>,
}

impl<H: DomHost> Default for Dispatcher<H> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<H: DomHost> Dispatcher<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same listener twice is a no-op.
    pub fn register<L: Listener<H> + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        if self.position(listener).is_some() {
            return;
        }
        let shared: Rc<RefCell<dyn Listener<H>>> = listener.clone();
        self.listeners.push(Rc::downgrade(&shared));
    }

    /// Returns whether the listener was registered.
    pub fn unregister<L: Listener<H> + 'static>(&mut self, listener: &Rc<RefCell<L>>) -> bool {
        match self.position(listener) {
            Some(i) => {
                self.listeners.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every live, attached listener in registration order.
    pub fn dispatch(&mut self, host: &mut H, event: &DomEvent<H::Node>) {
        self.listeners.retain(|entry| {
            entry
                .upgrade()
                .is_some_and(|l| l.try_borrow().map_or(true, |l| l.is_attached()))
        });

        let live: Vec<_> = self.listeners.iter().filter_map(Weak::upgrade).collect();
        for listener in live {
            match listener.try_borrow_mut() {
                Ok(mut listener) => listener.handle_event(host, event),
                Err(_) => {
                    log::warn!(target: "autocomplete.events", "listener busy, event skipped");
                }
            }
        }
    }

    fn position<L: Listener<H> + 'static>(&self, listener: &Rc<RefCell<L>>) -> Option<usize> {
        let target = Rc::as_ptr(listener).cast::<()>();
        self.listeners
            .iter()
            .position(|entry| entry.as_ptr().cast::<()>() == target)
    }
}

impl<H: DomHost> fmt::Debug for Dispatcher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
