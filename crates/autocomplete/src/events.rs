//! Raw DOM events as delivered by the host, and the subscriptions a widget
//! holds on them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventType {
    Click,
    Input,
    Keydown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomEventKind {
    Click,
    Input,
    Keydown { key: String },
}

impl DomEventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            DomEventKind::Click => EventType::Click,
            DomEventKind::Input => EventType::Input,
            DomEventKind::Keydown { .. } => EventType::Keydown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent<N> {
    pub target: N,
    pub kind: DomEventKind,
}

impl<N> DomEvent<N> {
    pub fn click(target: N) -> Self {
        Self {
            target,
            kind: DomEventKind::Click,
        }
    }

    pub fn input(target: N) -> Self {
        Self {
            target,
            kind: DomEventKind::Input,
        }
    }

    pub fn keydown(target: N, key: &str) -> Self {
        Self {
            target,
            kind: DomEventKind::Keydown {
                key: key.to_string(),
            },
        }
    }
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Document,
    Input,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub scope: Scope,
    pub event: EventType,
}

impl Subscription {
    pub const fn new(scope: Scope, event: EventType) -> Self {
        Self { scope, event }
    }
}
