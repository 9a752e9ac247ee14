//! Style sync: a pure projection of [`WidgetState`] onto the root dataset and
//! the results list's inline style.

use crate::host::DomHost;
use crate::position::{Px, VerticalAnchor};
use crate::state::WidgetState;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSnapshot {
    pub expanded: &'static str,
    pub loading: &'static str,
    /// `"above"` when the list is anchored by its bottom edge.
    pub position: &'static str,
    pub results_style: String,
}

fn flag(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn snapshot(state: &WidgetState) -> StyleSnapshot {
    let expanded = state.expanded();
    let position = state.position();

    let mut css = String::from("position: fixed; z-index: 1;");
    let _ = write!(
        css,
        " visibility: {}; pointer-events: {};",
        if expanded { "visible" } else { "hidden" },
        if expanded { "auto" } else { "none" },
    );
    if let Some(pos) = position {
        let _ = match pos.vertical {
            VerticalAnchor::Top(top) => write!(css, " top: {};", Px(top)),
            VerticalAnchor::Bottom(bottom) => write!(css, " bottom: {};", Px(bottom)),
        };
        let _ = write!(css, " left: {}; width: {};", Px(pos.left), Px(pos.width));
    }

    StyleSnapshot {
        expanded: flag(expanded),
        loading: flag(state.loading()),
        position: if position.is_some_and(|p| p.is_above()) {
            "above"
        } else {
            "below"
        },
        results_style: css,
    }
}

pub fn apply<H: DomHost>(host: &mut H, root: &H::Node, results: &H::Node, snapshot: &StyleSnapshot) {
    host.set_attribute(root, "data-expanded", snapshot.expanded);
    host.set_attribute(root, "data-loading", snapshot.loading);
    host.set_attribute(root, "data-position", snapshot.position);
    host.set_style(results, &snapshot.results_style);
}
