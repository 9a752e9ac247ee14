//! Visual state of a widget.
//!
//! Visibility and loading change independently. Geometry follows the show
//! cycle: every hide forgets whether the current geometry is fresh, and the
//! first render afterwards measures exactly once.

use crate::position::ResultsPosition;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Geometry must be measured on the next render. `last` is what the list
    /// was positioned with before, if anything, and is still used for styling.
    Unmeasured { last: Option<ResultsPosition> },
    Measured(ResultsPosition),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Unmeasured { last: None }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetState {
    visibility: Visibility,
    loading: bool,
    placement: Placement,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> bool {
        self.visibility == Visibility::Expanded
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Geometry currently applied to the list.
    pub fn position(&self) -> Option<ResultsPosition> {
        match self.placement {
            Placement::Unmeasured { last } => last,
            Placement::Measured(pos) => Some(pos),
        }
    }

    pub fn needs_measure(&self) -> bool {
        matches!(self.placement, Placement::Unmeasured { .. })
    }

    pub fn show(&mut self) {
        self.visibility = Visibility::Expanded;
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Collapsed;
        self.placement = Placement::Unmeasured {
            last: self.position(),
        };
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Record fresh geometry. Returns `false` (and changes nothing) if the
    /// geometry for this show cycle was already measured.
    pub fn measured(&mut self, position: ResultsPosition) -> bool {
        if !self.needs_measure() {
            return false;
        }
        self.placement = Placement::Measured(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(top: f32) -> ResultsPosition {
        ResultsPosition::below(top, 0.0, 100.0)
    }

    #[test]
    fn starts_collapsed_idle_and_unmeasured() {
        let state = WidgetState::new();
        assert!(!state.expanded());
        assert!(!state.loading());
        assert!(state.needs_measure());
        assert_eq!(state.position(), None);
    }

    #[test]
    fn measures_once_per_show_cycle() {
        let mut state = WidgetState::new();
        state.show();
        assert!(state.measured(pos(10.0)));
        assert!(!state.measured(pos(20.0)));
        assert_eq!(state.position(), Some(pos(10.0)));

        state.hide();
        assert!(state.needs_measure());
        assert_eq!(state.position(), Some(pos(10.0)));
        state.show();
        assert!(state.measured(pos(30.0)));
        assert_eq!(state.position(), Some(pos(30.0)));
    }

    #[test]
    fn repeated_hide_keeps_last_geometry() {
        let mut state = WidgetState::new();
        state.measured(pos(5.0));
        state.hide();
        state.hide();
        assert_eq!(
            state.placement(),
            Placement::Unmeasured {
                last: Some(pos(5.0))
            }
        );
    }

    #[test]
    fn loading_is_independent_of_visibility() {
        let mut state = WidgetState::new();
        state.start_loading();
        state.show();
        state.hide();
        assert!(state.loading());
        state.finish_loading();
        assert!(!state.loading());
        assert!(!state.expanded());
    }
}
