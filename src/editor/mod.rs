//! Threshold list editing.
//!
//! - `state` - working copy of the thresholds and the edit buffer
//! - `mutation` - pure state transitions for every user action
//! - `sorting` - descending order applied at commit points
//!
//! [`ThresholdsEditor`] ties these together: it owns the state and the
//! palette, applies mutations and calls the host back after each commit.

pub mod mutation;
pub mod sorting;
pub mod state;

pub use mutation::{apply, Applied, Mutation, Outcome};
pub use sorting::{is_sorted_descending, sort_thresholds, sorted};
pub use state::{EditPhase, EditorState};

use crate::palette::{ClassicPalette, Palette};
use crate::threshold::Threshold;

/// A thresholds editor bound to a palette.
pub struct ThresholdsEditor<P: Palette = ClassicPalette> {
    state: EditorState,
    palette: P,
}

impl ThresholdsEditor<ClassicPalette> {
    /// Creates an editor over the host's thresholds with the classic palette.
    pub fn new(host: Vec<Threshold>) -> Self {
        Self::with_palette(host, ClassicPalette)
    }
}

impl<P: Palette> ThresholdsEditor<P> {
    pub fn with_palette(host: Vec<Threshold>, palette: P) -> Self {
        let state = EditorState::new(host, &palette);
        Self { state, palette }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn thresholds(&self) -> &[Threshold] {
        self.state.thresholds()
    }

    /// Applies a mutation, then hands the full list to `on_change` if it
    /// committed.
    ///
    /// The callback runs after the new state is stored, so it only ever sees
    /// fully applied state.
    pub fn dispatch<F>(&mut self, mutation: Mutation, mut on_change: F) -> Outcome
    where
        F: FnMut(&[Threshold]),
    {
        tracing::debug!(?mutation, "applying threshold mutation");

        let Applied { state, outcome } = apply(&self.state, mutation, &self.palette);
        self.state = state;

        if outcome == Outcome::Committed {
            tracing::debug!(count = self.state.thresholds().len(), "thresholds committed");
            on_change(self.state.thresholds());
        }
        outcome
    }

    /// Dispatches mutations in order, notifying after each commit.
    pub fn dispatch_all<I, F>(&mut self, mutations: I, mut on_change: F)
    where
        I: IntoIterator<Item = Mutation>,
        F: FnMut(&[Threshold]),
    {
        for mutation in mutations {
            self.dispatch(mutation, &mut on_change);
        }
    }
}

impl Default for ThresholdsEditor<ClassicPalette> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ThresholdId;

    #[test]
    fn test_dispatch_notifies_only_on_commit() {
        let mut editor = ThresholdsEditor::default();
        let mut calls: Vec<Vec<Threshold>> = Vec::new();

        let outcome = editor.dispatch(Mutation::AddThreshold { at: 0 }, |t| calls.push(t.to_vec()));
        assert_eq!(outcome, Outcome::Ignored);
        assert!(calls.is_empty());

        editor.dispatch(Mutation::AddThreshold { at: 1 }, |t| calls.push(t.to_vec()));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 2);

        editor.dispatch(
            Mutation::ChangeThresholdValue { id: ThresholdId(1), raw: "70".to_string() },
            |t| calls.push(t.to_vec()),
        );
        assert_eq!(calls.len(), 1);

        editor.dispatch(Mutation::Blur, |t| calls.push(t.to_vec()));
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1][0].value, 70.0);
    }

    #[test]
    fn test_dispatch_all_reports_each_commit() {
        let mut editor = ThresholdsEditor::default();
        let mut sizes = Vec::new();
        editor.dispatch_all(
            [
                Mutation::AddThreshold { at: 1 },
                Mutation::AddThreshold { at: 2 },
                Mutation::RemoveThreshold { id: ThresholdId(1) },
            ],
            |t| sizes.push(t.len()),
        );
        assert_eq!(sizes, vec![2, 3, 2]);
    }
}
