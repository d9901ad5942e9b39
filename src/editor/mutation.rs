//! Threshold list mutations.
//!
//! [`apply`] is pure: it takes the current state and returns the next one
//! together with an [`Outcome`] telling the caller whether the host has to be
//! notified. Calling the host is left to the caller, see
//! [`ThresholdsEditor::dispatch`](super::ThresholdsEditor::dispatch).

use crate::editor::sorting::sort_thresholds;
use crate::editor::state::{EditPhase, EditorState};
use crate::palette::Palette;
use crate::threshold::{parse_value, Threshold, ThresholdId};

/// Lower clamp for the neighbor below an inserted threshold.
const INSERT_MIN_VALUE: f64 = 0.0;
/// Upper clamp for the neighbor above an inserted threshold.
const INSERT_MAX_VALUE: f64 = 100.0;

/// A user action on the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Insert a new threshold at a positional index
    AddThreshold { at: usize },
    /// Remove the threshold with this id
    RemoveThreshold { id: ThresholdId },
    /// Keystroke in a value field; buffered until [`Mutation::Blur`]
    ChangeThresholdValue { id: ThresholdId, raw: String },
    /// New color picked for a threshold
    ChangeThresholdColor { id: ThresholdId, color: String },
    /// New color picked for the base band
    ChangeBaseColor { color: String },
    /// A value field lost focus
    Blur,
}

/// What applying a mutation means for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State committed; the host must receive the full list
    Committed,
    /// Local-only change; the host hears about it on the next commit
    Buffered,
    /// Nothing changed
    Ignored,
}

/// Result of [`apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub state: EditorState,
    pub outcome: Outcome,
}

impl Applied {
    pub fn notifies_host(&self) -> bool {
        self.outcome == Outcome::Committed
    }
}

/// Applies one mutation and returns the resulting state.
///
/// An ignored mutation returns the input state untouched, edit buffer
/// included.
pub fn apply<P: Palette + ?Sized>(state: &EditorState, mutation: Mutation, palette: &P) -> Applied {
    let mut next = state.clone();

    let outcome = match mutation {
        Mutation::AddThreshold { at } => add_threshold(&mut next, at, palette),
        Mutation::RemoveThreshold { id } => remove_threshold(&mut next, id),
        Mutation::ChangeThresholdValue { id, raw } => change_value(&mut next, id, raw),
        Mutation::ChangeThresholdColor { id, color } => change_color(&mut next, id, color),
        Mutation::ChangeBaseColor { .. } => {
            // Base color is not stored anywhere in the list; the host is
            // still told about the current thresholds. A buffered value edit
            // stays buffered until blur.
            Outcome::Committed
        }
        Mutation::Blur => {
            sort_thresholds(next.thresholds_mut());
            next.set_phase(EditPhase::Idle);
            Outcome::Committed
        }
    };

    if outcome == Outcome::Ignored {
        return Applied {
            state: state.clone(),
            outcome,
        };
    }

    Applied {
        state: next,
        outcome,
    }
}

/// Inserts a threshold at `at`, shifting and recoloring everything at or
/// above it.
///
/// The new value is the midpoint of its neighbors, with the lower neighbor
/// clamped up to 0 and the upper one clamped down to 100.
fn add_threshold<P: Palette + ?Sized>(state: &mut EditorState, at: usize, palette: &P) -> Outcome {
    // Position 0 is the base band
    if at == 0 {
        return Outcome::Ignored;
    }

    for threshold in state.thresholds_mut().iter_mut() {
        if threshold.index >= at {
            threshold.index = threshold.index.saturating_add(1);
            threshold.color = palette.color_for(threshold.index);
        }
    }

    let thresholds = state.thresholds();
    let lower = thresholds
        .iter()
        .find(|t| t.index == at - 1)
        .map_or(INSERT_MIN_VALUE, |t| t.value.max(INSERT_MIN_VALUE));
    let upper = thresholds
        .iter()
        .find(|t| t.index == at.saturating_add(1))
        .map_or(INSERT_MAX_VALUE, |t| t.value.min(INSERT_MAX_VALUE));
    let value = upper - (upper - lower) / 2.0;

    let id = state.allocate_id();
    state
        .thresholds_mut()
        .push(Threshold::new(id, at, value, palette.color_for(at)));
    sort_thresholds(state.thresholds_mut());
    state.set_phase(EditPhase::Idle);

    Outcome::Committed
}

/// Removes by id. Remaining entries keep their `index` values.
fn remove_threshold(state: &mut EditorState, id: ThresholdId) -> Outcome {
    let thresholds = state.thresholds_mut();
    if thresholds.len() <= 1 || !thresholds.iter().any(|t| t.id == id) {
        return Outcome::Ignored;
    }

    thresholds.retain(|t| t.id != id);
    sort_thresholds(thresholds);
    state.set_phase(EditPhase::Idle);
    Outcome::Committed
}

fn change_value(state: &mut EditorState, id: ThresholdId, raw: String) -> Outcome {
    let Some(threshold) = state.find_mut(id) else {
        return Outcome::Ignored;
    };

    // No resort here: the row being typed into must stay put until blur
    threshold.value = parse_value(&raw);
    state.set_phase(EditPhase::Editing { id, text: raw });
    Outcome::Buffered
}

fn change_color(state: &mut EditorState, id: ThresholdId, color: String) -> Outcome {
    let Some(threshold) = state.find_mut(id) else {
        return Outcome::Ignored;
    };

    threshold.color = color;
    sort_thresholds(state.thresholds_mut());
    state.set_phase(EditPhase::Idle);
    Outcome::Committed
}
