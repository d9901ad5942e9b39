//! Editor state.
//!
//! Holds the working copy of the host's thresholds, the base color sentinel
//! and the in-progress value edit. Fields are private; only the mutation
//! module changes them.

use crate::palette::{Palette, BASE_COLOR};
use crate::threshold::{Threshold, ThresholdId};

/// Where a value edit stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditPhase {
    /// No value edit in progress
    #[default]
    Idle,
    /// A value field has been typed into but not yet committed
    Editing {
        id: ThresholdId,
        /// Raw text exactly as typed
        text: String,
    },
}

/// Working state of one thresholds editor.
///
/// Invariants:
/// - `thresholds` is never empty
/// - ids are unique and never reused within one state lineage
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    thresholds: Vec<Threshold>,
    base_color: String,
    phase: EditPhase,
    next_id: u64,
}

impl EditorState {
    /// Builds the state from host-supplied thresholds.
    ///
    /// Host data carries no identity, so every entry gets a fresh id. An
    /// empty list is seeded with a single base threshold. The host's order
    /// is kept as is.
    pub fn new<P: Palette + ?Sized>(host: Vec<Threshold>, palette: &P) -> Self {
        let mut thresholds = host;
        if thresholds.is_empty() {
            thresholds.push(Threshold::new(
                ThresholdId::default(),
                0,
                f64::NEG_INFINITY,
                palette.color_for(0),
            ));
        }

        let mut next_id = 0;
        for threshold in &mut thresholds {
            threshold.id = ThresholdId(next_id);
            next_id += 1;
        }

        Self {
            thresholds,
            base_color: BASE_COLOR.to_string(),
            phase: EditPhase::Idle,
            next_id,
        }
    }

    // ===== Queries =====

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    /// Returns true while a value edit is buffered.
    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditPhase::Editing { .. })
    }

    /// Raw text of the in-progress edit, if it belongs to `id`.
    pub fn draft_text(&self, id: ThresholdId) -> Option<&str> {
        match &self.phase {
            EditPhase::Editing { id: editing, text } if *editing == id => Some(text),
            _ => None,
        }
    }

    pub fn find(&self, id: ThresholdId) -> Option<&Threshold> {
        self.thresholds.iter().find(|t| t.id == id)
    }

    // ===== Mutation plumbing (crate only) =====

    pub(crate) fn thresholds_mut(&mut self) -> &mut Vec<Threshold> {
        &mut self.thresholds
    }

    pub(crate) fn find_mut(&mut self, id: ThresholdId) -> Option<&mut Threshold> {
        self.thresholds.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn set_phase(&mut self, phase: EditPhase) {
        self.phase = phase;
    }

    pub(crate) fn allocate_id(&mut self) -> ThresholdId {
        let id = ThresholdId(self.next_id);
        self.next_id += 1;
        id
    }
}
