pub mod band;
pub mod color;
pub mod editor;
pub mod palette;
pub mod theme;
pub mod threshold;
pub mod widget;

// Export the data model
pub use threshold::{
    format_value, parse_value, thresholds_from_json, thresholds_to_json, Threshold, ThresholdId,
};

// Export editing
pub use editor::{
    apply, sort_thresholds, Applied, EditPhase, EditorState, Mutation, Outcome, ThresholdsEditor,
};

// Export palettes and band lookup
pub use palette::{ClassicPalette, ListPalette, Palette, BASE_COLOR};
pub use band::band_for;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager};
