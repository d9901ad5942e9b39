//! Default colors for new thresholds.
//!
//! Colors are looked up by position, not by threshold identity, so inserting
//! a band shifts the default color of every band above it.

/// Position-indexed source of default threshold colors.
pub trait Palette {
    /// Returns the color string for a palette position.
    fn color_for(&self, position: usize) -> String;

    /// Number of distinct colors before positions wrap around.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The classic gauge palette.
const CLASSIC_COLORS: [&str; 56] = [
    "#7EB26D", "#EAB839", "#6ED0E0", "#EF843C", "#E24D42", "#1F78C1", "#BA43A6", "#705DA0",
    "#508642", "#CCA300", "#447EBC", "#C15C17", "#890F02", "#0A437C", "#6D1F62", "#584477",
    "#B7DBAB", "#F4D598", "#70DBED", "#F9BA8F", "#F29191", "#82B5D8", "#E5A8E2", "#AEA2E0",
    "#629E51", "#E5AC0E", "#64B0C8", "#E0752D", "#BF1B00", "#0A50A1", "#962D82", "#614D93",
    "#9AC48A", "#F2C96D", "#65C5DB", "#F9934E", "#EA6460", "#5195CE", "#D683CE", "#806EB7",
    "#3F6833", "#967302", "#2F575E", "#99440A", "#58140C", "#052B51", "#511749", "#3F2B5B",
    "#E0F9D7", "#FCEACA", "#CFFAFF", "#F9E2D2", "#FCE2DE", "#BADFF4", "#F9D9F9", "#DEDAF7",
];

/// Color of the implicit band below every threshold.
pub const BASE_COLOR: &str = "#299c46";

/// Built-in palette; positions past the end wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPalette;

impl Palette for ClassicPalette {
    fn color_for(&self, position: usize) -> String {
        CLASSIC_COLORS[position % CLASSIC_COLORS.len()].to_string()
    }

    fn len(&self) -> usize {
        CLASSIC_COLORS.len()
    }
}

/// A palette backed by an arbitrary list of colors.
///
/// An empty list falls back to the base color for every position.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPalette {
    colors: Vec<String>,
}

impl ListPalette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }
}

impl Palette for ListPalette {
    fn color_for(&self, position: usize) -> String {
        if self.colors.is_empty() {
            return BASE_COLOR.to_string();
        }
        self.colors[position % self.colors.len()].clone()
    }

    fn len(&self) -> usize {
        self.colors.len()
    }
}
