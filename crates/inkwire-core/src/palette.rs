//! Stroke color palette and selection state.

/// The fixed swatch palette, in display order. The first entry is selected
/// at bootstrap so drawing works before any user interaction.
pub const PALETTE: [&str; 7] = [
    "black", "purple", "red", "green", "orange", "yellow", "brown",
];

/// Palette entries plus the currently selected stroke color.
///
/// Selection is validated against the entries, so a click target that does
/// not resolve to a swatch leaves the selected color unchanged.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<String>,
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Create the default palette with the first entry selected.
    pub fn new() -> Self {
        Self::with_entries(PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Create a palette from custom entries. An empty list falls back to
    /// the default palette.
    pub fn with_entries(entries: Vec<String>) -> Self {
        if entries.is_empty() {
            return Self::new();
        }
        Self {
            entries,
            selected: 0,
        }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The currently selected color token.
    pub fn selected(&self) -> &str {
        &self.entries[self.selected]
    }

    /// Index of the currently selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select an entry by index. Returns false for an out-of-range index.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Select an entry by its color token (the swatch `data-color` value).
    ///
    /// Tokens not in the palette are ignored. Returns the selected index on
    /// success.
    pub fn select_token(&mut self, token: &str) -> Option<usize> {
        let index = self.entries.iter().position(|entry| entry == token)?;
        self.selected = index;
        Some(index)
    }
}
