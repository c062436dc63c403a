// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constants and the load-time layout policy.

/// Fixed layout constants shared by layout, hit testing and mutation.
///
/// All values are in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Minimum node width.
    pub min_width: f64,
    /// Minimum node height.
    pub min_height: f64,
    /// Gap between siblings, and between children and their parent's border.
    pub padding: f64,
    /// Height of the band at the top of a node reserved for its label.
    pub title_band: f64,
    /// Corner radius of nodes that have children.
    pub default_radius: f64,
    /// Corner radius of leaf nodes.
    pub leaf_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 40.0,
            min_height: 30.0,
            padding: 10.0,
            title_band: 20.0,
            default_radius: 10.0,
            leaf_radius: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum node size.
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width.max(0.0);
        self.min_height = height.max(0.0);
        self
    }

    /// Set the padding around and between children.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set the title-band height.
    pub fn with_title_band(mut self, title_band: f64) -> Self {
        self.title_band = title_band.max(0.0);
        self
    }

    /// Set the corner radii for interior and leaf nodes.
    pub fn with_radii(mut self, interior: f64, leaf: f64) -> Self {
        self.default_radius = interior.max(0.0);
        self.leaf_radius = leaf.max(0.0);
        self
    }
}

/// How node geometry is derived when a tree is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Keep operator-placed positions.
    ///
    /// Children that start left of or above their parent's content area are
    /// shifted into it, and parents grow to contain their children.
    #[default]
    Preserve,
    /// Ignore given positions below the roots: size every node bottom-up and
    /// lay children out in a single row inside their parent.
    Flow,
}
