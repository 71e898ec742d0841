//! Resolution tiers and their CDN image identifier codes.
//!
//! The CDN encodes the image size as a fixed token inside the image ID:
//!
//! ```text
//! https://i.scdn.co/image/ab67616d0000b273<hash>
//!                         ^^^^^^^^^^^^^^^^
//!                         640x640 tier code
//! ```

/// Cover resolution tier, ordered from lowest to highest resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoverTier {
    /// 300x300
    Small,
    /// 640x640
    Medium,
    /// Largest available (~2000x2000)
    Max,
}

impl CoverTier {
    /// All tiers, lowest first.
    pub const ALL: [CoverTier; 3] = [CoverTier::Small, CoverTier::Medium, CoverTier::Max];

    /// The image identifier code for this tier.
    pub const fn code(self) -> &'static str {
        match self {
            CoverTier::Small => "ab67616d00001e02",
            CoverTier::Medium => "ab67616d0000b273",
            CoverTier::Max => "ab67616d000082c1",
        }
    }

    /// Nominal edge length in pixels. The max tier varies per asset.
    pub const fn dimensions(self) -> u32 {
        match self {
            CoverTier::Small => 300,
            CoverTier::Medium => 640,
            CoverTier::Max => 2000,
        }
    }

    /// Detect which tier a cover URL points at.
    ///
    /// When more than one code appears, the one occurring first wins.
    pub fn detect(url: &str) -> Option<CoverTier> {
        Self::ALL
            .iter()
            .filter_map(|tier| url.find(tier.code()).map(|pos| (pos, *tier)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, tier)| tier)
    }
}

impl std::fmt::Display for CoverTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoverTier::Small => "small",
            CoverTier::Medium => "medium",
            CoverTier::Max => "max",
        };
        write!(f, "{} ({}px)", name, self.dimensions())
    }
}
