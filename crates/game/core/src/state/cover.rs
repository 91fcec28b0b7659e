use glam::Vec2;

/// Protection a cover object grants. Ordered so that `Full > Half > None`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CoverTier {
    #[default]
    None,
    Half,
    Full,
}

impl CoverTier {
    /// Highest tier; searches stop early once they see it.
    pub const MAX: Self = Self::Full;
}

/// A static cover object on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cover {
    pub position: Vec2,
    pub tier: CoverTier,
}

impl Cover {
    pub fn new(position: Vec2, tier: CoverTier) -> Self {
        Self { position, tier }
    }
}

/// Immutable collection of cover objects, iterated in a fixed order.
///
/// Order matters: cover searches break ties by first-seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverSet {
    covers: Vec<Cover>,
}

impl CoverSet {
    pub fn new(covers: Vec<Cover>) -> Self {
        Self { covers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cover> {
        self.covers.iter()
    }

    /// Covers no farther than `radius` from `point`.
    pub fn within(&self, point: Vec2, radius: f32) -> impl Iterator<Item = &Cover> {
        self.covers
            .iter()
            .filter(move |cover| cover.position.distance(point) <= radius)
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

impl FromIterator<Cover> for CoverSet {
    fn from_iter<I: IntoIterator<Item = Cover>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
