use std::borrow::Cow;

/// The selection weight a segment gets when none is given.
pub const DEFAULT_CHANCE: i32 = 100;

/// A raw segment definition, as written by the user.
///
/// Three segments with chances `100`, `60` and `40` share a total
/// weight of `200`, so they are selected 50%, 30% and 20% of the time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "I: serde::Deserialize<'de> + Default"))
)]
pub struct SegmentData<I> {
    /// An opaque asset reference, handed to the renderer untouched.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: I,
    /// Label shown on the piece, handed to the renderer untouched.
    pub description: Cow<'static, str>,
    /// Relative selection weight, nominally within `1..=100`.
    ///
    /// Values of zero or less are treated as `1`.
    #[cfg_attr(feature = "serde", serde(default = "default_chance"))]
    pub chance: i32,
}

#[cfg(feature = "serde")]
fn default_chance() -> i32 {
    DEFAULT_CHANCE
}

impl<I> SegmentData<I> {
    pub fn new(icon: I, description: impl Into<Cow<'static, str>>, chance: i32) -> Self {
        Self {
            icon,
            description: description.into(),
            chance,
        }
    }
}

impl SegmentData<()> {
    /// A segment without an icon.
    pub fn text(description: impl Into<Cow<'static, str>>, chance: i32) -> Self {
        Self::new((), description, chance)
    }
}

/// A single slice of the wheel after setup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<I> {
    pub icon: I,
    pub description: Cow<'static, str>,
    pub(crate) chance: u32,
    pub(crate) index: usize,
    pub(crate) cumulative_weight: u64,
}

impl<I> Segment<I> {
    /// The coerced selection weight.
    pub fn chance(&self) -> u32 {
        self.chance
    }

    /// Position on the wheel, matching the input order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The upper bound of this segment's interval in weight-space.
    pub fn cumulative_weight(&self) -> u64 {
        self.cumulative_weight
    }
}
