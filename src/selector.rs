use crate::{
    error::RouletteError,
    segment::{Segment, SegmentData},
};
use bevy_log::prelude::*;
use rand::Rng;

/// Weighted random selection over a fixed set of segments.
///
/// Segment `i` owns the weight interval
/// `(cumulative_weight[i - 1], cumulative_weight[i]]`, so its
/// probability of selection is `chance / total_weight`.
#[derive(Debug, Clone)]
pub struct WeightedSelector<I> {
    segments: Vec<Segment<I>>,
    total_weight: u64,
}

impl<I> WeightedSelector<I> {
    /// Assign indices, coerce chances and build the cumulative weight table.
    pub fn setup(definitions: Vec<SegmentData<I>>) -> Result<Self, RouletteError> {
        if definitions.is_empty() {
            return Err(RouletteError::EmptyWheel);
        }

        let mut total_weight = 0u64;
        let segments = definitions
            .into_iter()
            .enumerate()
            .map(|(index, data)| {
                let chance = if data.chance <= 0 {
                    debug!(
                        "segment {index} \"{}\" has chance {}, using 1",
                        data.description, data.chance
                    );
                    1
                } else {
                    data.chance as u32
                };

                total_weight += u64::from(chance);
                debug!("({index}) {}: {total_weight}", data.description);

                Segment {
                    icon: data.icon,
                    description: data.description,
                    chance,
                    index,
                    cumulative_weight: total_weight,
                }
            })
            .collect();

        Ok(Self {
            segments,
            total_weight,
        })
    }

    /// Map a roll in weight-space to a segment index.
    ///
    /// Segment `i` is returned when `roll` falls within
    /// `(cumulative_weight[i - 1], cumulative_weight[i]]`.
    /// A roll past the end of the table falls back to index `0`.
    pub fn resolve(&self, roll: u64) -> usize {
        match self
            .segments
            .iter()
            .position(|s| s.cumulative_weight >= roll)
        {
            Some(index) => index,
            None => {
                warn!(
                    "roll {roll} is outside of the table (total {}), falling back to segment 0",
                    self.total_weight
                );
                0
            }
        }
    }

    /// Draw a weighted random segment index.
    ///
    /// The roll is uniform over `total_weight` values, one per unit of weight.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let roll = rng.random_range(1..=self.total_weight);
        self.resolve(roll)
    }

    pub fn segments(&self) -> &[Segment<I>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment<I>> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; empty wheels are rejected at setup.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// The probability that `index` is drawn.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.segment(index)
            .map(|s| s.chance as f64 / self.total_weight as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn selector(chances: &[i32]) -> WeightedSelector<()> {
        WeightedSelector::setup(
            chances
                .iter()
                .enumerate()
                .map(|(i, c)| SegmentData::text(format!("item {i}"), *c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn cumulative_weights() {
        let s = selector(&[100, 60, 40]);
        let weights: Vec<_> = s.segments().iter().map(|s| s.cumulative_weight()).collect();
        assert_eq!(weights, [100, 160, 200]);
        assert_eq!(s.total_weight(), 200);

        let indices: Vec<_> = s.segments().iter().map(|s| s.index()).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn non_positive_chances_become_one() {
        let s = selector(&[0, -5, 3]);
        let chances: Vec<_> = s.segments().iter().map(|s| s.chance()).collect();
        assert_eq!(chances, [1, 1, 3]);
        assert_eq!(s.total_weight(), 5);
        assert_eq!(s.segments()[1].cumulative_weight(), 2);
    }

    #[test]
    fn weights_strictly_increase() {
        let s = selector(&[7, 0, 100, 1, -2, 55]);
        let sum: u64 = s.segments().iter().map(|s| u64::from(s.chance())).sum();

        for pair in s.segments().windows(2) {
            assert!(pair[0].cumulative_weight() < pair[1].cumulative_weight());
        }
        assert_eq!(s.segments().last().unwrap().cumulative_weight(), sum);
        assert_eq!(s.total_weight(), sum);
    }

    #[test]
    fn large_chances_keep_the_exact_sum() {
        let s = selector(&[i32::MAX, i32::MAX, i32::MAX]);
        let max = i32::MAX as u64;

        let weights: Vec<_> = s.segments().iter().map(|s| s.cumulative_weight()).collect();
        assert_eq!(weights, [max, 2 * max, 3 * max]);
        assert_eq!(s.total_weight(), 3 * max);

        for i in 0..3 {
            assert!((s.probability(i).unwrap() - 1.0 / 3.0).abs() < 1e-9);
        }
        assert_eq!(s.resolve(2 * max + 1), 2);
        assert_eq!(s.resolve(3 * max), 2);

        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        for _ in 0..3_000 {
            counts[s.draw(&mut rng)] += 1;
        }
        assert!(counts.iter().all(|c| *c > 800), "{counts:?}");
    }

    #[test]
    fn empty_wheel_is_rejected() {
        let result = WeightedSelector::<()>::setup(Vec::new());
        assert_eq!(result.unwrap_err(), RouletteError::EmptyWheel);
    }

    #[test]
    fn resolve_interval_bounds() {
        let s = selector(&[100, 60, 40]);

        assert_eq!(s.resolve(1), 0);
        assert_eq!(s.resolve(99), 0);
        assert_eq!(s.resolve(100), 0);
        assert_eq!(s.resolve(101), 1);
        assert_eq!(s.resolve(160), 1);
        assert_eq!(s.resolve(161), 2);
        assert_eq!(s.resolve(199), 2);
        assert_eq!(s.resolve(200), 2);
    }

    #[test]
    fn resolve_past_the_end_falls_back() {
        let s = selector(&[100, 60, 40]);
        assert_eq!(s.resolve(201), 0);
        assert_eq!(s.resolve(u64::MAX), 0);
    }

    #[test]
    fn draws_stay_in_range() {
        let s = selector(&[1, 2, 3, 4]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            assert!(s.draw(&mut rng) < s.len());
        }
    }

    #[test]
    fn draws_follow_the_distribution() {
        let s = selector(&[100, 60, 40]);
        let mut rng = StdRng::seed_from_u64(0xfeed);
        let mut counts = [0usize; 3];

        let draws = 200_000;
        for _ in 0..draws {
            counts[s.draw(&mut rng)] += 1;
        }

        for (i, count) in counts.iter().enumerate() {
            let observed = *count as f64 / draws as f64;
            let expected = s.probability(i).unwrap();
            assert!(
                (observed - expected).abs() < 0.01,
                "segment {i}: expected {expected}, observed {observed}"
            );
        }
    }

    #[test]
    fn single_segment_always_wins() {
        let s = selector(&[-3]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            assert_eq!(s.draw(&mut rng), 0);
        }
        assert_eq!(s.probability(0), Some(1.0));
    }
}
