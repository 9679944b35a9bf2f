use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::BubbleExtent;
use crate::core::number::add;

/// Values of one category grouped by stack key, in series order.
pub type StackGroup = IndexMap<String, Vec<f64>>;

/// Numeric input of a value axis.
///
/// `values` holds every plotted value of every series. Stacked charts also
/// provide `stack_groups` (one entry per category) and bubble charts provide
/// `bubbles` with their relative radii.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleData {
    #[serde(default)]
    values: Vec<f64>,
    #[serde(default)]
    stack_groups: Vec<StackGroup>,
    #[serde(default)]
    bubbles: Vec<BubbleExtent>,
}

impl ScaleData {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stack_group(mut self, group: StackGroup) -> Self {
        self.stack_groups.push(group);
        self
    }

    #[must_use]
    pub fn with_stack_groups(mut self, groups: Vec<StackGroup>) -> Self {
        self.stack_groups = groups;
        self
    }

    #[must_use]
    pub fn with_bubbles(mut self, bubbles: Vec<BubbleExtent>) -> Self {
        self.bubbles = bubbles;
        self
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn stack_groups(&self) -> &[StackGroup] {
        &self.stack_groups
    }

    #[must_use]
    pub fn bubbles(&self) -> &[BubbleExtent] {
        &self.bubbles
    }

    /// Every value known to the axis: raw values, stacked values and bubbles.
    pub fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .copied()
            .chain(
                self.stack_groups
                    .iter()
                    .flat_map(|group| group.values().flatten().copied()),
            )
            .chain(self.bubbles.iter().map(|bubble| bubble.value))
    }

    /// Number of non-finite values that the engine will ignore.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.all_values().filter(|value| !value.is_finite()).count()
    }

    /// Per category and stack key: the sum of the positive values followed by
    /// the sum of the negative values.
    #[must_use]
    pub fn stack_sums(&self) -> Vec<f64> {
        let mut sums = Vec::with_capacity(self.stack_groups.len() * 2);
        for group in &self.stack_groups {
            for values in group.values() {
                let finite = values.iter().copied().filter(|value| value.is_finite());
                let (plus, minus) = finite.fold((0.0, 0.0), |(plus, minus), value| {
                    if value >= 0.0 {
                        (add(plus, value), minus)
                    } else {
                        (plus, add(minus, value))
                    }
                });
                sums.push(plus);
                sums.push(minus);
            }
        }
        sums
    }
}
