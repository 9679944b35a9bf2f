use crate::core::number::{div, mul, multiplier};
use crate::core::{BubbleExtent, Limit, Scale};

/// Moves sub-unit data into integer space so step normalization treats
/// `0.1..0.3` exactly like `1..3`, then moves the chosen scale back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerScaleAdapter {
    multiplier: f64,
}

impl Default for IntegerScaleAdapter {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

impl IntegerScaleAdapter {
    /// Chooses the multiplier from the raw data extremes. Only data entirely
    /// inside `(-1, 1)` is rescaled.
    #[must_use]
    pub fn for_data_limit(data_limit: Limit) -> Self {
        let Limit { min, max } = data_limit;
        let sub_unit = min.abs() < 1.0 && max.abs() < 1.0;
        if !sub_unit || (min == 0.0 && max == 0.0) {
            return Self::default();
        }
        Self {
            multiplier: multiplier(&[min, max]),
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f64 {
        self.multiplier
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.multiplier == 1.0
    }

    #[must_use]
    pub fn scale_value(self, value: f64) -> f64 {
        if self.is_identity() {
            value
        } else {
            mul(value, self.multiplier)
        }
    }

    #[must_use]
    pub fn scale_limit(self, limit: Limit) -> Limit {
        Limit::new(self.scale_value(limit.min), self.scale_value(limit.max))
    }

    #[must_use]
    pub fn scale_bubble(self, bubble: BubbleExtent) -> BubbleExtent {
        BubbleExtent::new(self.scale_value(bubble.value), bubble.radius_ratio)
    }

    /// Divides a scale computed in integer space back to data space.
    #[must_use]
    pub fn restore(self, scale: Scale) -> Scale {
        if self.is_identity() {
            return scale;
        }
        let k = self.multiplier;
        Scale::new(
            Limit::new(div(scale.limit.min, k), div(scale.limit.max, k)),
            div(scale.step, k),
        )
    }
}
