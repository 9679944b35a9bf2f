pub mod candidate;
pub mod integer_scale;
pub mod limit;
pub mod number;
pub mod scale_search;
pub mod selector;
pub mod step;
pub mod tick_count;
pub mod tick_pixels;
pub mod types;

pub use candidate::{CandidateContext, ScaleBounds, build_candidate};
pub use integer_scale::IntegerScaleAdapter;
pub use limit::{calculate_limit, data_limit};
pub use scale_search::{ScaleSearch, search_scale};
pub use selector::{candidate_score, select_candidate};
pub use step::normalize_step;
pub use tick_count::{TickCountCandidates, TickDensityTuning, candidate_tick_counts};
pub use tick_pixels::{
    TickOwnership, TickRange, make_band_tick_ownership, make_line_tick_ownership,
    make_tick_pixel_positions,
};
pub use types::{BubbleExtent, ChartKind, Limit, Scale, ScaleCandidate, StackType};
