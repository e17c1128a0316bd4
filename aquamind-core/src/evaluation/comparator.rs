use aquamind_schemas::{catalog::RangeEntry, parameter::Direction};

/// Where a value sits relative to an inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    Below,
    Within,
    Above,
}

impl RangeFit {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            RangeFit::Below => Some(Direction::Low),
            RangeFit::Within => None,
            RangeFit::Above => Some(Direction::High),
        }
    }
}

/// Compares with strict inequalities: a value equal to either bound is within range.
pub fn compare_to_range(value: f64, range: &RangeEntry) -> RangeFit {
    if value < range.min {
        RangeFit::Below
    } else if value > range.max {
        RangeFit::Above
    } else {
        RangeFit::Within
    }
}
