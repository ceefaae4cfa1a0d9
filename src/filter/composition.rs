use super::Filter;
use crate::models::SegmentSet;

/// Sequential composition of filters, applied left to right (`FromFilters`).
pub struct Chain {
    filters: Vec<Box<dyn Filter>>,
}

pub fn from_filters(filters: Vec<Box<dyn Filter>>) -> Chain {
    Chain { filters }
}

impl Filter for Chain {
    fn filter(&self, segments: SegmentSet) -> SegmentSet {
        self.filters
            .iter()
            .fold(segments, |acc, f| f.filter(acc))
    }
}
