use elements::prelude::*;

/// Case-insensitive substring match on record names.
///
/// An empty criterion matches every record.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NameFilter {
    criterion: String,
}

impl NameFilter {
    pub fn new(criterion: &str) -> Self {
        Self {
            criterion: criterion.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &ElementRecord) -> bool {
        record.name.to_lowercase().contains(&self.criterion)
    }
}

/// Records whose name contains `criterion`, ignoring case, in input order
pub fn filter_by_name<'a>(
    records: &'a [ElementRecord],
    criterion: &str,
) -> Vec<&'a ElementRecord> {
    let filter = NameFilter::new(criterion);
    records.iter().filter(|r| filter.matches(r)).collect()
}
