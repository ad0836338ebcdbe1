//! Label encoding of categorical columns.

/// Maps each distinct string to its index in the sorted unique list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learns the class list from the given values.
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classes: Vec<String> = values.into_iter().map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Index of `value`, or `None` if it was not seen during fitting.
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
