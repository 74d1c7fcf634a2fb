//! Query parameters derived from a page's filters.

use url::form_urlencoded;

/// Ordered `name=value` pairs attached to a GET request.
///
/// Order is preserved so the wire query reads the same as the filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, encoding the value through its `Display` form.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` form, e.g. `vehicle_class=Category+A&start_year=2010`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let query = QueryParams::new()
            .with("vehicle_class", "ALL")
            .with("window", 6)
            .with("start_year", 2010);
        assert_eq!(query.names(), vec!["vehicle_class", "window", "start_year"]);
        assert_eq!(query.get("window"), Some("6"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn encodes_spaces_and_negatives() {
        let query = QueryParams::new()
            .with("vehicle_class", "Category A")
            .with("start_year", -5);
        assert_eq!(
            query.to_query_string(),
            "vehicle_class=Category+A&start_year=-5"
        );
    }
}
