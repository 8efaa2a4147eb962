use serde::Deserialize;

/// Query parameters accepted by GET /api/colleges
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeQueryParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
}

/// Sort orders the listing understands. Anything else is ignored and the
/// listing keeps insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    RatingDesc,
    NameAsc,
    TuitionAsc,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rating" => Some(SortBy::RatingDesc),
            "name" => Some(SortBy::NameAsc),
            "tuition" => Some(SortBy::TuitionAsc),
            _ => None,
        }
    }

    fn order_clause(&self) -> &'static str {
        match self {
            SortBy::RatingDesc => "rating DESC",
            SortBy::NameAsc => "name ASC",
            SortBy::TuitionAsc => "tuition_fee ASC",
        }
    }
}

/// SQL query builder for the college listing.
/// Collects parameterized filters and an optional sort order; no
/// pagination - the listing is unbounded by contract.
pub struct CollegeQueryBuilder {
    base_query: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
    sort: Option<SortBy>,
}

impl CollegeQueryBuilder {
    pub fn new() -> Self {
        Self {
            base_query: "SELECT * FROM colleges".to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            sort: None,
        }
    }

    /// Case-insensitive substring match against name OR location
    pub fn add_search_filter(&mut self, search: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses.push(format!(
            "(name ILIKE ${0} OR location ILIKE ${0})",
            param_index
        ));
        self.params.push(format!("%{}%", search));
    }

    /// Exact match on the college type
    pub fn add_type_filter(&mut self, college_type: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("college_type = ${}", param_index));
        self.params.push(college_type.to_string());
    }

    /// Inclusive lower bound on the derived rating. Params travel as text,
    /// so the comparison casts server-side.
    pub fn add_min_rating(&mut self, min_rating: f64) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("rating >= ${}::float8", param_index));
        self.params.push(min_rating.to_string());
    }

    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort = Some(sort);
    }

    /// Build the final SQL string and its parameters
    pub fn build(&self) -> (String, Vec<String>) {
        let mut query = self.base_query.clone();

        if !self.where_clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.where_clauses.join(" AND "));
        }

        query.push_str(" ORDER BY ");
        match self.sort {
            Some(sort) => query.push_str(sort.order_clause()),
            // Insertion order when no sort was requested
            None => query.push_str("id ASC"),
        }

        (query, self.params.clone())
    }

    /// Assemble a builder straight from the route's query params
    pub fn from_params(params: &CollegeQueryParams) -> Self {
        let mut builder = Self::new();

        if let Some(ref search) = params.search {
            builder.add_search_filter(search);
        }
        if let Some(ref college_type) = params.college_type {
            builder.add_type_filter(college_type);
        }
        if let Some(min_rating) = params.min_rating {
            builder.add_min_rating(min_rating);
        }
        if let Some(sort) = params.sort_by.as_deref().and_then(SortBy::parse) {
            builder.set_sort(sort);
        }

        builder
    }
}

impl Default for CollegeQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_keeps_insertion_order() {
        let builder = CollegeQueryBuilder::new();
        let (query, params) = builder.build();

        assert_eq!(query, "SELECT * FROM colleges ORDER BY id ASC");
        assert!(params.is_empty());
    }

    #[test]
    fn test_search_matches_name_or_location() {
        let mut builder = CollegeQueryBuilder::new();
        builder.add_search_filter("cambridge");
        let (query, params) = builder.build();

        assert!(query.contains("(name ILIKE $1 OR location ILIKE $1)"));
        assert_eq!(params, vec!["%cambridge%".to_string()]);
    }

    #[test]
    fn test_combined_filters_number_params_in_order() {
        let mut builder = CollegeQueryBuilder::new();
        builder.add_search_filter("uni");
        builder.add_type_filter("Public University");
        builder.add_min_rating(4.5);
        let (query, params) = builder.build();

        assert!(query.contains("(name ILIKE $1 OR location ILIKE $1)"));
        assert!(query.contains("college_type = $2"));
        assert!(query.contains("rating >= $3::float8"));
        assert_eq!(
            params,
            vec![
                "%uni%".to_string(),
                "Public University".to_string(),
                "4.5".to_string()
            ]
        );
    }

    #[test]
    fn test_sort_orders() {
        for (key, clause) in [
            ("rating", "ORDER BY rating DESC"),
            ("name", "ORDER BY name ASC"),
            ("tuition", "ORDER BY tuition_fee ASC"),
        ] {
            let mut builder = CollegeQueryBuilder::new();
            builder.set_sort(SortBy::parse(key).unwrap());
            let (query, _) = builder.build();
            assert!(query.ends_with(clause), "{} should produce {}", key, clause);
        }
    }

    #[test]
    fn test_unknown_sort_key_is_ignored() {
        assert_eq!(SortBy::parse("popularity"), None);

        let params = CollegeQueryParams {
            sort_by: Some("popularity".to_string()),
            ..Default::default()
        };
        let (query, _) = CollegeQueryBuilder::from_params(&params).build();
        assert!(query.ends_with("ORDER BY id ASC"));
    }

    #[test]
    fn test_from_params_wires_everything() {
        let params = CollegeQueryParams {
            search: Some("stan".to_string()),
            college_type: Some("Private University".to_string()),
            min_rating: Some(4.0),
            sort_by: Some("rating".to_string()),
        };

        let (query, bound) = CollegeQueryBuilder::from_params(&params).build();
        assert!(query.contains("WHERE"));
        assert!(query.ends_with("ORDER BY rating DESC"));
        assert_eq!(bound.len(), 3);
    }
}
