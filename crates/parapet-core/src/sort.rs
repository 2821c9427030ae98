use std::collections::HashMap;

/// Query parameter naming the sort target column
pub const SORT_COLUMN_PARAM: &str = "sort.column";
/// Query parameter naming the sort direction
pub const SORT_DIRECTION_PARAM: &str = "sort.direction";

/// Sort direction; wire literals are exactly `ASC` / `DESC`
///
/// Comparison is exact-case; `desc` does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum SortDirection {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

/// A validated sort directive, ready for the caller's query construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

/// Validate a client sort directive against an allow-list of columns
///
/// Returns `None` rather than an error when the directive is absent, names
/// a column outside `allowed_columns`, or carries a direction other than
/// the exact literals. The three outcomes are indistinguishable: an
/// invalid sort is ignored, not rejected. Never touches persistence.
pub fn validate_sort(params: &HashMap<String, String>, allowed_columns: &[&str]) -> Option<SortSpec> {
    let column = params.get(SORT_COLUMN_PARAM)?;
    let direction = params.get(SORT_DIRECTION_PARAM)?;

    if !allowed_columns.contains(&column.as_str()) {
        return None;
    }

    let direction = direction.parse::<SortDirection>().ok()?;

    Some(SortSpec {
        column: column.clone(),
        direction,
    })
}
