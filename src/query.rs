//! Advanced query string builder
//!
//! Expands a [`SearchParams`] into a single Google query string by appending
//! the advanced operators in a fixed order after the base query. The builder
//! is total: it never fails and never validates operator values, it only
//! assembles tokens. Validation belongs to the tool boundary.

use crate::types::SearchParams;

/// Trim a query and collapse internal whitespace runs to single spaces.
pub fn sanitize_query(q: &str) -> String {
    q.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the full query string from the base query and advanced operators.
///
/// Operator order is fixed: site, filetype, inurl, intitle, related, cache,
/// before, after, exact phrase, exclusions, OR group. Absent or empty fields
/// contribute nothing; the output has no leading, trailing, or doubled
/// spaces.
pub fn build_query(params: &SearchParams) -> String {
    let mut parts: Vec<String> = Vec::new();

    let base = sanitize_query(&params.q);
    if !base.is_empty() {
        parts.push(base);
    }

    let prefixed: [(&str, &Option<String>); 8] = [
        ("site", &params.site),
        ("filetype", &params.filetype),
        ("inurl", &params.inurl),
        ("intitle", &params.intitle),
        ("related", &params.related),
        ("cache", &params.cache),
        ("before", &params.before),
        ("after", &params.after),
    ];
    for (operator, value) in prefixed {
        if let Some(value) = value {
            if !value.is_empty() {
                parts.push(format!("{operator}:{value}"));
            }
        }
    }

    if let Some(exact) = params.exact.as_deref() {
        if !exact.is_empty() {
            parts.push(format!("\"{exact}\""));
        }
    }

    if let Some(exclude) = params.exclude.as_deref() {
        for term in exclude.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            parts.push(format!("-{term}"));
        }
    }

    if let Some(or) = params.or.as_deref() {
        let terms: Vec<&str> = or.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        if !terms.is_empty() {
            parts.push(format!("({})", terms.join(" OR ")));
        }
    }

    parts.join(" ")
}
