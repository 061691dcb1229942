use crate::domain::models::Date;
use std::collections::HashSet;

/// Every numeric string a guesser could plausibly derive from one date.
///
/// The list is curated rather than generated from permutations: it covers
/// the orderings of day/month/short-year/full-year (plus the two-digit
/// century prefix) that people actually type, and nothing else. Output is
/// a set, so orderings that coincide for a given date collapse.
pub fn date_variants(date: &Date) -> HashSet<String> {
    let day = date.day();
    let month = date.month();
    let year = date.year();
    let short = &year[2..];
    let century = &year[..2];

    let four_digit = [
        format!("{day}{month}"),
        format!("{month}{day}"),
        format!("{short}{month}"),
        format!("{month}{short}"),
        format!("{short}{day}"),
        format!("{day}{short}"),
        year.to_string(),
        format!("{century}{day}"),
        format!("{day}{century}"),
        format!("{month}{century}"),
        format!("{century}{month}"),
    ];

    let six_digit = [
        format!("{day}{month}{short}"),
        format!("{month}{day}{short}"),
        format!("{short}{month}{day}"),
        format!("{short}{day}{month}"),
        format!("{year}{month}"),
        format!("{month}{year}"),
        format!("{year}{day}"),
        format!("{day}{year}"),
        format!("{century}{month}{day}"),
        format!("{century}{day}{month}"),
        format!("{month}{day}{century}"),
        format!("{day}{month}{century}"),
        format!("{century}{short}{month}"),
        format!("{century}{short}{day}"),
    ];

    four_digit.into_iter().chain(six_digit).collect()
}

/// Variant list for display: sorted, optionally restricted to one length.
pub fn sorted_variants(date: &Date, length: Option<usize>) -> Vec<String> {
    let mut out: Vec<String> = date_variants(date)
        .into_iter()
        .filter(|v| length.map(|n| v.len() == n).unwrap_or(true))
        .collect();
    out.sort();
    out
}
