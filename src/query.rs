use url::form_urlencoded;

use crate::data::filter::CourseQuery;
use crate::data::model::{Format, Level};
use crate::form::ALL;

/// Path of the unfiltered listing; the reset control navigates here.
pub const LISTING_PATH: &str = "/courses";

// ---------------------------------------------------------------------------
// Location encoding / parsing
// ---------------------------------------------------------------------------

/// Encode the applied query as a form-urlencoded string, omitting absent
/// parameters. The pair order is fixed so locations are stable.
pub fn encode_query(query: &CourseQuery) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if let Some(v) = &query.category {
        ser.append_pair("category", v);
    }
    if let Some(v) = &query.level {
        ser.append_pair("level", v);
    }
    if let Some(v) = &query.format {
        ser.append_pair("format", v);
    }
    if let Some(v) = query.price_min {
        ser.append_pair("price_min", &v.to_string());
    }
    if let Some(v) = query.price_max {
        ser.append_pair("price_max", &v.to_string());
    }
    if let Some(v) = &query.search {
        ser.append_pair("q", v);
    }
    ser.finish()
}

/// The full listing location for a query: `/courses` when nothing is applied,
/// `/courses?...` otherwise.
pub fn location(query: &CourseQuery) -> String {
    let qs = encode_query(query);
    if qs.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{LISTING_PATH}?{qs}")
    }
}

/// Parse a location (or bare query string) back into a [`CourseQuery`].
///
/// Unknown parameters are ignored; `all`, empty, and non-numeric price
/// values degrade to "no constraint". Never fails.
pub fn parse_query(location: &str) -> CourseQuery {
    let qs = match location.split_once('?') {
        Some((_, q)) => q,
        None if location.starts_with('/') => "",
        None => location,
    };

    let mut query = CourseQuery::default();
    for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
        match key.as_ref() {
            "category" => query.category = select_param(&value),
            "level" => query.level = select_param(&value),
            "format" => query.format = select_param(&value),
            "price_min" => query.price_min = value.parse().ok(),
            "price_max" => query.price_max = value.parse().ok(),
            "q" => query.search = select_param(&value),
            _ => {}
        }
    }
    query
}

fn select_param(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Active filter summary
// ---------------------------------------------------------------------------

/// One applied filter, described for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub name: &'static str,
    pub value: String,
    pub label: String,
}

impl ActiveFilter {
    fn new(name: &'static str, value: impl Into<String>, label: String) -> Self {
        ActiveFilter {
            name,
            value: value.into(),
            label,
        }
    }
}

/// Summarize the applied query as ordered, human-readable entries.
///
/// Known level/format codes are shown with their display labels; unknown
/// codes pass through verbatim. Absent parameters produce no entry.
pub fn active_filters(query: &CourseQuery) -> Vec<ActiveFilter> {
    let mut entries = Vec::new();

    if let Some(v) = &query.category {
        entries.push(ActiveFilter::new(
            "category",
            v.clone(),
            format!("Категория: {v}"),
        ));
    }
    if let Some(v) = &query.level {
        let shown = v.parse::<Level>().map(Level::label).unwrap_or(v.as_str());
        entries.push(ActiveFilter::new(
            "level",
            v.clone(),
            format!("Уровень: {shown}"),
        ));
    }
    if let Some(v) = &query.format {
        let shown = v.parse::<Format>().map(Format::label).unwrap_or(v.as_str());
        entries.push(ActiveFilter::new(
            "format",
            v.clone(),
            format!("Формат: {shown}"),
        ));
    }
    if let Some(v) = query.price_min {
        entries.push(ActiveFilter::new(
            "price_min",
            v.to_string(),
            format!("Цена от: {v} ₽"),
        ));
    }
    if let Some(v) = query.price_max {
        entries.push(ActiveFilter::new(
            "price_max",
            v.to_string(),
            format!("Цена до: {v} ₽"),
        ));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_known_codes_with_labels() {
        let query = parse_query("/courses?level=pro&price_min=500");
        let entries = active_filters(&query);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Уровень: Профессионал", "Цена от: 500 ₽"]);
        assert_eq!(entries[0].name, "level");
        assert_eq!(entries[0].value, "pro");
    }

    #[test]
    fn unknown_codes_pass_through_verbatim() {
        let query = parse_query("format=hybrid");
        let entries = active_filters(&query);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Формат: hybrid");
    }

    #[test]
    fn all_valued_and_absent_parameters_are_omitted() {
        let query = parse_query("/courses?category=all&level=&price_max=abc");
        assert!(query.is_empty());
        assert!(active_filters(&query).is_empty());
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let query = parse_query("/courses?utm_source=x&level=middle");
        assert_eq!(query.level.as_deref(), Some("middle"));
        assert_eq!(query.category, None);
    }

    #[test]
    fn location_round_trips() {
        let query = CourseQuery {
            category: Some("ml".into()),
            level: Some("pro".into()),
            price_min: Some(500),
            search: Some("глубокое обучение".into()),
            ..CourseQuery::default()
        };
        let loc = location(&query);
        assert!(loc.starts_with("/courses?category=ml&level=pro&price_min=500&q="));
        assert_eq!(parse_query(&loc), query);
    }

    #[test]
    fn empty_query_maps_to_bare_listing_path() {
        assert_eq!(location(&CourseQuery::default()), "/courses");
        assert_eq!(parse_query("/courses"), CourseQuery::default());
    }

    #[test]
    fn spaces_use_plus_encoding() {
        let query = CourseQuery {
            search: Some("нейронные сети".into()),
            ..CourseQuery::default()
        };
        let qs = encode_query(&query);
        assert!(qs.contains('+'), "query was: {qs}");
        assert_eq!(parse_query(&qs).search.as_deref(), Some("нейронные сети"));
    }
}
