use super::model::CourseCatalog;

// ---------------------------------------------------------------------------
// Filter predicate: the applied listing query
// ---------------------------------------------------------------------------

/// The set of constraints currently applied to the listing.
///
/// `None` means "no constraint". `level` and `format` are kept as raw code
/// strings so that unknown codes coming from a pasted query string degrade to
/// a never-matching constraint instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub category: Option<String>,
    pub level: Option<String>,
    pub format: Option<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub search: Option<String>,
}

impl CourseQuery {
    /// Whether any constraint is active.
    pub fn is_empty(&self) -> bool {
        *self == CourseQuery::default()
    }
}

/// Return indices of courses that pass all active constraints.
///
/// A course passes when:
/// * every `Some` field matches it (category/level/format equality,
///   `price_from` inside the requested range, case-insensitive title
///   substring for `search`);
/// * `None` fields impose nothing.
pub fn filtered_indices(catalog: &CourseCatalog, query: &CourseQuery) -> Vec<usize> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    catalog
        .courses
        .iter()
        .enumerate()
        .filter(|(_, course)| {
            if let Some(cat) = &query.category {
                if course.category != *cat {
                    return false;
                }
            }
            if let Some(level) = &query.level {
                if course.level.code() != level {
                    return false;
                }
            }
            if let Some(format) = &query.format {
                if course.format.code() != format {
                    return false;
                }
            }
            if let Some(min) = query.price_min {
                if course.price_from < min {
                    return false;
                }
            }
            if let Some(max) = query.price_max {
                if course.price_from > max {
                    return false;
                }
            }
            if let Some(needle) = &needle {
                if !course.title.to_lowercase().contains(needle) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Course, Format, Level};

    fn catalog() -> CourseCatalog {
        let mk = |slug: &str, cat: &str, level: Level, format: Format, price: u32| Course {
            slug: slug.into(),
            title: format!("Course {slug}"),
            provider: String::new(),
            category: cat.into(),
            level,
            format,
            price_from: price,
            duration: String::new(),
            tags: Vec::new(),
            short_desc: String::new(),
        };
        CourseCatalog::from_courses(vec![
            mk("a", "ml", Level::Beginner, Format::Online, 0),
            mk("b", "ml", Level::Pro, Format::Offline, 45_000),
            mk("c", "nlp", Level::Middle, Format::Mixed, 12_000),
            mk("d", "nlp", Level::Pro, Format::Online, 90_000),
        ])
    }

    #[test]
    fn empty_query_passes_everything() {
        let idx = filtered_indices(&catalog(), &CourseQuery::default());
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn all_constraints_must_match() {
        let query = CourseQuery {
            category: Some("nlp".into()),
            level: Some("pro".into()),
            ..CourseQuery::default()
        };
        assert_eq!(filtered_indices(&catalog(), &query), vec![3]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let query = CourseQuery {
            price_min: Some(12_000),
            price_max: Some(45_000),
            ..CourseQuery::default()
        };
        assert_eq!(filtered_indices(&catalog(), &query), vec![1, 2]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let query = CourseQuery {
            search: Some("course B".into()),
            ..CourseQuery::default()
        };
        assert_eq!(filtered_indices(&catalog(), &query), vec![1]);
    }

    #[test]
    fn unknown_level_code_matches_nothing() {
        let query = CourseQuery {
            level: Some("guru".into()),
            ..CourseQuery::default()
        };
        assert!(filtered_indices(&catalog(), &query).is_empty());
    }
}
