use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Level / Format – typed catalog codes
// ---------------------------------------------------------------------------

/// Raised when a catalog file carries a level/format code we don't know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {field} code '{code}'")]
pub struct UnknownCode {
    pub field: &'static str,
    pub code: String,
}

/// Course difficulty level. Wire codes are the lowercase variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Middle,
    Pro,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Middle, Level::Pro];

    /// Wire code used in catalog files and query strings.
    pub fn code(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Middle => "middle",
            Level::Pro => "pro",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Начинающий",
            Level::Middle => "Средний",
            Level::Pro => "Профессионал",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownCode {
                field: "level",
                code: s.to_string(),
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Course delivery format. Wire codes are the lowercase variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Online,
    Offline,
    Mixed,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Online, Format::Offline, Format::Mixed];

    /// Wire code used in catalog files and query strings.
    pub fn code(self) -> &'static str {
        match self {
            Format::Online => "online",
            Format::Offline => "offline",
            Format::Mixed => "mixed",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Format::Online => "Онлайн",
            Format::Offline => "Офлайн",
            Format::Mixed => "Смешанный",
        }
    }
}

impl FromStr for Format {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.code() == s)
            .ok_or_else(|| UnknownCode {
                field: "format",
                code: s.to_string(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Course – one row of the catalog
// ---------------------------------------------------------------------------

/// A single published course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub provider: String,
    pub category: String,
    pub level: Level,
    pub format: Format,
    /// Starting price in rubles; 0 means free.
    pub price_from: u32,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub short_desc: String,
}

// ---------------------------------------------------------------------------
// CourseCatalog – the complete loaded catalog
// ---------------------------------------------------------------------------

/// The full parsed catalog with the pre-computed category index.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    /// All courses (rows).
    pub courses: Vec<Course>,
    /// Sorted set of category slugs present in the catalog.
    pub categories: BTreeSet<String>,
}

impl CourseCatalog {
    /// Build the category index from the loaded courses.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let categories = courses.iter().map(|c| c.category.clone()).collect();
        CourseCatalog {
            courses,
            categories,
        }
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_codes_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.code().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn unknown_level_code_is_an_error() {
        let err = "guru".parse::<Level>().unwrap_err();
        assert_eq!(err.code, "guru");
        assert_eq!(err.field, "level");
    }

    #[test]
    fn format_labels_match_codes() {
        assert_eq!("online".parse::<Format>().unwrap().label(), "Онлайн");
        assert_eq!("mixed".parse::<Format>().unwrap().label(), "Смешанный");
    }

    #[test]
    fn catalog_indexes_categories() {
        let mk = |slug: &str, cat: &str| Course {
            slug: slug.into(),
            title: slug.into(),
            provider: String::new(),
            category: cat.into(),
            level: Level::Beginner,
            format: Format::Online,
            price_from: 0,
            duration: String::new(),
            tags: Vec::new(),
            short_desc: String::new(),
        };
        let catalog =
            CourseCatalog::from_courses(vec![mk("a", "ml"), mk("b", "nlp"), mk("c", "ml")]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.categories.iter().cloned().collect::<Vec<_>>(),
            vec!["ml".to_string(), "nlp".to_string()]
        );
    }
}
