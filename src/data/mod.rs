/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CourseCatalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CourseCatalog │  Vec<Course>, category index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply CourseQuery → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
