use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use super::model::{Course, CourseCatalog, Format, Level};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a course catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "slug": ..., "title": ..., "level": "pro", ... }, ...]`
/// * `.csv`  – header row with the same column names; `tags` is a
///   semicolon-separated list
pub fn load_file(path: &Path) -> Result<CourseCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of course records.
///
/// ```json
/// [
///   {
///     "slug": "intro-to-nn",
///     "title": "Введение в нейросети",
///     "provider": "Нетология",
///     "category": "ml",
///     "level": "beginner",
///     "format": "online",
///     "price_from": 4900,
///     "duration": "2 месяца",
///     "tags": ["python", "pytorch"],
///     "short_desc": "..."
///   }
/// ]
/// ```
fn load_json(path: &Path) -> Result<CourseCatalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let courses: Vec<Course> = serde_json::from_str(&text).context("parsing JSON catalog")?;
    Ok(CourseCatalog::from_courses(courses))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; `tags` holds semicolon-separated
/// values: `"python;pytorch"`. Missing optional columns are left empty.
fn load_csv(path: &Path) -> Result<CourseCatalog> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| headers.iter().position(|h| h == name);

    let slug_idx = col("slug").context("CSV missing 'slug' column")?;
    let title_idx = col("title").context("CSV missing 'title' column")?;
    let category_idx = col("category").context("CSV missing 'category' column")?;
    let level_idx = col("level").context("CSV missing 'level' column")?;
    let format_idx = col("format").context("CSV missing 'format' column")?;
    let price_idx = col("price_from").context("CSV missing 'price_from' column")?;
    let provider_idx = col("provider");
    let duration_idx = col("duration");
    let tags_idx = col("tags");
    let desc_idx = col("short_desc");

    let mut courses = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        let opt_field = |idx: Option<usize>| idx.map(field).unwrap_or_default();

        let level = Level::from_str(record.get(level_idx).unwrap_or(""))
            .with_context(|| format!("CSV row {row_no}"))?;
        let format = Format::from_str(record.get(format_idx).unwrap_or(""))
            .with_context(|| format!("CSV row {row_no}"))?;
        let price_from: u32 = record
            .get(price_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'price_from' is not a number"))?;

        let tags: Vec<String> = opt_field(tags_idx)
            .split(';')
            .filter(|t| !t.is_empty())
            .map(|t| t.trim().to_string())
            .collect();

        courses.push(Course {
            slug: field(slug_idx),
            title: field(title_idx),
            provider: opt_field(provider_idx),
            category: field(category_idx),
            level,
            format,
            price_from,
            duration: opt_field(duration_idx),
            tags,
            short_desc: opt_field(desc_idx),
        });
    }

    Ok(CourseCatalog::from_courses(courses))
}
