//! Free-text catalog search.
//!
//! The assistant's local answer path: scan the catalog in its given order
//! and return the first line whose name or items mention the query. This is
//! deliberately a linear first-match scan, not relevance ranking; ties are
//! broken purely by catalog order.

use tracing::debug;

use crate::domain::{Catalog, CatalogEntry};

/// A successful catalog match.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch<'a> {
    /// The matched catalog entry.
    pub entry: &'a CatalogEntry,

    /// The first item of the matched entry that mentions the query, for
    /// "you can find {item}" replies.
    ///
    /// `None` when the line matched by name only; that is a legitimate
    /// outcome, not an error.
    pub item: Option<&'a str>,
}

/// Find the line that sells what the query asks for.
///
/// The query is trimmed and ASCII case-folded; empty or whitespace-only
/// queries short-circuit to `None` without scanning. A line matches when
/// its folded name contains the query as a substring, or any of its folded
/// items does. The first match in catalog order wins.
///
/// The matched item is found by a second, independent scan over the
/// winning entry's items only.
pub fn find_line<'a>(query: &str, catalog: &'a Catalog) -> Option<LineMatch<'a>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let needle = trimmed.to_ascii_lowercase();

    let entry = catalog.entries().iter().find(|entry| {
        entry.name.to_ascii_lowercase().contains(&needle)
            || entry
                .items
                .iter()
                .any(|item| item.to_ascii_lowercase().contains(&needle))
    })?;

    let item = entry
        .items
        .iter()
        .find(|item| item.to_ascii_lowercase().contains(&needle))
        .map(String::as_str);

    debug!(line = %entry.id, item = item.unwrap_or(""), "catalog match");

    Some(LineMatch { entry, item })
}

/// Find every line a longer phrase might refer to.
///
/// Unlike [`find_line`], containment runs both ways: a line matches when
/// the query contains its name or one of its items, as well as the other
/// way round. This suits full-sentence queries like
/// "where is the godly line". Results keep catalog order.
pub fn search_lines<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_ascii_lowercase();

    catalog
        .entries()
        .iter()
        .filter(|entry| {
            let name = entry.name.to_ascii_lowercase();
            if name.contains(&needle) || needle.contains(&name) {
                return true;
            }
            entry.items.iter().any(|item| {
                let item = item.to_ascii_lowercase();
                item.contains(&needle) || needle.contains(&item)
            })
        })
        .collect()
}
