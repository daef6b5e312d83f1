//! Pagination walker for list endpoints.
//!
//! Fetches `page[number]=1, 2, ...` from a [`DocumentSource`] and hands each
//! page's resources to a collector until the cursor says there is nothing more.

use crate::error::TfcError;
use crate::jsonapi::{self, Document, Resource};
use tracing::debug;

/// Loop-safety bound on the number of pages fetched in one walk.
pub const MAX_PAGES: u64 = 100;

/// Anything that can GET a JSON:API document by API-relative path.
pub trait DocumentSource {
    fn get_document(&self, path: &str) -> Result<Document, TfcError>;
}

/// Append `page[number]=N` to `base_path`, respecting an existing query string.
pub fn page_path(base_path: &str, page: u64) -> String {
    let sep = if base_path.contains('?') { '&' } else { '?' };
    format!("{}{}page[number]={}", base_path, sep, page)
}

/// Walk every page of `base_path`, invoking `collector` once per page in
/// increasing page order.
///
/// Stops when the pagination cursor is absent, `next-page` is 0, the current
/// page reaches `total-pages`, or after [`MAX_PAGES`]. Any error aborts the walk;
/// pages already delivered to the collector are not revisited.
pub fn walk_pages<S, F>(source: &S, base_path: &str, mut collector: F) -> Result<(), TfcError>
where
    S: DocumentSource + ?Sized,
    F: FnMut(Vec<Resource>),
{
    for page in 1..=MAX_PAGES {
        let doc = source.get_document(&page_path(base_path, page))?;
        let resources = jsonapi::parse_list(&doc)?;
        collector(resources);

        match doc.pagination() {
            Some(p) if !p.is_last_page() => {
                debug!(page, total_pages = p.total_pages, "Paginating");
            }
            _ => break,
        }
    }
    Ok(())
}

/// Convenience wrapper collecting every page into one vector.
pub fn collect_all<S>(source: &S, base_path: &str) -> Result<Vec<Resource>, TfcError>
where
    S: DocumentSource + ?Sized,
{
    let mut all = Vec::new();
    walk_pages(source, base_path, |page| all.extend(page))?;
    Ok(all)
}
