use crate::errors::AtelierResult;
use crate::models::CatalogItem;

/// Read-only catalog collaborator.
///
/// Every query tolerates "no matches" by returning `Ok(vec![])`; an `Err`
/// means the backend itself failed (unreachable, timed out). Callers in the
/// engine treat errors as empty results and move on.
pub trait ICatalog: Send + Sync {
    /// Items whose category, sub-category, or name contains `term`
    /// (case-insensitive). At most `limit` items.
    fn query_by_category(&self, term: &str, limit: usize) -> AtelierResult<Vec<CatalogItem>>;

    /// Items by exact id. Missing ids are silently absent from the result.
    fn query_by_ids(&self, ids: &[String]) -> AtelierResult<Vec<CatalogItem>>;

    /// Newest items first, by `created_at`. At most `limit` items.
    fn query_newest(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>>;

    /// Items whose color tags intersect `colors`. At most `limit` items.
    fn query_by_color(&self, colors: &[String], limit: usize) -> AtelierResult<Vec<CatalogItem>>;
}
