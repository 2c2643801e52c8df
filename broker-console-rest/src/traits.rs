use async_trait::async_trait;

use crate::error::Result;
use crate::types::ObjectAttributes;

/// Management REST API
///
/// Paths are relative to the console base URL, as built by
/// [`object_path`](crate::object_path).
#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// `GET <path>`; the broker answers with a JSON array of objects.
    async fn get_objects(&self, path: &str) -> Result<Vec<ObjectAttributes>>;

    /// `DELETE <path>`; any 2xx is success.
    async fn delete_object(&self, path: &str) -> Result<()>;
}
