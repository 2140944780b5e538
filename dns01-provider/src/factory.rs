//! Directory factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::traits::ZoneDirectory;
use crate::types::ProviderCredentials;

#[cfg(feature = "glesys")]
use crate::providers::GlesysProvider;

/// Creates a [`ZoneDirectory`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned directory is wrapped in `Arc<dyn ZoneDirectory>` so it can be handed to
/// services without tying them to a concrete transport.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_provider::{create_directory, ProviderCredentials};
///
/// let directory = create_directory(ProviderCredentials::Glesys {
///     user: "CL12345".to_string(),
///     password: "api-key".to_string(),
/// })?;
/// # Ok::<(), dns01_provider::ProviderError>(())
/// ```
pub fn create_directory(credentials: ProviderCredentials) -> Result<Arc<dyn ZoneDirectory>> {
    match credentials {
        #[cfg(feature = "glesys")]
        ProviderCredentials::Glesys { user, password } => {
            Ok(Arc::new(GlesysProvider::new(user, password)?))
        }
        #[allow(unreachable_patterns)]
        other => Err(ProviderError::InvalidParameter {
            provider: other.provider_id().to_string(),
            param: "provider".to_string(),
            detail: "provider support is not enabled in this build".to_string(),
        }),
    }
}
