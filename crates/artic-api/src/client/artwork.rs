//! Single artwork lookup.

use artic_core::ArtworkId;

use crate::error::ArticResult;
use crate::http::HttpBackend;
use crate::models::ApiArtworkResponse;
use crate::url::build_artwork_url;

use super::ArticClient;

impl<B: HttpBackend> ArticClient<B> {
    /// Fetch one artwork by id.
    pub(crate) async fn artwork(&self, id: ArtworkId) -> ArticResult<ApiArtworkResponse> {
        let url = build_artwork_url(&self.config, id);
        self.backend.get_json(&url).await
    }
}
