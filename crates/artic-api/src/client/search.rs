//! Search functionality for the collection client.

use crate::error::ArticResult;
use crate::http::HttpBackend;
use crate::models::ApiSearchResponse;
use crate::url::build_search_url;

use super::ArticClient;

impl<B: HttpBackend> ArticClient<B> {
    /// Fetch one page (1-indexed) of search results.
    pub(crate) async fn search_page(
        &self,
        query: &str,
        page: u64,
    ) -> ArticResult<ApiSearchResponse> {
        let url = build_search_url(&self.config, query, page);
        self.backend.get_json(&url).await
    }
}
