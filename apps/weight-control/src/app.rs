use domain_products::{ProductDispatcher, ProductError, ProductRequest, ProductResponse, ProductResult};
use std::time::Duration;
use tracing::{instrument, warn};

/// Dispatcher plus the per-request deadline every caller goes through
pub struct App {
    dispatcher: ProductDispatcher,
    request_timeout: Duration,
}

impl App {
    pub fn new(dispatcher: ProductDispatcher, request_timeout: Duration) -> Self {
        Self {
            dispatcher,
            request_timeout,
        }
    }

    /// Dispatch `request`, failing with `Internal` once the deadline passes.
    /// The in-flight request is dropped at that point.
    #[instrument(skip(self, request), fields(request = request.kind()))]
    pub async fn execute(&self, request: ProductRequest) -> ProductResult<ProductResponse> {
        match tokio::time::timeout(self.request_timeout, self.dispatcher.dispatch(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.request_timeout.as_millis() as u64, "Request timed out");
                Err(ProductError::Internal(format!(
                    "request timed out after {:?}",
                    self.request_timeout
                )))
            }
        }
    }
}
