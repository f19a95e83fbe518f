use uuid::Uuid;

/// Per-request data threaded through every service call.
///
/// Cancellation is carried by the future itself: dropping an in-flight
/// operation abandons its pending cache and catalog calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: String,
}

impl RequestContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }

    /// Context with a freshly generated correlation id.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_given_correlation_id() {
        let ctx = RequestContext::new("req-123");
        assert_eq!(ctx.correlation_id(), "req-123");
    }

    #[test]
    fn should_generate_correlation_id_when_missing() {
        let ctx = RequestContext::default();
        assert!(!ctx.correlation_id().is_empty());
    }
}
