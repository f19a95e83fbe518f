use business::domain::shared::context::RequestContext;

/// Builds the per-request context, reusing the caller's request id when present.
pub fn request_context(request_id: Option<String>) -> RequestContext {
    match request_id.map(|id| id.trim().to_string()) {
        Some(id) if !id.is_empty() => RequestContext::new(id),
        _ => RequestContext::generate(),
    }
}
