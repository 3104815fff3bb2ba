use uuid::Uuid;

/// Per-request identifiers threaded explicitly through the service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub trace_id: String,
    pub session_id: Option<String>,
    /// Subject of the caller's bearer token, when one was presented.
    pub user_id: Option<String>,
}

impl RequestContext {
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            session_id: None,
            user_id: None,
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::generate()
    }
}
