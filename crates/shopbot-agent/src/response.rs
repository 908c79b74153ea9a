//! Outcome of a completion call.

/// Why a completion call produced no reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionErrorKind {
    /// The provider did not answer within the request timeout.
    Timeout,
    /// The provider rejected the credential.
    AuthError,
    /// The provider throttled the request.
    RateLimited,
    /// The body could not be decoded or held no usable reply.
    MalformedResponse,
    /// Anything else: connection failures, server errors, unexpected statuses.
    Unknown,
}

impl CompletionErrorKind {
    /// Every kind, for exhaustive tests and per-kind reporting.
    pub const ALL: [CompletionErrorKind; 5] = [
        Self::Timeout,
        Self::AuthError,
        Self::RateLimited,
        Self::MalformedResponse,
        Self::Unknown,
    ];
}

impl std::fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::AuthError => write!(f, "auth_error"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::MalformedResponse => write!(f, "malformed_response"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// The provider produced a reply.
    Success {
        /// Generated text from the first choice.
        reply_text: String,
    },
    /// The call failed.
    Failure {
        /// Classified cause.
        kind: CompletionErrorKind,
    },
}

impl CompletionResult {
    /// Create a successful result.
    pub fn success(reply_text: impl Into<String>) -> Self {
        Self::Success {
            reply_text: reply_text.into(),
        }
    }

    /// Create a failed result.
    pub fn failure(kind: CompletionErrorKind) -> Self {
        Self::Failure { kind }
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<std::result::Result<String, CompletionErrorKind>> for CompletionResult {
    fn from(outcome: std::result::Result<String, CompletionErrorKind>) -> Self {
        match outcome {
            Ok(reply_text) => Self::Success { reply_text },
            Err(kind) => Self::Failure { kind },
        }
    }
}
