//! Outbound replies.

/// How the transport should render a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    /// Send the text as is.
    #[default]
    Plain,
    /// Text carries lightweight HTML markup (bold, italic, bullets).
    RichText,
}

/// The single reply produced for an inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    /// Reply text.
    pub text: String,
    /// Rendering hint.
    pub format_hint: FormatHint,
}

impl OutboundReply {
    /// A plain-text reply.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format_hint: FormatHint::Plain,
        }
    }

    /// A reply with markup.
    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format_hint: FormatHint::RichText,
        }
    }
}
