//! Preview session state for the drive explorer.
//!
//! [`PreviewSession`] owns the currently open file preview: which position
//! in the directory's file list it shows and what rendered content arrived
//! for it. Like the directory store it is purely synchronous; the controller
//! resolves content remotely and feeds it back with the [`PreviewTicket`]
//! from [`PreviewSession::begin`].
//!
//! Object URLs minted for media previews are a scoped resource. Every
//! transition that drops a rendered media content hands its URL back to the
//! caller for revocation, so each URL is released exactly once: on close, on
//! replacement by a newer preview, or immediately when a superseded request
//! settles.

/// Media element class for binary previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Map a MIME type to its media class, if it has one.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.split('/').next() {
            Some("image") => Some(Self::Image),
            Some("video") => Some(Self::Video),
            Some("audio") => Some(Self::Audio),
            _ => None,
        }
    }
}

/// Content resolved for a previewed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedContent {
    /// Plain text, rendered as a preformatted block.
    Text(String),
    /// Binary media wrapped in an object URL.
    Media {
        mime: String,
        object_url: String,
        kind: MediaKind,
    },
    /// No inline preview; only the download link is offered.
    Unavailable,
}

impl RenderedContent {
    fn into_object_url(self) -> Option<String> {
        match self {
            Self::Media { object_url, .. } => Some(object_url),
            _ => None,
        }
    }
}

/// Proof that a preview resolution was issued, carrying its sequence stamp.
#[derive(Debug)]
pub struct PreviewTicket {
    seq: u64,
    index: usize,
}

/// Outcome of presenting resolved content to the session.
///
/// Both variants may carry an object URL that the caller must revoke:
/// the replaced content's URL when applied, the discarded result's own URL
/// when stale.
#[derive(Debug, PartialEq, Eq)]
pub enum PresentOutcome {
    Applied { released: Option<String> },
    Stale { discarded: Option<String> },
}

impl PresentOutcome {
    /// The object URL this transition released, regardless of variant.
    pub fn url_to_revoke(self) -> Option<String> {
        match self {
            Self::Applied { released } => released,
            Self::Stale { discarded } => discarded,
        }
    }
}

/// The transient state of a single open, navigable file preview.
#[derive(Clone, Debug, Default)]
pub struct PreviewSession {
    file_index: Option<usize>,
    content: Option<RenderedContent>,
    latest_seq: u64,
    loading: bool,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a preview is open (including one still resolving).
    pub fn is_open(&self) -> bool {
        self.file_index.is_some()
    }

    /// Position of the previewed file in the directory's file list.
    pub fn file_index(&self) -> Option<usize> {
        self.file_index
    }

    /// Content of the open preview once it has resolved.
    pub fn content(&self) -> Option<&RenderedContent> {
        self.content.as_ref()
    }

    /// Whether a probe/content fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Open (or re-target) the preview at `index` in the file list.
    ///
    /// Supersedes any in-flight resolution; the previous content stays
    /// visible until the new result arrives.
    pub fn begin(&mut self, index: usize) -> PreviewTicket {
        self.latest_seq += 1;
        self.file_index = Some(index);
        self.loading = true;
        PreviewTicket {
            seq: self.latest_seq,
            index,
        }
    }

    /// Present resolved content for `ticket`.
    pub fn present(&mut self, ticket: &PreviewTicket, content: RenderedContent) -> PresentOutcome {
        if ticket.seq != self.latest_seq {
            return PresentOutcome::Stale {
                discarded: content.into_object_url(),
            };
        }
        self.file_index = Some(ticket.index);
        self.loading = false;
        let released = self.content.replace(content).and_then(RenderedContent::into_object_url);
        PresentOutcome::Applied { released }
    }

    /// Index reached by stepping `delta` from the current position.
    ///
    /// `None` when no preview is open or the step would leave the file list
    /// (no wraparound).
    pub fn step_target(&self, delta: isize, len: usize) -> Option<usize> {
        let current = self.file_index? as isize;
        let next = current + delta;
        if next < 0 || next as usize >= len {
            return None;
        }
        Some(next as usize)
    }

    /// Close the preview, invalidating any in-flight resolution.
    ///
    /// Returns the object URL of the dropped content for revocation.
    pub fn close(&mut self) -> Option<String> {
        self.latest_seq += 1;
        self.file_index = None;
        self.loading = false;
        self.content.take().and_then(RenderedContent::into_object_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(url: &str) -> RenderedContent {
        RenderedContent::Media {
            mime: "image/png".to_string(),
            object_url: url.to_string(),
            kind: MediaKind::Image,
        }
    }

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("audio/ogg"), Some(MediaKind::Audio));
        assert_eq!(MediaKind::from_mime("application/octet-stream"), None);
        assert_eq!(MediaKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_open_and_present() {
        let mut session = PreviewSession::new();
        let ticket = session.begin(2);
        assert!(session.is_open());
        assert!(session.is_loading());
        assert_eq!(session.file_index(), Some(2));

        let outcome = session.present(&ticket, RenderedContent::Text("hi".to_string()));
        assert_eq!(outcome, PresentOutcome::Applied { released: None });
        assert!(!session.is_loading());
        assert_eq!(
            session.content(),
            Some(&RenderedContent::Text("hi".to_string()))
        );
    }

    #[test]
    fn test_step_bounds() {
        let mut session = PreviewSession::new();
        // Closed session never steps.
        assert_eq!(session.step_target(1, 5), None);

        let _ = session.begin(0);
        assert_eq!(session.step_target(-1, 5), None);
        assert_eq!(session.step_target(1, 5), Some(1));

        let _ = session.begin(4);
        assert_eq!(session.step_target(1, 5), None);
        assert_eq!(session.step_target(-1, 5), Some(3));
        // Index unchanged by out-of-range probing.
        assert_eq!(session.file_index(), Some(4));
    }

    #[test]
    fn test_step_forward_then_back_returns_to_start() {
        let mut session = PreviewSession::new();
        let _ = session.begin(1);
        let up = session.step_target(1, 4).expect("in range");
        let _ = session.begin(up);
        let down = session.step_target(-1, 4).expect("in range");
        assert_eq!(down, 1);
    }

    #[test]
    fn test_stale_present_is_discarded_with_its_url() {
        let mut session = PreviewSession::new();
        let first = session.begin(0);
        let second = session.begin(1);

        // The superseded result must not become visible and its URL comes
        // back for revocation.
        let outcome = session.present(&first, media("blob:first"));
        assert_eq!(
            outcome,
            PresentOutcome::Stale {
                discarded: Some("blob:first".to_string())
            }
        );
        assert!(session.content().is_none());
        assert_eq!(session.file_index(), Some(1));

        let outcome = session.present(&second, media("blob:second"));
        assert_eq!(outcome, PresentOutcome::Applied { released: None });
        assert_eq!(session.content(), Some(&media("blob:second")));
    }

    #[test]
    fn test_replacement_releases_previous_url() {
        let mut session = PreviewSession::new();
        let first = session.begin(0);
        assert_eq!(
            session.present(&first, media("blob:old")),
            PresentOutcome::Applied { released: None }
        );

        let second = session.begin(1);
        let outcome = session.present(&second, media("blob:new"));
        assert_eq!(
            outcome,
            PresentOutcome::Applied {
                released: Some("blob:old".to_string())
            }
        );
    }

    #[test]
    fn test_close_releases_url_and_invalidates_in_flight() {
        let mut session = PreviewSession::new();
        let ticket = session.begin(0);
        assert_eq!(
            session.present(&ticket, media("blob:open")),
            PresentOutcome::Applied { released: None }
        );

        let in_flight = session.begin(1);
        assert_eq!(session.close(), Some("blob:open".to_string()));
        assert!(!session.is_open());
        assert!(session.content().is_none());

        // A resolution landing after close is stale.
        let outcome = session.present(&in_flight, media("blob:late"));
        assert_eq!(
            outcome,
            PresentOutcome::Stale {
                discarded: Some("blob:late".to_string())
            }
        );
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_idle_session_is_a_no_op() {
        let mut session = PreviewSession::new();
        assert_eq!(session.close(), None);
        assert!(!session.is_open());
    }
}
