//! Like toggle protocol.
//!
//! The control only changes after the server answers. Every click is tagged
//! with a generation number and only the answer to the newest click may touch
//! the control, so overlapping requests cannot leave it showing an older
//! answer.

use serde::Deserialize;

pub const HTTP_UNAUTHORIZED: u16 = 401;
pub const LIKE_FALLBACK_ERROR: &str = "Failed to like.";

pub fn like_endpoint(api_base: &str, artwork_id: &str) -> String {
    let base = api_base.trim().trim_end_matches('/');
    format!("{base}/api/artwork/{}/like", artwork_id.trim())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub likes_count: u64,
}

impl LikeState {
    /// Reads the state a server-rendered control starts with. Unparseable
    /// count text counts as zero.
    pub fn from_rendered(liked: bool, count_text: &str) -> Self {
        Self {
            liked,
            likes_count: count_text.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    #[error("Please log in to like artworks.")]
    Unauthorized,
    #[error("Error: {0}")]
    Rejected(String),
    #[error("Error: {0}")]
    Transport(String),
    #[error("Error: unexpected response from server ({0})")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct LikeResponse {
    success: bool,
    #[serde(default)]
    liked: Option<bool>,
    #[serde(default)]
    likes_count: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// Maps an HTTP status and body from the like endpoint to the new state.
pub fn classify(status: u16, body: &str) -> Result<LikeState, LikeError> {
    if status == HTTP_UNAUTHORIZED {
        return Err(LikeError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(LikeError::Transport(body.to_string()));
    }
    let response: LikeResponse =
        serde_json::from_str(body).map_err(|err| LikeError::Malformed(err.to_string()))?;
    if !response.success {
        let message = response
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| LIKE_FALLBACK_ERROR.to_string());
        return Err(LikeError::Rejected(message));
    }
    match (response.liked, response.likes_count) {
        (Some(liked), Some(likes_count)) => Ok(LikeState { liked, likes_count }),
        _ => Err(LikeError::Malformed("missing liked or likes_count".to_string())),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikePhase {
    Idle,
    Requesting,
    Settled,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    Apply(LikeState),
    Notify(LikeError),
    /// A newer request was issued after this one; its answer is dropped.
    Stale,
}

#[derive(Clone, Debug)]
pub struct LikeToggle {
    issued: u64,
    phase: LikePhase,
    state: LikeState,
}

impl LikeToggle {
    pub fn new(initial: LikeState) -> Self {
        Self {
            issued: 0,
            phase: LikePhase::Idle,
            state: initial,
        }
    }

    pub fn phase(&self) -> LikePhase {
        self.phase
    }

    /// Last state confirmed by the server, or the rendered one.
    pub fn state(&self) -> LikeState {
        self.state
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.issued = self.issued.saturating_add(1);
        self.phase = LikePhase::Requesting;
        RequestTicket(self.issued)
    }

    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        result: Result<LikeState, LikeError>,
    ) -> Settlement {
        if ticket.0 != self.issued {
            return Settlement::Stale;
        }
        match result {
            Ok(state) => {
                self.phase = LikePhase::Settled;
                self.state = state;
                Settlement::Apply(state)
            }
            Err(err) => {
                self.phase = LikePhase::Failed;
                Settlement::Notify(err)
            }
        }
    }
}

impl Default for LikeToggle {
    fn default() -> Self {
        Self::new(LikeState::default())
    }
}
