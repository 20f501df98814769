// Post-match commentary
//
// Commentary is produced off the game thread and never feeds back into
// match state or career stats.

pub mod client;

pub use client::HttpCommentator;

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::game::MatchResult;

/// Shown whenever the commentary service can't deliver
pub const FALLBACK_COMMENTARY: &str =
    "The commentary box has gone quiet - what a match it was, though!";

#[derive(Error, Debug)]
pub enum CommentaryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("could not parse response: {0}")]
    Parse(String),

    #[error("service returned no text")]
    Empty,
}

/// Final scoreline handed to a commentator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryRequest {
    #[serde(skip)]
    pub result: MatchResult,
    pub player_score: u32,
    pub computer_score: u32,
    pub target: u32,
    pub result_title: String,
}

impl CommentaryRequest {
    pub fn new(result: MatchResult, player_score: u32, computer_score: u32, target: u32) -> Self {
        Self {
            result,
            player_score,
            computer_score,
            target,
            result_title: result.title().to_string(),
        }
    }

    /// Free-text summary used as the prompt for text generation
    pub fn summary(&self) -> String {
        format!(
            "Hand cricket match finished. Player scored {}, computer scored {}, target was {}. Result: {}. \
             Give two sentences of lively cricket commentary on this result.",
            self.player_score, self.computer_score, self.target, self.result_title
        )
    }
}

pub trait Commentator: Send + Sync {
    fn commentate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError>;
}

/// Offline commentator built from canned lines
#[derive(Debug, Default)]
pub struct LocalCommentator;

impl Commentator for LocalCommentator {
    fn commentate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let margin = request.player_score.abs_diff(request.computer_score);
        let line = match request.result {
            MatchResult::Draw => format!(
                "Level on {} apiece! Neither side could be separated today.",
                request.player_score
            ),
            MatchResult::Win => {
                if margin >= 30 {
                    format!("A thrashing! You finish {margin} runs clear of the computer.")
                } else {
                    format!("You edge it by {margin} - nerves of steel out there.")
                }
            }
            MatchResult::Loss => {
                if request.player_score == 0 {
                    "Out for a duck... the computer read you like a book.".to_string()
                } else {
                    format!(
                        "The computer takes it. Your {} wasn't quite enough against {}.",
                        request.player_score, request.computer_score
                    )
                }
            }
        };
        Ok(line)
    }
}

/// Ask for commentary, substituting the fixed fallback on any failure
pub fn commentary_or_fallback(commentator: &dyn Commentator, request: &CommentaryRequest) -> String {
    match commentator.commentate(request) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "commentary unavailable");
            FALLBACK_COMMENTARY.to_string()
        }
    }
}

/// Run the commentator on a background thread; the text arrives on the
/// returned channel exactly once.
pub fn spawn_commentary(commentator: Arc<dyn Commentator>, request: CommentaryRequest) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let text = commentary_or_fallback(commentator.as_ref(), &request);
        // Receiver may be gone if the player already left the match screen
        let _ = tx.send(text);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FailingCommentator;

    impl Commentator for FailingCommentator {
        fn commentate(&self, _request: &CommentaryRequest) -> Result<String, CommentaryError> {
            Err(CommentaryError::Transport("connection refused".to_string()))
        }
    }

    #[test]
    fn test_failure_yields_fallback() {
        let request = CommentaryRequest::new(MatchResult::Win, 20, 10, 11);
        assert_eq!(
            commentary_or_fallback(&FailingCommentator, &request),
            FALLBACK_COMMENTARY
        );
    }

    #[test]
    fn test_local_lines_follow_result() {
        let draw = CommentaryRequest::new(MatchResult::Draw, 10, 10, 11);
        assert!(LocalCommentator.commentate(&draw).unwrap().contains("Level on 10"));

        let rout = CommentaryRequest::new(MatchResult::Win, 60, 12, 13);
        assert!(LocalCommentator.commentate(&rout).unwrap().contains("48 runs"));

        let duck = CommentaryRequest::new(MatchResult::Loss, 0, 5, 6);
        assert!(LocalCommentator.commentate(&duck).unwrap().contains("duck"));
    }

    #[test]
    fn test_summary_mentions_scoreline() {
        let request = CommentaryRequest::new(MatchResult::Loss, 7, 12, 8);
        let summary = request.summary();
        assert!(summary.contains("Player scored 7"));
        assert!(summary.contains("target was 8"));
        assert!(summary.contains("You Lose"));
    }

    #[test]
    fn test_spawned_commentary_arrives() {
        let request = CommentaryRequest::new(MatchResult::Win, 20, 10, 11);
        let rx = spawn_commentary(Arc::new(FailingCommentator), request);
        let text = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(text, FALLBACK_COMMENTARY);
    }
}
