use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use tracing::{debug, info};

use crate::ai::Difficulty;
use crate::career::{AchievementId, CareerTracker};
use crate::commentary::{spawn_commentary, Commentator, CommentaryRequest, FALLBACK_COMMENTARY};
use crate::config::Config;
use crate::game::{
    poll_input, InputAction, MatchEngine, MatchError, MatchEvent, Phase, Snapshot, Step,
};
use crate::storage::{self, KvStore};
use crate::ui::{self, MatchHud, OverlayMessage, Theme};

use super::common::{frame_duration, limit_frame_rate};

/// How the player left the match screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchExit {
    Menu,
    Quit,
}

/// Glue between key presses, the engine, the reveal timer, career tracking
/// and commentary. Holds no terminal state so it can be driven from tests.
pub struct MatchSession<'a> {
    engine: &'a mut MatchEngine,
    tracker: &'a mut CareerTracker,
    store: &'a mut dyn KvStore,
    commentator: Arc<dyn Commentator>,
    snapshot: Snapshot,
    picker_index: usize,
    reveal_delay: Duration,
    reveal_until: Option<Instant>,
    status: Option<String>,
    unlocked: Vec<AchievementId>,
    commentary: Option<Receiver<String>>,
    commentary_text: Option<String>,
}

impl<'a> MatchSession<'a> {
    /// Start a fresh match with `preferred` highlighted in the picker
    pub fn new(
        engine: &'a mut MatchEngine,
        tracker: &'a mut CareerTracker,
        store: &'a mut dyn KvStore,
        commentator: Arc<dyn Commentator>,
        preferred: Difficulty,
        reveal_delay: Duration,
    ) -> Self {
        let snapshot = engine.reset();
        Self {
            engine,
            tracker,
            store,
            commentator,
            snapshot,
            picker_index: picker_index_for(preferred),
            reveal_delay,
            reveal_until: None,
            status: None,
            unlocked: Vec::new(),
            commentary: None,
            commentary_text: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn commentary_text(&self) -> Option<&str> {
        self.commentary_text.as_deref()
    }

    /// Achievements unlocked since this match started
    pub fn unlocked(&self) -> &[AchievementId] {
        &self.unlocked
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal_until.is_some()
    }

    /// Apply one input. Returns `Some` when the player leaves the screen.
    pub fn handle(&mut self, action: InputAction, now: Instant) -> Option<MatchExit> {
        let result = match action {
            InputAction::Quit => return Some(MatchExit::Quit),
            InputAction::Back => return Some(MatchExit::Menu),
            InputAction::NewMatch => {
                self.start_over();
                return None;
            }
            InputAction::Up | InputAction::Down => {
                if self.snapshot.phase == Phase::DifficultySelect {
                    self.move_picker(action == InputAction::Up);
                }
                return None;
            }
            InputAction::Select => match self.snapshot.phase {
                Phase::DifficultySelect => {
                    let difficulty = Difficulty::all()[self.picker_index];
                    self.engine.select_difficulty(difficulty)
                }
                _ => return None,
            },
            InputAction::Difficulty(difficulty) => {
                self.picker_index = picker_index_for(difficulty);
                self.engine.select_difficulty(difficulty)
            }
            InputAction::Toss(hand) => self.engine.resolve_toss(hand),
            InputAction::Choose(choice) => self.engine.choose_bat_or_bowl(choice),
            InputAction::Ball(value) => {
                let result = self.engine.play_ball(value);
                if result.is_ok() {
                    self.reveal_until = Some(now + self.reveal_delay);
                }
                result
            }
        };

        match result {
            Ok(step) => self.accept(step),
            Err(e) => self.reject(e),
        }
        None
    }

    /// Advance timers and collect background results
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.reveal_until {
            if now >= deadline {
                self.reveal_until = None;
                self.snapshot = self.engine.complete_resolution();
            }
        }

        if let Some(rx) = &self.commentary {
            match rx.try_recv() {
                Ok(text) => {
                    self.commentary_text = Some(text);
                    self.commentary = None;
                }
                Err(TryRecvError::Disconnected) => {
                    self.commentary_text = Some(FALLBACK_COMMENTARY.to_string());
                    self.commentary = None;
                }
                Err(TryRecvError::Empty) => {}
            }
        }
    }

    /// Game-over box, shown once the final ball has been revealed
    pub fn overlay(&self) -> Option<OverlayMessage> {
        let Phase::GameOver(result) = self.snapshot.phase else {
            return None;
        };
        if self.is_revealing() {
            return None;
        }

        let mut lines = vec![
            format!(
                "You {}  -  Computer {}",
                self.snapshot.player_score, self.snapshot.computer_score
            ),
            String::new(),
        ];

        for id in &self.unlocked {
            if let Some(achievement) = self.tracker.achievements().get(*id) {
                lines.push(format!("Achievement unlocked: {}", achievement.title));
            }
        }
        if !self.unlocked.is_empty() {
            lines.push(String::new());
        }

        lines.push(
            self.commentary_text
                .clone()
                .unwrap_or_else(|| "The commentators are conferring...".to_string()),
        );
        lines.push(String::new());
        lines.push("N: New match  |  Esc: Menu".to_string());

        Some(OverlayMessage::for_result(result, lines).with_title(result.title()))
    }

    fn accept(&mut self, step: Step) {
        self.status = None;

        let update = self.tracker.apply(&step.events);
        if update.should_persist {
            storage::save_stats(&mut *self.store, self.tracker.stats());
        }
        self.unlocked.extend(update.unlocked);

        for event in &step.events {
            if let MatchEvent::MatchOver {
                result,
                player_score,
                computer_score,
                target,
            } = *event
            {
                info!(?result, player_score, computer_score, "match finished");
                let request = CommentaryRequest::new(result, player_score, computer_score, target);
                self.commentary = Some(spawn_commentary(Arc::clone(&self.commentator), request));
            }
        }

        self.snapshot = step.snapshot;
    }

    fn reject(&mut self, error: MatchError) {
        debug!(%error, "input rejected");
        self.status = Some(error.to_string());
    }

    fn start_over(&mut self) {
        self.snapshot = self.engine.reset();
        self.reveal_until = None;
        self.status = None;
        self.unlocked.clear();
        self.commentary = None;
        self.commentary_text = None;
        self.picker_index = picker_index_for(self.engine.difficulty());
    }

    fn move_picker(&mut self, up: bool) {
        let count = Difficulty::all().len();
        self.picker_index = if up {
            (self.picker_index + count - 1) % count
        } else {
            (self.picker_index + 1) % count
        };
    }
}

fn picker_index_for(difficulty: Difficulty) -> usize {
    Difficulty::all()
        .iter()
        .position(|d| *d == difficulty)
        .unwrap_or(0)
}

/// Run a match against the computer until the player leaves the screen
pub fn run_match_vs_computer<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    theme: Theme,
    mut session: MatchSession,
) -> Result<MatchExit, io::Error> {
    info!("match screen opened");
    let palette = theme.palette();
    let frame_budget = frame_duration(config.display.target_fps);

    loop {
        let frame_start = Instant::now();

        for action in poll_input(frame_budget)? {
            if let Some(exit) = session.handle(action, Instant::now()) {
                return Ok(exit);
            }
        }
        session.tick(Instant::now());

        let overlay = session.overlay();
        let snapshot = session.snapshot().clone();
        let difficulty = session.engine.difficulty();
        let hud = MatchHud {
            difficulty,
            picker_index: session.picker_index,
            revealing: session.is_revealing(),
            status: session.status(),
            overlay: overlay.as_ref(),
        };

        terminal.draw(|f| ui::render_match(f, &snapshot, &hud, &palette))?;

        limit_frame_rate(frame_start, frame_budget);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::CareerStats;
    use crate::commentary::LocalCommentator;
    use crate::game::dice::ScriptedDice;
    use crate::game::{BatOrBowl, Hand, MatchResult, Side};
    use crate::storage::{MemoryStore, STATS_KEY};

    const DELAY: Duration = Duration::from_millis(900);

    /// Toss won with Paper over Rock, then one random face per scripted ball
    fn engine_with_balls(faces: &[u8]) -> MatchEngine {
        let mut dice = ScriptedDice::new().with_pick(0);
        for face in faces {
            dice = dice.random_ball(*face);
        }
        MatchEngine::new(Box::new(dice))
    }

    fn ball(session: &mut MatchSession, value: u8, now: Instant) -> Instant {
        assert_eq!(session.handle(InputAction::Ball(value), now), None);
        let later = now + DELAY;
        session.tick(later);
        later
    }

    fn wait_for_commentary(session: &mut MatchSession) {
        for _ in 0..200 {
            session.tick(Instant::now());
            if session.commentary_text().is_some() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("commentary never arrived");
    }

    #[test]
    fn test_full_match_updates_career_and_store() {
        // Player bats: 6 v 1, 4 v 2, 3 v 3 (out for 10). Computer chases and
        // is out first ball with 5 v 5.
        let mut engine = engine_with_balls(&[1, 2, 3, 5]);
        let mut tracker = CareerTracker::new(CareerStats::default());
        let mut store = MemoryStore::new();
        let mut session = MatchSession::new(
            &mut engine,
            &mut tracker,
            &mut store,
            Arc::new(LocalCommentator),
            Difficulty::Medium,
            DELAY,
        );

        let mut now = Instant::now();
        session.handle(InputAction::Difficulty(Difficulty::Easy), now);
        session.handle(InputAction::Toss(Hand::Paper), now);
        session.handle(InputAction::Choose(BatOrBowl::Bat), now);
        assert_eq!(session.snapshot().phase, Phase::Batting(Side::Player));

        for value in [6, 4, 3] {
            now = ball(&mut session, value, now);
        }
        assert_eq!(session.snapshot().target, 11);
        assert!(session.overlay().is_none());

        session.handle(InputAction::Ball(5), now);
        assert_eq!(session.snapshot().phase, Phase::GameOver(MatchResult::Win));
        // the final ball is still being revealed
        assert!(session.overlay().is_none());
        session.tick(now + DELAY);

        assert_eq!(session.unlocked(), &[AchievementId::FirstVictory]);
        wait_for_commentary(&mut session);
        let overlay = session.overlay().unwrap();
        assert_eq!(overlay.title.as_deref(), Some("You Win!"));
        assert!(overlay
            .lines
            .iter()
            .any(|line| line == "Achievement unlocked: First Victory"));

        drop(session);
        assert_eq!(tracker.stats().wins, 1);
        assert_eq!(tracker.stats().total_runs, 10);
        let saved = store.get(STATS_KEY).unwrap().unwrap();
        assert!(saved.contains("\"wins\":1"));
    }

    #[test]
    fn test_defended_fifty_unlocks_together() {
        // Player bats first: eight sixes and a four against 1s, out on 3 for
        // 52. Computer is out first ball with 5 v 5.
        let mut faces = vec![1; 9];
        faces.extend([3, 5]);
        let mut engine = engine_with_balls(&faces);
        let mut tracker = CareerTracker::new(CareerStats::default());
        let mut store = MemoryStore::new();
        let mut session = MatchSession::new(
            &mut engine,
            &mut tracker,
            &mut store,
            Arc::new(LocalCommentator),
            Difficulty::Easy,
            DELAY,
        );

        let mut now = Instant::now();
        session.handle(InputAction::Select, now);
        session.handle(InputAction::Toss(Hand::Paper), now);
        session.handle(InputAction::Choose(BatOrBowl::Bat), now);

        for value in [6, 6, 6, 6, 6, 6, 6, 6, 4, 3] {
            now = ball(&mut session, value, now);
        }
        assert_eq!(session.snapshot().target, 53);
        assert!(session.unlocked().is_empty());

        ball(&mut session, 5, now);
        assert_eq!(session.snapshot().phase, Phase::GameOver(MatchResult::Win));
        assert_eq!(session.snapshot().player_score, 52);
        assert_eq!(
            session.unlocked(),
            &[AchievementId::FirstVictory, AchievementId::HalfCentury]
        );

        drop(session);
        assert!(!tracker
            .stats()
            .unlocked_achievement_ids
            .contains(&AchievementId::CenturyScorer));
    }

    #[test]
    fn test_ball_during_reveal_is_rejected_with_status() {
        let mut engine = engine_with_balls(&[1]);
        let mut tracker = CareerTracker::new(CareerStats::default());
        let mut store = MemoryStore::new();
        let mut session = MatchSession::new(
            &mut engine,
            &mut tracker,
            &mut store,
            Arc::new(LocalCommentator),
            Difficulty::Easy,
            DELAY,
        );

        let now = Instant::now();
        session.handle(InputAction::Select, now);
        session.handle(InputAction::Toss(Hand::Paper), now);
        session.handle(InputAction::Choose(BatOrBowl::Bat), now);
        session.handle(InputAction::Ball(4), now);
        assert!(session.is_revealing());

        session.handle(InputAction::Ball(2), now + Duration::from_millis(100));
        assert_eq!(
            session.status(),
            Some("the previous ball is still being revealed")
        );
        assert_eq!(session.snapshot().player_score, 4);

        // not yet
        session.tick(now + Duration::from_millis(500));
        assert!(session.is_revealing());
        session.tick(now + DELAY);
        assert!(!session.is_revealing());
    }

    #[test]
    fn test_picker_and_phase_errors() {
        let mut engine = engine_with_balls(&[]);
        let mut tracker = CareerTracker::new(CareerStats::default());
        let mut store = MemoryStore::new();
        let mut session = MatchSession::new(
            &mut engine,
            &mut tracker,
            &mut store,
            Arc::new(LocalCommentator),
            Difficulty::Hard,
            DELAY,
        );
        let now = Instant::now();

        assert_eq!(session.picker_index, 2);
        session.handle(InputAction::Down, now);
        assert_eq!(session.picker_index, 0);
        session.handle(InputAction::Up, now);
        assert_eq!(session.picker_index, 2);

        session.handle(InputAction::Ball(3), now);
        assert_eq!(
            session.status(),
            Some("play_ball is not allowed during difficulty select")
        );

        session.handle(InputAction::Select, now);
        assert!(session.status().is_none());
        assert_eq!(session.engine.difficulty(), Difficulty::Hard);

        assert_eq!(session.handle(InputAction::Back, now), Some(MatchExit::Menu));
        assert_eq!(session.handle(InputAction::Quit, now), Some(MatchExit::Quit));
    }

    #[test]
    fn test_new_match_clears_state() {
        let mut engine = engine_with_balls(&[]);
        let mut tracker = CareerTracker::new(CareerStats::default());
        let mut store = MemoryStore::new();
        let mut session = MatchSession::new(
            &mut engine,
            &mut tracker,
            &mut store,
            Arc::new(LocalCommentator),
            Difficulty::Easy,
            DELAY,
        );
        let now = Instant::now();

        session.handle(InputAction::Toss(Hand::Rock), now);
        assert!(session.status().is_some());

        session.handle(InputAction::NewMatch, now);
        assert!(session.status().is_none());
        assert_eq!(session.snapshot().phase, Phase::DifficultySelect);

        drop(session);
        assert!(store.get(STATS_KEY).unwrap().is_none());
    }
}
