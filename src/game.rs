//! Frame driver and session state machine
//!
//! `Idle` → `Running` → `Over`, and back to a fresh `Running` on restart.
//! The host calls [`Game::frame`] from its per-frame callback and stops
//! rescheduling once it returns false.

use crate::highscores::HighScores;
use crate::platform::InputSource;
use crate::renderer::{Drawable, Renderer};
use crate::settings::Settings;
use crate::sim::{Clock, GameEvent, GamePhase, GameState, tick};
use crate::skins::SkinId;

/// Score/lives/status display; never calls back into the game
pub trait StatusSink {
    fn set_score(&mut self, score: u64);
    fn set_lives(&mut self, lives: u32);
    fn on_game_over(&mut self, final_score: u64);
}

/// Game instance holding all session state
pub struct Game<C: Clock> {
    state: GameState,
    clock: C,
    high_scores: HighScores,
}

impl<C: Clock> Game<C> {
    pub fn new(settings: &Settings, clock: C) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(settings.tuning.clone(), seed, settings.skin),
            clock,
            high_scores: HighScores::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Best score seen by this process (not persisted)
    pub fn high_score(&self) -> u64 {
        self.high_scores.top_score().unwrap_or(0)
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Start (or restart) a session; ignored while one is running
    ///
    /// Returns true if a new session began and the host should start
    /// scheduling frames.
    pub fn request_start(&mut self, sink: &mut dyn StatusSink) -> bool {
        if self.state.is_running() {
            return false;
        }
        let now = self.clock.now_ms();
        self.state.begin_session(now);
        self.flush_events(sink);
        true
    }

    /// Change the player's skin by name (unknown names fall back to the default)
    pub fn set_skin(&mut self, name: &str) {
        let skin = SkinId::from_name_or_default(name);
        self.state.player.set_skin(skin);
    }

    /// Run one tick and render it; returns whether to schedule another frame
    pub fn frame(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        sink: &mut dyn StatusSink,
    ) -> bool {
        if !self.state.is_running() {
            return false;
        }

        let now = self.clock.now_ms();
        tick(&mut self.state, &input.tick_input(), now);
        self.render(renderer, input);
        self.flush_events(sink);

        self.state.is_running()
    }

    /// Draw the current world, topped by the start prompt outside a running session
    ///
    /// Hosts call this directly while idle or after game over, when
    /// [`Game::frame`] no longer renders.
    pub fn render(&self, renderer: &mut dyn Renderer, input: &dyn InputSource) {
        let state = &self.state;
        renderer.begin_frame(state.tuning.width, state.tuning.height);

        renderer.draw(Drawable::TouchOverlay {
            pointer: input.pointer(),
        });
        for platform in &state.platforms {
            renderer.draw(Drawable::Platform(platform));
        }
        for item in state.collectibles.iter().filter(|c| !c.collected) {
            renderer.draw(Drawable::Collectible(item));
        }
        for enemy in &state.enemies {
            renderer.draw(Drawable::Enemy(enemy));
        }
        for shot in &state.projectiles {
            renderer.draw(Drawable::Projectile(shot));
        }
        renderer.draw(Drawable::Player {
            player: &state.player,
            shielded: state.player.invincible,
        });

        match state.phase {
            GamePhase::Running => {}
            GamePhase::Idle => renderer.draw(Drawable::StartPrompt { final_score: None }),
            GamePhase::Over => renderer.draw(Drawable::StartPrompt {
                final_score: Some(state.score),
            }),
        }

        renderer.end_frame();
    }

    /// Forward pending simulation events to the status display
    fn flush_events(&mut self, sink: &mut dyn StatusSink) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => sink.set_score(score),
                GameEvent::LivesChanged(lives) => sink.set_lives(lives),
                GameEvent::GameOver { final_score } => {
                    if let Some(rank) = self.high_scores.add_score(final_score, self.state.time_ticks)
                    {
                        log::info!("New high score #{}: {}", rank, final_score);
                    }
                    sink.on_game_over(final_score);
                }
                other => log::trace!("{:?}", other),
            }
        }
    }
}
