//! Impactors headless runner
//!
//! Plays one session with a scripted pilot, feeding events to a logging audio
//! sink and batching draw data each frame. Usage:
//!
//! ```text
//! RUST_LOG=info impactors [tuning.json] [seed]
//! ```

use std::error::Error;

use impactors::assets::SpriteSheet;
use impactors::audio::{AudioSink, LogAudio};
use impactors::consts::*;
use impactors::renderer::InstanceBuffer;
use impactors::sim::{GameEvent, GameState, Keys, TickInput, start, tick};
use impactors::{HighScore, Tuning, TuningError};

/// Seconds of play before the runner gives up on a session
const SESSION_LIMIT: f32 = 120.0;
/// Simulated display refresh
const FRAME_DT: f32 = 1.0 / 30.0;

/// Game instance holding all state
struct Game {
    state: GameState,
    audio: LogAudio,
    frame: InstanceBuffer,
    accumulator: f32,
    previous_keys: Keys,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, high: HighScore) -> Result<Self, TuningError> {
        let mut state = GameState::with_config(seed, tuning, Box::new(SpriteSheet::standard()), high)?;
        start(&mut state);
        Ok(Self {
            state,
            audio: LogAudio::new(),
            frame: InstanceBuffer::new(),
            accumulator: 0.0,
            previous_keys: Keys::default(),
        })
    }

    /// Scripted pilot: sweep the nose around and keep shooting
    fn pilot(&self) -> Keys {
        let t = self.state.time_ticks;
        Keys {
            rotate_left: t % 240 < 120,
            rotate_right: false,
            thrust: t % 180 < 15,
            fire: t % 12 < 6,
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let held = self.pilot();
            let input = TickInput::from_keys(held, self.previous_keys);
            self.previous_keys = held;

            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::Sound(effect) => self.audio.play(effect),
                GameEvent::ScoreChanged(score) => log::debug!("Score: {score}"),
                GameEvent::WaveSpawned { difficulty } => log::debug!("Wave {difficulty} incoming"),
                GameEvent::AlienSpawned(id) => log::debug!("Alien {id:?} incoming"),
                GameEvent::PlayerDestroyed => log::debug!("Ship lost"),
                GameEvent::GameOver => log::debug!("Showing game over"),
            }
        }
    }

    fn render(&mut self) {
        self.frame.clear();
        self.state.entities.draw(&mut self.frame);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Impactors (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("Loaded tuning from {path}");
            Tuning::from_json(&json)?
        }
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse::<u64>()?,
        None => 12345,
    };

    let mut game = Game::new(seed, tuning, HighScore::new())?;
    let mut elapsed = 0.0;
    let mut peak_instances = 0;
    while elapsed < SESSION_LIMIT && !game.state.is_game_over() {
        game.update(FRAME_DT);
        game.render();
        peak_instances = peak_instances.max(game.frame.len());
        elapsed += FRAME_DT;
    }

    log::info!(
        "Session over after {:.1}s: score {}, difficulty {}, {} sounds, up to {} sprites ({} bytes) per frame",
        elapsed,
        game.state.score(),
        game.state.difficulty,
        game.audio.played(),
        peak_instances,
        game.frame.as_bytes().len(),
    );
    let high = game.state.into_high_score();
    log::info!("High score: {}", high.best());

    Ok(())
}
