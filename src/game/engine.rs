use super::{
    action::{Direction, DirectionKey, KeyboardState},
    config::GameConfig,
    state::{GameState, Player, Position},
};
use crate::audio::{Note, Tone};
use anyhow::Result;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

/// Tone length for every cue
const CUE_LENGTH: Duration = Duration::from_millis(80);
/// Food cues play a bit louder than direction cues
const FOOD_VOLUME_BOOST: f32 = 1.3;
/// Random food attempts per grid cell before falling back to a scan
const SPAWN_ATTEMPTS_PER_CELL: usize = 4;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Food was placed this tick
    pub spawned_food: Option<Position>,
    /// The head reached the food and the body grew
    pub ate_food: bool,
    /// Direction the head turned to, if a key was accepted
    pub turned: Option<Direction>,
    /// The body took a movement step
    pub moved: bool,
    /// The head ran into the body
    pub collided: bool,
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has ended, this tick or earlier
    pub terminated: bool,
    /// Tones to hand to the audio layer, in order
    pub tones: Vec<Tone>,
    /// Additional information about the tick
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            tones: Vec::new(),
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine seeded from OS entropy
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state: one segment in the middle, no food
    pub fn reset(&mut self) -> GameState {
        let area = self.config.play_area();
        let head = area.center(self.config.segment_size);
        GameState::new(Player::new(head), area)
    }

    /// Advance the game by one tick
    ///
    /// Once `state.is_over` is set this is a no-op.
    pub fn advance<K>(&mut self, state: &mut GameState, input: &K) -> StepResult
    where
        K: KeyboardState + ?Sized,
    {
        if state.is_over {
            return StepResult::idle(true);
        }

        let mut result = StepResult::idle(false);

        if !input.any_held() {
            state.key_handled = false;
        }

        if state.food.is_none() {
            self.spawn_food(state, &mut result);
        }

        self.consume_food(state, &mut result);
        self.steer(state, input, &mut result);

        state.ticks += 1;
        if state.ticks % self.config.move_period_ticks == 0 {
            self.move_body(state, &mut result);
        }

        result.terminated = state.is_over;
        result
    }

    /// Place food on a random free cell and queue the spawn jingle
    fn spawn_food(&mut self, state: &mut GameState, result: &mut StepResult) {
        let Some(pos) = self.free_cell(state) else {
            warn!(
                "No free cell left for food (body length {})",
                state.player.len()
            );
            return;
        };

        debug!("Food spawned at ({}, {})", pos.x, pos.y);
        state.food = Some(pos);
        result.info.spawned_food = Some(pos);

        let volume = self.config.base_volume * FOOD_VOLUME_BOOST;
        result.tones.push(Tone::new(Note::C4, CUE_LENGTH, volume).with_pause(CUE_LENGTH));
        result.tones.push(Tone::new(Note::C5, CUE_LENGTH, volume).with_pause(CUE_LENGTH));
    }

    /// Sample random offsets inside the area and snap them to the grid,
    /// falling back to a scan once random sampling keeps missing
    fn free_cell(&mut self, state: &GameState) -> Option<Position> {
        let size = self.config.segment_size;
        let area = state.play_area;
        let (columns, rows) = area.cells(size);
        if columns == 0 || rows == 0 {
            return None;
        }

        let width = (columns as f32 * size) as u32;
        let height = (rows as f32 * size) as u32;
        let attempts = columns * rows * SPAWN_ATTEMPTS_PER_CELL;

        for _ in 0..attempts {
            let offset_x = self.rng.gen_range(0..width) as f32;
            let offset_y = self.rng.gen_range(0..height) as f32;
            let candidate = Position::new(
                ((offset_x + area.left) / size).floor() * size,
                ((offset_y + area.top) / size).floor() * size,
            );
            if area.contains(candidate, size) && !state.player.occupies(candidate) {
                return Some(candidate);
            }
        }

        (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (column, row)))
            .map(|(column, row)| area.cell_origin(column, row, size))
            .find(|cell| !state.player.occupies(*cell))
    }

    fn consume_food(&mut self, state: &mut GameState, result: &mut StepResult) {
        let size = self.config.segment_size;
        let Some(food) = state.food else {
            return;
        };
        if !food.overlaps(state.head(), size) {
            return;
        }

        state.food = None;
        state.player.grow(size, &state.play_area);
        state.score += 1;
        result.info.ate_food = true;
        info!(
            "Food eaten, score {} length {}",
            state.score,
            state.player.len()
        );
    }

    /// Turn the head for the first held key that is not on its current axis
    fn steer<K>(&mut self, state: &mut GameState, input: &K, result: &mut StepResult)
    where
        K: KeyboardState + ?Sized,
    {
        for key in DirectionKey::ALL {
            if state.key_handled || !input.is_held(key) {
                continue;
            }

            let requested = key.direction();
            let head = state.player.head_mut();
            if head.direction.shares_axis(requested) {
                continue;
            }

            head.direction = requested;
            state.key_handled = true;
            result.info.turned = Some(requested);
            result.tones.push(Tone::new(
                Note::for_direction(requested),
                CUE_LENGTH,
                self.config.base_volume,
            ));
        }
    }

    /// Step every segment along the direction it had before this tick,
    /// passing directions one segment down the chain
    fn move_body(&mut self, state: &mut GameState, result: &mut StepResult) {
        let size = self.config.segment_size;
        let area = state.play_area;
        let body = &mut state.player.body;

        for i in 0..body.len() {
            body[i].prev_direction = body[i].direction;
            if i > 0 {
                body[i].direction = body[i - 1].prev_direction;
                if body[i].position == body[0].position {
                    state.is_over = true;
                    result.info.collided = true;
                    info!("Game over: self collision, final score {}", state.score);
                    return;
                }
            }

            let part = &mut body[i];
            let stepped = part.position.moved_in_direction(part.prev_direction, size);
            part.position = area.wrap(stepped, size);
        }

        result.info.moved = true;
    }
}
