use super::action::Direction;

/// A grid-aligned position in screen units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `step` units in a direction
    pub fn moved_in_direction(&self, direction: Direction, step: f32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }

    /// True if `other` is less than `size` away on both axes
    pub fn overlaps(&self, other: Position, size: f32) -> bool {
        (self.x - other.x).abs() < size && (self.y - other.y).abs() < size
    }
}

/// Rectangle the body moves within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PlayArea {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Number of whole cells across and down
    pub fn cells(&self, size: f32) -> (usize, usize) {
        (
            (self.width() / size).floor() as usize,
            (self.height() / size).floor() as usize,
        )
    }

    /// Top-left corner of the cell at column/row
    pub fn cell_origin(&self, column: usize, row: usize, size: f32) -> Position {
        Position::new(
            self.left + column as f32 * size,
            self.top + row as f32 * size,
        )
    }

    /// The grid cell closest to the middle of the area
    pub fn center(&self, size: f32) -> Position {
        Position::new(
            ((self.left + self.right) / 2.0 / size).floor() * size,
            ((self.top + self.bottom) / 2.0 / size).floor() * size,
        )
    }

    /// True if a segment of `size` at `pos` lies fully inside
    pub fn contains(&self, pos: Position, size: f32) -> bool {
        pos.x >= self.left
            && pos.x + size <= self.right
            && pos.y >= self.top
            && pos.y + size <= self.bottom
    }

    /// Re-enter a segment that left one edge flush against the opposite edge
    pub fn wrap(&self, pos: Position, size: f32) -> Position {
        let mut wrapped = pos;
        if wrapped.x < self.left {
            wrapped.x = self.right - size;
        }
        if wrapped.x + size > self.right {
            wrapped.x = self.left;
        }
        if wrapped.y < self.top {
            wrapped.y = self.bottom - size;
        }
        if wrapped.y + size > self.bottom {
            wrapped.y = self.top;
        }
        wrapped
    }
}

/// One link of the player's chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub position: Position,
    pub direction: Direction,
    /// Direction this segment had before the last movement step
    pub prev_direction: Direction,
}

impl BodyPart {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
            prev_direction: direction,
        }
    }
}

/// The player's body chain
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Body segments, with head at index 0
    pub body: Vec<BodyPart>,
}

impl Player {
    /// A single-segment player facing the default direction
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![BodyPart::new(head, Direction::default())],
        }
    }

    /// Build a player from explicit segments, head first
    pub fn from_parts(body: Vec<BodyPart>) -> Self {
        assert!(!body.is_empty(), "a player needs at least a head");
        Self { body }
    }

    pub fn head(&self) -> &BodyPart {
        &self.body[0]
    }

    pub fn head_mut(&mut self) -> &mut BodyPart {
        &mut self.body[0]
    }

    pub fn tail(&self) -> &BodyPart {
        &self.body[self.body.len() - 1]
    }

    /// Check if any segment sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.iter().any(|part| part.position == pos)
    }

    /// Append a segment one cell behind the tail, facing the same way
    pub fn grow(&mut self, size: f32, area: &PlayArea) {
        let tail = *self.tail();
        let behind = tail
            .position
            .moved_in_direction(tail.direction.opposite(), size);
        self.body
            .push(BodyPart::new(area.wrap(behind, size), tail.direction));
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the player is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().map(|part| part.position)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub play_area: PlayArea,
    pub food: Option<Position>,
    pub score: u32,
    pub is_over: bool,
    pub ticks: u64,
    /// Set once a direction key has turned the head; cleared when no
    /// direction key is held
    pub key_handled: bool,
}

impl GameState {
    /// Create a new game state with no food and a zero score
    pub fn new(player: Player, play_area: PlayArea) -> Self {
        Self {
            player,
            play_area,
            food: None,
            score: 0,
            is_over: false,
            ticks: 0,
            key_handled: false,
        }
    }

    pub fn head(&self) -> Position {
        self.player.head().position
    }

    pub fn has_food(&self) -> bool {
        self.food.is_some()
    }

    pub fn set_food(&mut self, pos: Position) {
        self.food = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlayArea {
        PlayArea {
            top: 8.0,
            bottom: 120.0,
            left: 8.0,
            right: 120.0,
        }
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(64.0, 64.0);
        assert_eq!(
            pos.moved_in_direction(Direction::North, 8.0),
            Position::new(64.0, 56.0)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::East, 8.0),
            Position::new(72.0, 64.0)
        );
    }

    #[test]
    fn test_overlap_is_strict() {
        let pos = Position::new(64.0, 64.0);
        assert!(pos.overlaps(Position::new(64.0, 64.0), 8.0));
        assert!(pos.overlaps(Position::new(71.0, 57.0), 8.0));
        assert!(!pos.overlaps(Position::new(72.0, 64.0), 8.0));
    }

    #[test]
    fn test_area_geometry() {
        let area = area();
        assert_eq!(area.cells(8.0), (14, 14));
        assert_eq!(area.center(8.0), Position::new(64.0, 64.0));
        assert_eq!(area.cell_origin(13, 0, 8.0), Position::new(112.0, 8.0));
        assert!(area.contains(Position::new(112.0, 112.0), 8.0));
        assert!(!area.contains(Position::new(120.0, 64.0), 8.0));
        assert!(!area.contains(Position::new(0.0, 64.0), 8.0));
    }

    #[test]
    fn test_wraparound() {
        let area = area();
        assert_eq!(
            area.wrap(Position::new(64.0, 0.0), 8.0),
            Position::new(64.0, 112.0)
        );
        assert_eq!(
            area.wrap(Position::new(64.0, 120.0), 8.0),
            Position::new(64.0, 8.0)
        );
        assert_eq!(
            area.wrap(Position::new(0.0, 64.0), 8.0),
            Position::new(112.0, 64.0)
        );
        assert_eq!(
            area.wrap(Position::new(120.0, 64.0), 8.0),
            Position::new(8.0, 64.0)
        );
        assert_eq!(
            area.wrap(Position::new(64.0, 64.0), 8.0),
            Position::new(64.0, 64.0)
        );
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(Position::new(64.0, 64.0));
        assert_eq!(player.len(), 1);
        assert_eq!(player.head().direction, Direction::North);
        assert_eq!(player.head().position, player.tail().position);
    }

    #[test]
    fn test_grow_behind_tail() {
        let mut player = Player::new(Position::new(64.0, 64.0));
        player.head_mut().direction = Direction::East;
        player.grow(8.0, &area());

        assert_eq!(player.len(), 2);
        assert_eq!(player.tail().position, Position::new(56.0, 64.0));
        assert_eq!(player.tail().direction, Direction::East);
    }

    #[test]
    fn test_grow_wraps_at_edge() {
        let mut player = Player::new(Position::new(8.0, 64.0));
        player.head_mut().direction = Direction::East;
        player.grow(8.0, &area());

        assert_eq!(player.tail().position, Position::new(112.0, 64.0));
    }

    #[test]
    fn test_occupancy() {
        let mut player = Player::new(Position::new(64.0, 64.0));
        player.grow(8.0, &area());
        assert!(player.occupies(Position::new(64.0, 64.0)));
        assert!(player.occupies(Position::new(64.0, 72.0)));
        assert!(!player.occupies(Position::new(72.0, 72.0)));
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Player::new(Position::new(64.0, 64.0)), area());
        assert!(!state.is_over);
        assert!(!state.has_food());
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.head(), Position::new(64.0, 64.0));
    }
}
