/// Direction a body segment travels in
///
/// There is no "stopped" state: a fresh segment faces `North`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    North,
    South,
    East,
    West,
}

/// Axis a direction lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// Returns true if `other` lies on the same axis (same direction or its reverse)
    pub fn shares_axis(&self, other: Direction) -> bool {
        self.axis() == other.axis()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit delta (dx, dy) in screen coordinates, y grows downwards
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::North => (0.0, -1.0),
            Direction::South => (0.0, 1.0),
            Direction::East => (1.0, 0.0),
            Direction::West => (-1.0, 0.0),
        }
    }
}

/// The four logical direction keys the engine polls every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionKey {
    Left,
    Down,
    Right,
    Up,
}

impl DirectionKey {
    /// All keys, in the priority order the engine tests them
    pub const ALL: [DirectionKey; 4] = [
        DirectionKey::Left,
        DirectionKey::Down,
        DirectionKey::Right,
        DirectionKey::Up,
    ];

    pub fn direction(&self) -> Direction {
        match self {
            DirectionKey::Left => Direction::West,
            DirectionKey::Down => Direction::South,
            DirectionKey::Right => Direction::East,
            DirectionKey::Up => Direction::North,
        }
    }
}

/// Keyboard query the engine samples once per tick
pub trait KeyboardState {
    fn is_held(&self, key: DirectionKey) -> bool;

    fn any_held(&self) -> bool {
        DirectionKey::ALL.iter().any(|key| self.is_held(*key))
    }
}

/// No keys held
impl KeyboardState for () {
    fn is_held(&self, _key: DirectionKey) -> bool {
        false
    }
}

/// A fixed set of held keys, handy for scripted input
impl KeyboardState for [DirectionKey] {
    fn is_held(&self, key: DirectionKey) -> bool {
        self.contains(&key)
    }
}

impl<const N: usize> KeyboardState for [DirectionKey; N] {
    fn is_held(&self, key: DirectionKey) -> bool {
        self.contains(&key)
    }
}
