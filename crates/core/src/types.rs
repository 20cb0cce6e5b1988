use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct EnemyId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, dx: i32, dy: i32) -> Self {
        Pos { y: self.y + dy, x: self.x + dx }
    }

    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

/// One discrete player action, consumed per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Move { dx: i32, dy: i32 },
    Wait,
    Quit,
    InventoryQuery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Death,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PowerKind {
    Attack,
    Health,
    Defense,
    Speed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Sword { bonus: i32 },
    Potion { heal: i32 },
    Power { kind: PowerKind, magnitude: i32 },
}

impl ItemKind {
    pub fn glyph(self) -> char {
        match self {
            ItemKind::Sword { .. } => '/',
            ItemKind::Potion { .. } => '!',
            ItemKind::Power { kind: PowerKind::Attack, .. } => '+',
            ItemKind::Power { kind: PowerKind::Health, .. } => 'h',
            ItemKind::Power { kind: PowerKind::Defense, .. } => 'd',
            ItemKind::Power { kind: PowerKind::Speed, .. } => 's',
        }
    }
}

/// Summary of the last attack resolved during a turn, for the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub attacker: String,
    pub defender: String,
    pub hit: bool,
    pub crit: bool,
    pub damage: i32,
    pub slain: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub message: String,
    pub combat: Option<CombatReport>,
    pub visible: Vec<bool>,
    pub explored: Vec<bool>,
    pub ended: Option<SessionEnd>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("map generation failed: no rooms could be placed")]
    GenerationFailed,
    #[error("session already ended; no further turns can be resolved")]
    SessionOver,
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map {width}x{height} is too small for a {room_min}-tile room with a border")]
    MapTooSmall { width: usize, height: usize, room_min: usize },
    #[error("room_min {room_min} exceeds room_max {room_max}")]
    RoomBoundsInverted { room_min: usize, room_max: usize },
    #[error("room_min must be at least 2 for rooms to have an interior")]
    RoomTooSmall,
    #[error("max_rooms must be at least 1")]
    NoRoomBudget,
    #[error("fov_radius must be at least 1")]
    ZeroFovRadius,
}
