/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Delves a single game may start.
    pub max_delves: u32,
    /// Deepest level reachable within one delve.
    pub max_depth: u32,
    /// Party dice rolled at the start of every delve.
    pub party_dice: u32,
    /// Upper bound on dungeon dice in play, dragons included.
    pub max_dungeon_dice: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_DELVES: u32 = 3;
    pub const DEFAULT_MAX_DEPTH: u32 = 10;
    pub const DEFAULT_PARTY_DICE: u32 = 7;
    pub const DEFAULT_MAX_DUNGEON_DICE: u32 = 7;

    pub const fn new() -> Self {
        Self {
            max_delves: Self::DEFAULT_MAX_DELVES,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            party_dice: Self::DEFAULT_PARTY_DICE,
            max_dungeon_dice: Self::DEFAULT_MAX_DUNGEON_DICE,
        }
    }

    /// Dungeon dice rolled on reaching `depth` while `dragons` dice already
    /// sit on the dragon face.
    pub fn dungeon_dice(&self, depth: u32, dragons: u32) -> u32 {
        self.max_dungeon_dice.saturating_sub(dragons).min(depth)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
