pub mod faces;
pub mod kinds;

// Re-export histogram records
pub use faces::{DungeonFaces, PartyFaces, TreasureCounts};

// Re-export kind enums and command tokens
pub use kinds::{DungeonFace, HeroKind, Noun, TreasureKind};
