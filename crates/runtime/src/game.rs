//! A playable game session.
//!
//! [`Game`] threads one [`World`] through the lifecycle functions of
//! `droll-core`, starting each delve (and its first descent) on its own and
//! promoting the hero class between delves. Every command either replaces the
//! world wholesale or leaves it untouched.

use std::str::FromStr;

use droll_content::heroes;
use droll_core::{
    DrollError, DrollResult, FixedRange, GameConfig, GameError, HeroRules, HeroSet, Noun,
    RandRange, TreasureKind, World,
};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::rng::SeededRange;

/// Whether the session still accepts commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Play,
    Done,
}

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Descend,
    Retire,
    Retreat,
    /// Invoke the class ability with optional targets.
    Ability(Vec<Noun>),
    /// Apply a hero or treasure to the remaining nouns.
    Apply(Noun, Vec<Noun>),
}

impl Command {
    pub const DESCEND: &'static str = "descend";
    pub const RETIRE: &'static str = "retire";
    pub const RETREAT: &'static str = "retreat";

    /// Parses whitespace-separated tokens.
    pub fn parse(tokens: &[&str]) -> Result<Self> {
        let (&head, rest) = tokens.split_first().ok_or(RuntimeError::EmptyCommand)?;
        let lifecycle = |command, name| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(RuntimeError::NoArgumentsAccepted { command: name })
            }
        };

        match head.to_ascii_lowercase().as_str() {
            Self::DESCEND => lifecycle(Command::Descend, Self::DESCEND),
            Self::RETIRE => lifecycle(Command::Retire, Self::RETIRE),
            Self::RETREAT => lifecycle(Command::Retreat, Self::RETREAT),
            _ => {
                let args = parse_nouns(rest)?;
                match Noun::from_str(head)? {
                    Noun::Ability => Ok(Command::Ability(args)),
                    noun => Ok(Command::Apply(noun, args)),
                }
            }
        }
    }
}

impl FromStr for Command {
    type Err = RuntimeError;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::parse(&tokens)
    }
}

fn parse_nouns(tokens: &[&str]) -> Result<Vec<Noun>> {
    tokens
        .iter()
        .map(|token| Noun::from_str(token).map_err(RuntimeError::from))
        .collect()
}

/// Treasures that act on their own through a command.
const ACTIVE_TREASURES: [TreasureKind; 4] = [
    TreasureKind::Bait,
    TreasureKind::Elixir,
    TreasureKind::Ring,
    TreasureKind::Portal,
];

/// A single game from the first delve until the delve limit.
pub struct Game<R: RandRange = SeededRange> {
    rules: &'static HeroRules,
    config: GameConfig,
    world: World,
    state: GameState,
    rng: R,
}

impl<R: RandRange> Game<R> {
    /// Starts a game for the named hero class, rolling the first party and the
    /// first dungeon level.
    pub fn new(hero: &str, config: GameConfig, rng: R) -> Result<Self> {
        let rules = heroes::lookup(hero).ok_or_else(|| RuntimeError::UnknownHero {
            name: hero.to_string(),
        })?;
        let mut game = Self {
            rules,
            config,
            world: droll_core::new_game(),
            state: GameState::Play,
            rng,
        };
        match game.next_delve()? {
            GameState::Play => Ok(game),
            GameState::Done => Err(DrollError::DelveLimit {
                limit: game.config.max_delves,
            }
            .into()),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn rules(&self) -> &'static HeroRules {
        self.rules
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        droll_core::score(&self.world)
    }

    /// Brief description of the world, omitting empty fields.
    pub fn summary(&self) -> String {
        self.world.to_string()
    }

    /// Prompt-like string naming the class and the score.
    pub fn prompt(&self) -> String {
        format!("({} {:2})", self.rules.name, self.score())
    }

    /// Applies a hero or treasure, e.g. `["fighter", "goblin"]`.
    pub fn apply(&mut self, tokens: &[&str]) -> Result<GameState> {
        let command = Command::parse(tokens)?;
        self.run(command)
    }

    /// Invokes the class ability with optional targets.
    pub fn ability(&mut self, tokens: &[&str]) -> Result<GameState> {
        let args = parse_nouns(tokens)?;
        self.act(Noun::Ability, &args)
    }

    /// Descends to the next depth.
    pub fn descend(&mut self) -> Result<GameState> {
        self.ensure_playing()?;
        let world = droll_core::next_dungeon(
            self.world,
            &self.config,
            self.rules.roll_dungeon,
            &mut self.rng,
        );
        self.world = checked(world)?;
        debug!(depth = self.world.depth, world = %self.world, "descended");
        Ok(GameState::Play)
    }

    /// Retires to the tavern, banking the depth as experience, then starts the
    /// next delve or ends the game.
    pub fn retire(&mut self) -> Result<GameState> {
        self.ensure_playing()?;
        let depth = self.world.depth;
        self.world = checked(droll_core::retire(self.world))?;
        info!(delve = self.world.delve, depth, experience = self.world.experience, "retired");
        self.next_delve()
    }

    /// Abandons the delve without experience, then starts the next delve or
    /// ends the game.
    pub fn retreat(&mut self) -> Result<GameState> {
        self.ensure_playing()?;
        let depth = self.world.depth;
        self.world = checked(droll_core::retreat(self.world))?;
        info!(delve = self.world.delve, depth, "retreated");
        self.next_delve()
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<GameState> {
        let command = line.parse::<Command>()?;
        self.run(command)
    }

    pub fn run(&mut self, command: Command) -> Result<GameState> {
        match command {
            Command::Descend => self.descend(),
            Command::Retire => self.retire(),
            Command::Retreat => self.retreat(),
            Command::Ability(args) => self.act(Noun::Ability, &args),
            Command::Apply(noun, args) => self.act(noun, &args),
        }
    }

    /// Commands that could be issued now.
    ///
    /// Lifecycle commands are probed against a copy of the world with a
    /// [`FixedRange`], so neither the world nor the session's random source
    /// is touched. Heroes and treasures are offered whenever they are held
    /// and the current level still has dice to act upon.
    pub fn feasible_commands(&self) -> Vec<String> {
        let mut commands = Vec::new();
        if self.state == GameState::Done {
            return commands;
        }

        let world = self.world;
        if world.ability {
            commands.push(Noun::ABILITY.to_string());
        }
        let probes: [(&str, DrollResult<World>); 3] = [
            (
                Command::DESCEND,
                droll_core::next_dungeon(world, &self.config, self.rules.roll_dungeon, &mut FixedRange),
            ),
            (Command::RETIRE, droll_core::retire(world)),
            (Command::RETREAT, droll_core::retreat(world)),
        ];
        for (name, probe) in probes {
            if probe.is_ok() {
                commands.push(name.to_string());
            }
        }

        if world.dungeon.is_some_and(|dungeon| !dungeon.is_empty()) {
            commands.extend(self.held_nouns().map(|noun| noun.to_string()));
        }
        debug!(?commands, "probed feasible commands");
        commands
    }

    fn held_nouns(&self) -> impl Iterator<Item = Noun> + '_ {
        let party = self.world.party.unwrap_or_default();
        let treasure = self.world.treasure;
        let heroes = HeroSet::all().heroes().filter(move |hero| {
            party.get(*hero) > 0
                || self
                    .rules
                    .artifacts
                    .iter()
                    .any(|(kind, stands_for)| stands_for == hero && treasure.get(*kind) > 0)
        });
        let treasures = ACTIVE_TREASURES
            .into_iter()
            .filter(move |kind| treasure.get(*kind) > 0);
        heroes
            .map(Noun::Hero)
            .chain(treasures.map(Noun::Treasure))
    }

    fn act(&mut self, noun: Noun, args: &[Noun]) -> Result<GameState> {
        self.ensure_playing()?;
        let world = droll_core::apply(self.rules, self.world, &mut self.rng, noun, args);
        self.world = checked(world)?;
        debug!(%noun, ?args, world = %self.world, "applied");
        Ok(GameState::Play)
    }

    /// Starts the next delve, promoting the class first if it has earned it,
    /// or marks the game finished once the delve limit is reached.
    fn next_delve(&mut self) -> Result<GameState> {
        let started = droll_core::next_delve(
            self.world,
            &self.config,
            self.rules.roll_party,
            &mut self.rng,
        );
        let world = match started {
            Ok(world) => world,
            Err(DrollError::DelveLimit { limit }) => {
                self.state = GameState::Done;
                info!(limit, score = self.score(), hero = self.rules.name, "game over");
                return Ok(GameState::Done);
            }
            Err(err) => return checked(Err(err)),
        };

        let promoted = heroes::advance(self.rules, &world);
        if promoted.name != self.rules.name {
            info!(from = self.rules.name, to = promoted.name, experience = world.experience, "hero advanced");
            self.rules = promoted;
        }

        self.world = checked(droll_core::next_dungeon(
            world,
            &self.config,
            self.rules.roll_dungeon,
            &mut self.rng,
        ))?;
        info!(delve = self.world.delve, hero = self.rules.name, world = %self.world, "delve started");
        Ok(GameState::Play)
    }

    fn ensure_playing(&self) -> Result<()> {
        match self.state {
            GameState::Play => Ok(()),
            GameState::Done => Err(RuntimeError::GameOver),
        }
    }
}

impl Game<SeededRange> {
    /// Starts a game whose randomness replays from `seed`.
    pub fn seeded(hero: &str, config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(hero, config, SeededRange::new(seed))
    }
}

/// Reports a rule violation before handing it to the caller.
fn checked<T>(result: DrollResult<T>) -> Result<T> {
    result.map_err(|err| {
        warn!(code = err.error_code(), severity = err.severity().as_str(), "{err}");
        RuntimeError::Rule(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use droll_core::{DungeonFace, DungeonFaces, HeroKind, PartyFaces, ScriptedRange};

    fn game(hero: &str) -> Game<ScriptedRange> {
        Game::new(hero, GameConfig::default(), ScriptedRange::new([0, 3, 1, 4, 2, 5, 0])).unwrap()
    }

    #[test]
    fn new_game_starts_at_depth_one() {
        let game = game("Default");
        assert_eq!(game.world().delve, 1);
        assert_eq!(game.world().depth, 1);
        assert_eq!(game.world().party.unwrap().total(), 7);
        assert_eq!(game.world().dungeon.unwrap().total(), 1);
        assert_eq!(game.state(), GameState::Play);
    }

    #[test]
    fn unknown_hero_is_rejected() {
        let err = Game::new("Lich", GameConfig::default(), FixedRange).err();
        assert_eq!(
            err,
            Some(RuntimeError::UnknownHero {
                name: "Lich".to_string()
            })
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!("descend".parse::<Command>(), Ok(Command::Descend));
        assert_eq!("  RETIRE ".parse::<Command>(), Ok(Command::Retire));
        assert_eq!(
            "retreat now".parse::<Command>(),
            Err(RuntimeError::NoArgumentsAccepted { command: "retreat" })
        );
        assert_eq!(
            "ability dragon".parse::<Command>(),
            Ok(Command::Ability(vec![Noun::Face(DungeonFace::Dragon)]))
        );
        assert_eq!(
            "fighter goblin".parse::<Command>(),
            Ok(Command::Apply(
                Noun::Hero(HeroKind::Fighter),
                vec![Noun::Face(DungeonFace::Goblin)]
            ))
        );
        assert_eq!("".parse::<Command>(), Err(RuntimeError::EmptyCommand));
        assert!(matches!(
            "wizard goblin".parse::<Command>(),
            Err(RuntimeError::Rule(DrollError::UnknownNoun { .. }))
        ));
    }

    #[test]
    fn failed_commands_leave_the_world_alone() {
        let mut game = game("Default");
        let before = *game.world();
        assert!(game.execute("scroll dragon").is_err());
        assert!(game.execute("ring").is_err());
        assert_eq!(*game.world(), before);
    }

    #[test]
    fn probing_consumes_no_randomness() {
        let game = game("Default");
        let before = game.rng.consumed();
        let world = *game.world();
        let _ = game.feasible_commands();
        assert_eq!(game.rng.consumed(), before);
        assert_eq!(*game.world(), world);
    }

    #[test]
    fn feasible_commands_follow_the_world() {
        let mut game = game("Default");
        game.world = game
            .world
            .with_dungeon(DungeonFaces::zero().with(DungeonFace::Goblin, 1))
            .with_party(PartyFaces::zero().with(HeroKind::Fighter, 1))
            .with_treasure(TreasureKind::Sword, 1)
            .with_treasure(TreasureKind::Elixir, 1);
        let commands = game.feasible_commands();
        assert_eq!(commands, ["ability", "retreat", "fighter", "elixir"]);

        game.world = game.world.with_dungeon(DungeonFaces::zero());
        let commands = game.feasible_commands();
        assert_eq!(commands, ["ability", "descend", "retire"]);
    }

    #[test]
    fn seasoned_knight_becomes_dragon_slayer() {
        let mut game = game("Knight");
        game.world = World {
            experience: 4,
            ..game.world
        }
        .with_dungeon(DungeonFaces::zero());
        assert_eq!(game.retire(), Ok(GameState::Play));
        assert_eq!(game.world().experience, 5);
        assert_eq!(game.rules().name, "DragonSlayer");
        assert_eq!(game.world().delve, 2);
        assert!(game.world().ability);
    }

    #[test]
    fn prompt_names_class_and_score() {
        let game = game("knight");
        assert_eq!(game.prompt(), "(Knight  0)");
    }
}
