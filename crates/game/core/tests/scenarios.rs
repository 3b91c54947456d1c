//! End-to-end rule scenarios and whole-game invariants.
use droll_core::{
    DrollError, DungeonFace, DungeonFaces, FixedRange, GameConfig, HeroKind, HeroRules, Noun,
    PartyFaces, RandRange, ScriptedRange, TreasureCounts, TreasureKind, World, apply, new_game,
    next_delve, next_dungeon, retire, retreat, roll_dungeon, roll_party, score,
};

/// Small linear congruential source so runs are reproducible per seed.
fn lcg(seed: u64) -> impl FnMut(u32, u32) -> u32 {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    move |low, high| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let span = high.saturating_sub(low).max(1) as u64;
        low + ((state >> 33) % span) as u32
    }
}

fn nouns(tokens: &[&str]) -> Vec<Noun> {
    tokens.iter().map(|token| token.parse().unwrap()).collect()
}

fn command(rules: &HeroRules, world: World, rng: &mut dyn RandRange, line: &str) -> Result<World, DrollError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let args = nouns(&tokens[1..]);
    apply(rules, world, rng, tokens[0].parse()?, &args)
}

fn dragon_lair() -> World {
    new_game()
        .with_dungeon(DungeonFaces::from_counts([0, 0, 0, 1, 2, 3]))
        .with_party(PartyFaces::from_counts([2; 6]))
}

fn assert_invariants(world: &World) {
    assert_eq!(
        world.treasure + world.reserve,
        TreasureCounts::INITIAL_RESERVE,
        "treasure and reserve must partition the initial pool: {world}"
    );
    // Counts are unsigned, so underflow panics in debug builds; the bound
    // catches wraparound in release builds.
    if let Some(party) = world.party {
        assert!(party.total() < 64, "party overflow: {world}");
    }
    if let Some(dungeon) = world.dungeon {
        assert!(dungeon.total() < 64, "dungeon overflow: {world}");
    }
}

#[test]
fn new_delve_rolls_seven_party_dice() {
    let mut rng = lcg(4);
    let world = next_delve(new_game(), &GameConfig::default(), roll_party, &mut rng).unwrap();
    assert_eq!(world.party.unwrap().total(), 7);
    assert!(world.ability);
    assert_eq!(world.depth, 0);

    let world = next_dungeon(world, &GameConfig::default(), roll_dungeon, &mut rng).unwrap();
    assert_eq!(world.depth, 1);
    assert_eq!(world.dungeon.unwrap().total(), 1);
}

#[test]
fn three_distinct_heroes_defeat_the_dragon() {
    let rules = HeroRules::default();
    let world = command(&rules, dragon_lair(), &mut lcg(4), "fighter dragon cleric mage").unwrap();
    let party = world.party.unwrap();
    assert_eq!(party.fighter, 1);
    assert_eq!(party.cleric, 1);
    assert_eq!(party.mage, 1);
    assert_eq!(world.dungeon.unwrap().dragon, 0);
    assert_eq!(world.experience, 1);
    assert_eq!(world.treasure.total(), 1);
}

#[test]
fn two_heroes_are_too_few_for_the_dragon() {
    let rules = HeroRules::default();
    assert_eq!(
        command(&rules, dragon_lair(), &mut lcg(4), "fighter dragon cleric"),
        Err(DrollError::WrongHeroCount {
            required: 3,
            given: 2
        })
    );
}

#[test]
fn quaffing_needs_one_name_per_potion() {
    let rules = HeroRules::default();
    let world = dragon_lair();
    assert_eq!(
        command(&rules, world, &mut FixedRange, "cleric potion mage"),
        Err(DrollError::WrongRevivalCount {
            required: 2,
            given: 1
        })
    );
    let world = command(&rules, world, &mut FixedRange, "cleric potion mage thief").unwrap();
    let party = world.party.unwrap();
    assert_eq!((party.cleric, party.mage, party.thief), (1, 3, 3));
}

#[test]
fn retire_rules() {
    let delving = next_delve(new_game(), &GameConfig::default(), roll_party, &mut FixedRange).unwrap();
    assert_eq!(retire(delving), Err(DrollError::NotStarted));

    let blocked = World {
        depth: 3,
        ..delving
    }
    .with_dungeon(DungeonFaces::zero().with(DungeonFace::Dragon, 3))
    .with_treasure(TreasureKind::Ring, 1);
    let retired = retire(blocked).unwrap();
    assert_eq!(retired.treasure.ring, 0);
    assert_eq!(retired.experience, 3);
    assert_eq!(retired.dungeon, None);
}

#[test]
fn reroll_is_an_exact_replay_of_the_script() {
    let rules = HeroRules::default();
    let world = new_game()
        .with_dungeon(DungeonFaces::from_counts([1, 0, 2, 1, 1, 0]))
        .with_party(PartyFaces::zero().with(HeroKind::Scroll, 1));
    let mut rng = ScriptedRange::new([0, 1, 2]);
    let world = command(&rules, world, &mut rng, "scroll ooze chest").unwrap();
    assert_eq!(
        world.dungeon,
        Some(DungeonFaces::from_counts([2, 1, 1, 0, 1, 0]))
    );
    assert_eq!(world.party, Some(PartyFaces::zero()));
}

#[test]
fn held_scroll_rerolls_like_a_scroll_die() {
    let rules = HeroRules::default();
    let world = new_game()
        .with_dungeon(DungeonFaces::zero().with(DungeonFace::Skeleton, 1))
        .with_party(PartyFaces::zero())
        .with_treasure(TreasureKind::Scroll, 1);
    let world = command(&rules, world, &mut ScriptedRange::new([3]), "scroll skeleton").unwrap();
    assert_eq!(world.dungeon, Some(DungeonFaces::zero().with(DungeonFace::Chest, 1)));
    assert_eq!(world.treasure.scroll, 0);
    assert_eq!(world.party, Some(PartyFaces::zero()));
}

#[test]
fn descending_never_loses_dragons() {
    let config = GameConfig::default();
    for seed in 0..200 {
        let mut rng = lcg(seed);
        let mut world = next_delve(new_game(), &config, roll_party, &mut rng).unwrap();
        let mut dragons = 0;
        loop {
            // Clear everything but the dragon so descent is always allowed.
            if let Some(dungeon) = world.dungeon {
                if dungeon.dragon >= DungeonFaces::DRAGON_THRESHOLD {
                    break;
                }
                world = world.with_dungeon(DungeonFaces::zero().with(DungeonFace::Dragon, dungeon.dragon));
            }
            match next_dungeon(world, &config, roll_dungeon, &mut rng) {
                Ok(next) => {
                    let now = next.dungeon.unwrap().dragon;
                    assert!(now >= dragons, "seed {seed}: dragons fell from {dragons} to {now}");
                    dragons = now;
                    world = next;
                }
                Err(DrollError::MaxDepth { .. }) => break,
                Err(other) => panic!("seed {seed}: unexpected {other}"),
            }
        }
    }
}

#[test]
fn score_ignores_dungeon_and_party() {
    let world = new_game()
        .with_treasure(TreasureKind::Scale, 5)
        .with_treasure(TreasureKind::Portal, 1)
        .with_treasure(TreasureKind::Elixir, 2);
    let world = World {
        experience: 7,
        ..world
    };
    let busy = world
        .with_dungeon(DungeonFaces::from_counts([3, 1, 0, 2, 0, 4]))
        .with_party(PartyFaces::from_counts([1, 0, 2, 0, 3, 1]));
    assert_eq!(score(&world), 7 + 8 + 1 + 4);
    assert_eq!(score(&world), score(&busy));
}

/// Plays whole games of random commands and checks the invariants after
/// every accepted move.
#[test]
fn random_games_conserve_treasure() {
    const LINES: &[&str] = &[
        "fighter goblin",
        "fighter skeleton",
        "fighter ooze",
        "cleric goblin",
        "cleric skeleton",
        "cleric chest",
        "mage ooze",
        "mage goblin",
        "thief chest",
        "thief skeleton",
        "champion goblin",
        "champion ooze",
        "champion chest",
        "scroll goblin",
        "scroll chest",
        "fighter potion cleric",
        "champion potion mage mage",
        "fighter dragon cleric mage",
        "thief dragon champion mage",
        "sword goblin",
        "talisman skeleton",
        "tools chest",
        "bait",
        "elixir thief",
        "ring",
        "portal",
        "ability",
    ];
    let config = GameConfig::default();
    let rules = HeroRules::default();

    for seed in 0..100 {
        let mut rng = lcg(seed);
        let mut world = new_game();
        while let Ok(delving) = next_delve(world, &config, roll_party, &mut rng) {
            world = delving;
            assert_invariants(&world);
            for _turn in 0..40 {
                let choice = rng.range(0, LINES.len() as u32 + 3) as usize;
                let (next, leaves) = match choice.checked_sub(LINES.len()) {
                    Some(0) => (next_dungeon(world, &config, roll_dungeon, &mut rng), false),
                    Some(1) => (retire(world), true),
                    Some(_) => (retreat(world), true),
                    None => (command(&rules, world, &mut rng, LINES[choice]), false),
                };
                if let Ok(next) = next {
                    assert_invariants(&next);
                    world = next;
                    if leaves {
                        break;
                    }
                }
            }
            // Force the delve to end so the next one can start.
            world = retire(world).or_else(|_| retreat(world)).unwrap_or(world);
            world = World {
                depth: 0,
                dungeon: None,
                ..world
            };
        }
        assert_eq!(world.delve, config.max_delves);
    }
}
