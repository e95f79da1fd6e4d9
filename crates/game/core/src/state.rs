//! Mutable session state: the player and the defeated-enemy record.

use std::collections::{HashMap, HashSet};

use crate::world::{EnemyKind, RoomId};

/// Player character classes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerClass {
    /// Accurate and hard-hitting in melee.
    Warrior,
    /// The only class that casts spells; starts with full mana.
    Wizard,
    /// Better at slipping out of a fight.
    Scoundrel,
}

impl PlayerClass {
    /// Maximum (and starting) health for this class.
    pub fn max_health(self) -> u32 {
        match self {
            PlayerClass::Warrior => 15,
            PlayerClass::Scoundrel => 12,
            PlayerClass::Wizard => 10,
        }
    }

    /// Starting mana. Mana is a wizard-only resource.
    pub fn starting_mana(self) -> u32 {
        match self {
            PlayerClass::Wizard => PlayerState::MANA_MAX,
            _ => 0,
        }
    }

    /// Additive bonus to the base 50% attack hit chance, in percent.
    pub fn hit_bonus_percent(self) -> u32 {
        match self {
            PlayerClass::Warrior => 10,
            _ => 0,
        }
    }

    /// Additive bonus to the base 50% flee chance, in percent.
    pub fn flee_bonus_percent(self) -> u32 {
        match self {
            PlayerClass::Scoundrel => 20,
            _ => 0,
        }
    }

    /// Whether attack damage bounds are scaled by 1.2 for this class.
    pub fn scales_attack_damage(self) -> bool {
        matches!(self, PlayerClass::Warrior)
    }
}

/// The player: identity, resources, position, and progress counters.
///
/// Health and mana are private so every mutation goes through the clamping
/// methods; health never leaves `[0, class max]` downward and mana never
/// leaves `[0, MANA_MAX]`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub name: String,
    pub class: PlayerClass,
    health: u32,
    pub inventory: Vec<String>,
    pub current_room: RoomId,
    pub flags: HashMap<String, bool>,
    mana: u32,
    pub steps_taken: u32,
    pub enemies_defeated: u32,
    pub items_used: u32,
    pub debug_mode: bool,
}

impl PlayerState {
    pub const MANA_MAX: u32 = 10;

    /// Fixed ceiling for the heal spell, independent of class max health.
    ///
    /// The cap does not track class maximums: a class whose maximum is below
    /// 20 can be healed past it. See the combat round tests.
    pub const HEAL_CAP: u32 = 20;

    pub fn new(name: impl Into<String>, class: PlayerClass, start: RoomId) -> Self {
        Self {
            name: name.into(),
            class,
            health: class.max_health(),
            inventory: Vec::new(),
            current_room: start,
            flags: HashMap::new(),
            mana: class.starting_mana(),
            steps_taken: 0,
            enemies_defeated: 0,
            items_used: 0,
            debug_mode: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    /// Health 0 is terminal.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Apply damage, clamping at 0. Returns the new health.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }

    /// Heal up to [`Self::HEAL_CAP`]. Returns the new health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health = (self.health + amount).min(Self::HEAL_CAP);
        self.health
    }

    /// Spend mana if enough is available; on failure mana is unchanged.
    #[must_use]
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }
}

/// Durable record of cleared room guardians.
///
/// Once a `(room, kind)` pair is recorded, re-entering that room never
/// respawns the enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefeatedEnemySet {
    cleared: HashSet<(RoomId, EnemyKind)>,
}

impl DefeatedEnemySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a defeat. Returns `true` the first time the pair is seen.
    pub fn record(&mut self, room: RoomId, kind: EnemyKind) -> bool {
        self.cleared.insert((room, kind))
    }

    pub fn is_cleared(&self, room: &RoomId, kind: &EnemyKind) -> bool {
        self.cleared.contains(&(room.clone(), kind.clone()))
    }

    pub fn len(&self) -> usize {
        self.cleared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(class: PlayerClass) -> PlayerState {
        PlayerState::new("Tester", class, RoomId::new("entry"))
    }

    #[test]
    fn starts_at_class_maximum() {
        assert_eq!(player(PlayerClass::Warrior).health(), 15);
        assert_eq!(player(PlayerClass::Scoundrel).health(), 12);
        assert_eq!(player(PlayerClass::Wizard).health(), 10);
    }

    #[test]
    fn only_wizards_start_with_mana() {
        assert_eq!(player(PlayerClass::Wizard).mana(), 10);
        assert_eq!(player(PlayerClass::Warrior).mana(), 0);
        assert_eq!(player(PlayerClass::Scoundrel).mana(), 0);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut p = player(PlayerClass::Wizard);
        assert_eq!(p.apply_damage(3), 7);
        assert_eq!(p.apply_damage(100), 0);
        assert!(p.is_dead());
        // Idempotent at the floor.
        assert_eq!(p.apply_damage(5), 0);
    }

    #[test]
    fn spend_mana_rejects_overdraw() {
        let mut p = player(PlayerClass::Wizard);
        assert!(p.spend_mana(3));
        assert_eq!(p.mana(), 7);
        assert!(!p.spend_mana(8));
        assert_eq!(p.mana(), 7);
    }

    #[test]
    fn heal_caps_at_the_fixed_ceiling() {
        let mut p = player(PlayerClass::Wizard);
        p.apply_damage(6);
        assert_eq!(p.heal(3), 7);
        assert_eq!(p.heal(100), PlayerState::HEAL_CAP);
    }

    #[test]
    fn class_names_parse_case_insensitively() {
        use std::str::FromStr;
        assert_eq!(PlayerClass::from_str("Warrior"), Ok(PlayerClass::Warrior));
        assert_eq!(PlayerClass::from_str("WIZARD"), Ok(PlayerClass::Wizard));
        assert_eq!(
            PlayerClass::from_str("scoundrel"),
            Ok(PlayerClass::Scoundrel)
        );
        assert!(PlayerClass::from_str("bard").is_err());
    }

    #[test]
    fn defeated_set_records_each_pair_once() {
        let mut set = DefeatedEnemySet::new();
        let room = RoomId::new("corridor");
        let kind = EnemyKind::new("goblin");

        assert!(set.record(room.clone(), kind.clone()));
        assert!(!set.record(room.clone(), kind.clone()));
        assert_eq!(set.len(), 1);
        assert!(set.is_cleared(&room, &kind));
        assert!(!set.is_cleared(&RoomId::new("entry"), &kind));
    }
}
