use rand::Rng;

use crate::core::constants::*;

/// The player character. Lives for the whole campaign; stats only grow.
#[derive(Debug, Clone)]
pub struct Player {
    /// May drop to zero or below mid-turn; the battle resolver then runs the
    /// persistence check before declaring defeat.
    pub hp: i32,
    pub attack_power: i32,
    pub defense_power: i32,
    pub stage_clear_count: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            hp: PLAYER_BASE_HP,
            attack_power: PLAYER_BASE_ATTACK,
            defense_power: PLAYER_BASE_DEFENSE,
            stage_clear_count: 0,
        }
    }

    /// Max HP grows with every cleared stage.
    pub fn max_hp(&self) -> i32 {
        PLAYER_BASE_HP + MAX_HP_PER_STAGE_CLEAR * self.stage_clear_count as i32
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Rolls a basic attack and applies the damage to the monster.
    pub fn attack(&self, monster: &mut Monster, stage: u32, rng: &mut impl Rng) -> AttackOutcome {
        let base_damage = rng.gen_range(1..=self.attack_power);
        let critical = rng.gen_bool(crit_chance(stage));
        let damage = if critical {
            base_damage * CRIT_MULTIPLIER
        } else {
            base_damage
        };
        monster.hp -= damage;
        AttackOutcome { damage, critical }
    }

    /// Rolls 1 hit, or 2-3 hits with `MULTI_ATTACK_CHANCE`. Each hit is an
    /// independent damage roll applied to the monster.
    pub fn multi_attack(
        &self,
        monster: &mut Monster,
        _stage: u32,
        rng: &mut impl Rng,
    ) -> MultiAttackOutcome {
        let num_attacks = if rng.gen_bool(MULTI_ATTACK_CHANCE) {
            rng.gen_range(MULTI_ATTACK_MIN_HITS..=MULTI_ATTACK_MAX_HITS)
        } else {
            1
        };
        let mut total_damage = 0;
        for _ in 0..num_attacks {
            let damage = rng.gen_range(1..=self.attack_power);
            monster.hp -= damage;
            total_damage += damage;
        }
        MultiAttackOutcome {
            total_damage,
            num_attacks,
        }
    }

    /// Returns the mitigation for this turn: a defense roll half the time,
    /// zero otherwise.
    pub fn defend(&self, rng: &mut impl Rng) -> i32 {
        if rng.gen_bool(DEFEND_SUCCESS_CHANCE) {
            rng.gen_range(1..=self.defense_power)
        } else {
            0
        }
    }

    /// Post-victory heal, capped at max HP. A no-op at full HP.
    pub fn heal(&mut self) {
        self.hp = (self.hp + VICTORY_HEAL).min(self.max_hp());
    }

    /// Post-victory stat growth. The heal uses the max HP that already
    /// includes the new stage clear.
    pub fn increase_stats(&mut self, rng: &mut impl Rng) {
        self.attack_power += rng.gen_range(ATTACK_GROWTH_MIN..=ATTACK_GROWTH_MAX);
        self.defense_power += rng.gen_range(DEFENSE_GROWTH_MIN..=DEFENSE_GROWTH_MAX);
        self.stage_clear_count += 1;
        self.hp = (self.hp + GROWTH_HEAL).min(self.max_hp());
    }

    /// 50% chance to survive an otherwise-lethal blow with a stage-scaled
    /// HP floor. Returns false when the player is truly defeated.
    pub fn try_persist(&mut self, stage: u32, rng: &mut impl Rng) -> bool {
        if rng.gen_bool(PERSIST_CHANCE) {
            self.hp = self.hp.max(persist_floor(stage));
            true
        } else {
            false
        }
    }

    /// Identical roll to `attack`. On a failed counter the resolver applies
    /// the same damage value to the player as well.
    pub fn counter_attack(
        &self,
        monster: &mut Monster,
        stage: u32,
        rng: &mut impl Rng,
    ) -> AttackOutcome {
        self.attack(monster, stage, rng)
    }
}

/// Critical chance for a player strike at the given stage. Reaches certainty
/// around stage 90.
pub fn crit_chance(stage: u32) -> f64 {
    (CRIT_BASE_CHANCE + CRIT_CHANCE_PER_STAGE * stage as f64).min(1.0)
}

/// HP the persistence check restores the player to.
pub fn persist_floor(stage: u32) -> i32 {
    (PERSIST_BASE_HP + stage as f64 * PERSIST_HP_PER_STAGE).floor() as i32
}

#[derive(Debug, Clone, Copy)]
pub struct AttackOutcome {
    pub damage: i32,
    pub critical: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct MultiAttackOutcome {
    pub total_damage: i32,
    pub num_attacks: u32,
}

/// One stage's monster. Recreated from the stage number at every stage start
/// and discarded when the stage ends.
#[derive(Debug, Clone)]
pub struct Monster {
    pub hp: i32,
    pub attack_power: i32,
    pub counter_chance: f64,
}

impl Monster {
    pub fn new(stage: u32) -> Self {
        Self {
            hp: MONSTER_BASE_HP + MONSTER_HP_PER_STAGE * stage as i32,
            attack_power: MONSTER_BASE_ATTACK + stage as i32,
            counter_chance: (MONSTER_COUNTER_BASE_CHANCE
                + MONSTER_COUNTER_CHANCE_PER_STAGE * stage as f64)
                .min(MONSTER_COUNTER_CHANCE_CAP),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Rolls a strike without applying it; the battle resolver decides what
    /// the damage hits depending on defense and counters. The `counter` flag
    /// is rolled from `counter_chance` but the resolver rolls its own
    /// counter-success, so the flag is informational.
    pub fn attack(&self, rng: &mut impl Rng) -> MonsterStrike {
        MonsterStrike {
            damage: rng.gen_range(1..=self.attack_power),
            counter: rng.gen_bool(self.counter_chance),
        }
    }

    /// Baseline growth applied at stage transitions. The campaign constructs
    /// a fresh monster for the next stage, so this mutates a monster that is
    /// about to be discarded.
    pub fn increase_stats(&mut self, stage: u32, rng: &mut impl Rng) {
        self.hp += rng.gen_range(0..stage as i32 * 10) + MONSTER_GROWTH_FLAT_HP;
        self.attack_power += rng.gen_range(1..=stage as i32);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MonsterStrike {
    pub damage: i32,
    pub counter: bool,
}

/// The five player actions, parsed from the literal prompt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack,
    MultiAttack,
    Defend,
    Counter,
    Flee,
}

impl Action {
    /// Exact-match parse; anything else is the invalid-choice branch.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Action::Attack),
            "2" => Some(Action::MultiAttack),
            "3" => Some(Action::Defend),
            "4" => Some(Action::Counter),
            "5" => Some(Action::Flee),
            _ => None,
        }
    }
}

/// Terminal states of one stage's battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    PlayerWon,
    PlayerLost,
    PlayerFled,
}

/// The four per-turn chances. Attack and multi-attack are display-only;
/// flee and counter are rolled.
#[derive(Debug, Clone, Copy)]
pub struct TurnChances {
    pub attack: f64,
    pub multi_attack: f64,
    pub flee: f64,
    pub counter: f64,
}

/// Semantic color tag for a rendered line. The terminal console maps these
/// to ANSI colors; headless consoles ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Stage,
    Good,
    Guard,
    Bad,
    Event,
    Prompt,
    Plain,
}

/// One human-readable line of battle output.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Append-only battle log, accumulated for the whole battle and replayed on
/// every redraw.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    entries: Vec<Line>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.entries.push(Line::new(text, tone));
    }

    pub fn entries(&self) -> &[Line] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any entry contains the given fragment. Test/assertion helper.
    pub fn contains(&self, fragment: &str) -> bool {
        self.entries.iter().any(|line| line.text.contains(fragment))
    }
}
