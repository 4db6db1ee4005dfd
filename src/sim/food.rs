//! Food items and the policies that spawn them
//!
//! Each policy owns one kind of food. Policies are consulted in a fixed order
//! once per tick and add at most one item each.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::grid::Position;
use super::state::GameState;
use crate::settings::Settings;

/// Food types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Regular,
    Premium,
}

/// A food item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub kind: FoodKind,
    /// Points awarded when eaten
    pub score: u64,
    pub position: Position,
    /// Ticks alive
    pub age: u32,
}

/// Spawning rules for one kind of food
pub trait FoodPolicy {
    fn kind(&self) -> FoodKind;

    /// Create a fresh item at a random cell
    fn produce(&self, rng: &mut dyn RngCore) -> Food;

    /// Whether a new item may be added given the food already on the board
    fn can_produce(&self, existing: &[Food], state: &GameState) -> bool;

    /// Whether an existing item should stay on the board
    fn is_valid(&self, food: &Food) -> bool;
}

fn exists(existing: &[Food], kind: FoodKind) -> bool {
    existing.iter().any(|f| f.kind == kind)
}

/// Always-available food, one at a time
#[derive(Debug, Clone)]
pub struct RegularFood {
    pub score: u64,
}

impl FoodPolicy for RegularFood {
    fn kind(&self) -> FoodKind {
        FoodKind::Regular
    }

    fn produce(&self, rng: &mut dyn RngCore) -> Food {
        Food {
            kind: FoodKind::Regular,
            score: self.score,
            position: Position::random(rng),
            age: 0,
        }
    }

    fn can_produce(&self, existing: &[Food], _state: &GameState) -> bool {
        !exists(existing, FoodKind::Regular)
    }

    fn is_valid(&self, _food: &Food) -> bool {
        true
    }
}

/// Bonus food offered at score milestones, gone after `max_age` ticks
#[derive(Debug, Clone)]
pub struct PremiumFood {
    pub score: u64,
    /// Score must be an exact multiple of this for premium food to appear
    pub score_multiple: u64,
    pub max_age: u32,
}

impl FoodPolicy for PremiumFood {
    fn kind(&self) -> FoodKind {
        FoodKind::Premium
    }

    fn produce(&self, rng: &mut dyn RngCore) -> Food {
        Food {
            kind: FoodKind::Premium,
            score: self.score,
            position: Position::random(rng),
            age: 0,
        }
    }

    fn can_produce(&self, existing: &[Food], state: &GameState) -> bool {
        !exists(existing, FoodKind::Premium)
            && self.score_multiple > 0
            && state.score % self.score_multiple == 0
    }

    fn is_valid(&self, food: &Food) -> bool {
        food.age < self.max_age
    }
}

/// Build the policy list in evaluation order: regular, then premium
pub fn policies(settings: &Settings) -> Vec<Box<dyn FoodPolicy>> {
    vec![
        Box::new(RegularFood {
            score: settings.regular_food_score,
        }),
        Box::new(PremiumFood {
            score: settings.premium_food_score,
            score_multiple: settings.premium_score_multiple,
            max_age: settings.premium_max_age,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Direction;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_with_score(score: u64) -> GameState {
        GameState {
            score,
            direction: Direction::Right,
        }
    }

    fn premium() -> PremiumFood {
        PremiumFood {
            score: 20,
            score_multiple: 50,
            max_age: 16,
        }
    }

    #[test]
    fn test_regular_only_when_absent() {
        let policy = RegularFood { score: 10 };
        let mut rng = Pcg32::seed_from_u64(1);
        let state = state_with_score(30);

        assert!(policy.can_produce(&[], &state));
        let food = policy.produce(&mut rng);
        assert_eq!(food.kind, FoodKind::Regular);
        assert_eq!(food.score, 10);
        assert_eq!(food.age, 0);
        assert!(food.position.in_bounds());
        assert!(!policy.can_produce(&[food], &state));
    }

    #[test]
    fn test_premium_needs_score_multiple() {
        let policy = premium();
        assert!(policy.can_produce(&[], &state_with_score(0)));
        assert!(policy.can_produce(&[], &state_with_score(50)));
        assert!(policy.can_produce(&[], &state_with_score(100)));
        assert!(!policy.can_produce(&[], &state_with_score(40)));
        assert!(!policy.can_produce(&[], &state_with_score(70)));
    }

    #[test]
    fn test_premium_only_when_absent() {
        let policy = premium();
        let mut rng = Pcg32::seed_from_u64(2);
        let existing = vec![policy.produce(&mut rng)];
        assert!(!policy.can_produce(&existing, &state_with_score(50)));

        // A regular item does not block premium
        let regular = RegularFood { score: 10 }.produce(&mut rng);
        assert!(policy.can_produce(&[regular], &state_with_score(50)));
    }

    #[test]
    fn test_premium_expires_at_max_age() {
        let policy = premium();
        let mut food = policy.produce(&mut Pcg32::seed_from_u64(3));
        assert_eq!(food.score, 20);
        food.age = 15;
        assert!(policy.is_valid(&food));
        food.age = 16;
        assert!(!policy.is_valid(&food));
    }

    #[test]
    fn test_policy_order() {
        let list = policies(&Settings::default());
        let kinds: Vec<_> = list.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![FoodKind::Regular, FoodKind::Premium]);
    }
}
