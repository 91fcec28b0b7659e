//! Scenario layouts.
//!
//! A [`ScenarioSpec`] places cover objects and both squads on the ground
//! plane. Units in a scenario share the match [`UnitProfile`]; a placement may
//! only lower the starting health.

use skirmish_core::{
    Battlefield, Cover, CoverSet, CoverTier, Roster, SetupError, Team, Unit, UnitId, UnitProfile,
    Vec2,
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverSpec {
    /// Ground-plane `(x, y)`.
    pub position: (f32, f32),
    pub tier: CoverTier,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub id: u32,
    /// Ground-plane `(x, y)`.
    pub position: (f32, f32),
    /// Starting health. Defaults to the profile's maximum.
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Option<f32>,
}

impl UnitSpec {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: (x, y),
            health: None,
        }
    }

    fn build(&self, team: Team, profile: UnitProfile) -> Unit {
        let (x, y) = self.position;
        let unit = Unit::new(UnitId(self.id), team, Vec2::new(x, y), profile);
        match self.health {
            Some(health) => unit.with_health(health),
            None => unit,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub covers: Vec<CoverSpec>,
    pub blue: Vec<UnitSpec>,
    pub red: Vec<UnitSpec>,
}

impl ScenarioSpec {
    /// Two squads of three facing each other across a band of cover.
    pub fn standoff() -> Self {
        let cover = |x, y, tier| CoverSpec {
            position: (x, y),
            tier,
        };
        Self {
            covers: vec![
                cover(-6.0, 8.0, CoverTier::Half),
                cover(0.0, 10.0, CoverTier::Full),
                cover(6.0, 8.0, CoverTier::Half),
                cover(-6.0, 22.0, CoverTier::Half),
                cover(0.0, 20.0, CoverTier::Full),
                cover(6.0, 22.0, CoverTier::Half),
            ],
            blue: vec![
                UnitSpec::new(1, -4.0, 0.0),
                UnitSpec::new(2, 0.0, 0.0),
                UnitSpec::new(3, 4.0, 0.0),
            ],
            red: vec![
                UnitSpec::new(11, -4.0, 30.0),
                UnitSpec::new(12, 0.0, 30.0),
                UnitSpec::new(13, 4.0, 30.0),
            ],
        }
    }

    /// Places every unit with `profile` and assembles the battlefield.
    pub fn build(&self, profile: &UnitProfile) -> Result<Battlefield, SetupError> {
        let roster = |team, units: &[UnitSpec]| {
            Roster::with_units(
                team,
                units.iter().map(|spec| spec.build(team, *profile)).collect(),
            )
        };
        let covers: CoverSet = self
            .covers
            .iter()
            .map(|spec| Cover::new(Vec2::new(spec.position.0, spec.position.1), spec.tier))
            .collect();

        Battlefield::new(
            roster(Team::Blue, &self.blue),
            roster(Team::Red, &self.red),
            covers,
        )
    }
}
