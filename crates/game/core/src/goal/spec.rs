use super::{Goal, GoalKind};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Goal tree as written in a scenario file.
///
/// ```ron
/// (goal: "AND", subgoals: [(goal: "exit"), (goal: "treasure")])
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalSpec {
    pub goal: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subgoals: Vec<GoalSpec>,
}

impl GoalSpec {
    pub fn leaf(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            subgoals: Vec::new(),
        }
    }

    pub fn composite(goal: impl Into<String>, left: GoalSpec, right: GoalSpec) -> Self {
        Self {
            goal: goal.into(),
            subgoals: vec![left, right],
        }
    }
}

/// Recognised goal names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GoalName {
    And,
    Or,
    Exit,
    Treasure,
    Enemies,
    Boulders,
}

impl GoalName {
    const fn arity(self) -> usize {
        match self {
            GoalName::And | GoalName::Or => 2,
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    #[error("unknown goal `{0}`")]
    UnknownGoal(String),

    #[error("goal `{goal}` takes {expected} subgoals, found {found}")]
    WrongArity {
        goal: GoalName,
        expected: usize,
        found: usize,
    },
}

impl GameError for GoalError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownGoal(_) => "GOAL_UNKNOWN",
            Self::WrongArity { .. } => "GOAL_WRONG_ARITY",
        }
    }
}

impl Goal {
    /// Builds a goal tree from its file form; leaf targets come from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError`] for an unrecognised name or a node with the wrong
    /// number of subgoals.
    pub fn from_spec(spec: &GoalSpec, config: &GameConfig) -> Result<Self, GoalError> {
        let name: GoalName = spec
            .goal
            .parse()
            .map_err(|_| GoalError::UnknownGoal(spec.goal.clone()))?;

        if spec.subgoals.len() != name.arity() {
            return Err(GoalError::WrongArity {
                goal: name,
                expected: name.arity(),
                found: spec.subgoals.len(),
            });
        }

        let goal = match name {
            GoalName::And | GoalName::Or => {
                let left = Self::from_spec(&spec.subgoals[0], config)?;
                let right = Self::from_spec(&spec.subgoals[1], config)?;
                if name == GoalName::And {
                    Goal::and(left, right)
                } else {
                    Goal::or(left, right)
                }
            }
            GoalName::Exit => Goal::Leaf(GoalKind::Exit),
            GoalName::Treasure => Goal::Leaf(GoalKind::Treasure {
                target: config.treasure_goal,
            }),
            GoalName::Enemies => Goal::Leaf(GoalKind::Enemies {
                target: config.enemy_goal,
            }),
            GoalName::Boulders => Goal::Leaf(GoalKind::Boulders),
        };
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree_with_config_targets() {
        let spec = GoalSpec::composite(
            "AND",
            GoalSpec::leaf("exit"),
            GoalSpec::composite("or", GoalSpec::leaf("treasure"), GoalSpec::leaf("enemies")),
        );
        let config = GameConfig {
            treasure_goal: 3,
            enemy_goal: 2,
            ..GameConfig::default()
        };

        let goal = Goal::from_spec(&spec, &config).unwrap();

        assert_eq!(
            goal,
            Goal::and(
                GoalKind::Exit.into(),
                Goal::or(
                    GoalKind::Treasure { target: 3 }.into(),
                    GoalKind::Enemies { target: 2 }.into(),
                ),
            )
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Goal::from_spec(&GoalSpec::leaf("sunstone"), &GameConfig::default()).unwrap_err();
        assert_eq!(err, GoalError::UnknownGoal("sunstone".into()));
        assert_eq!(err.error_code(), "GOAL_UNKNOWN");
    }

    #[test]
    fn rejects_wrong_arity() {
        let spec = GoalSpec {
            goal: "OR".into(),
            subgoals: vec![GoalSpec::leaf("exit")],
        };
        assert_eq!(
            Goal::from_spec(&spec, &GameConfig::default()),
            Err(GoalError::WrongArity {
                goal: GoalName::Or,
                expected: 2,
                found: 1,
            })
        );

        let spec = GoalSpec::composite("exit", GoalSpec::leaf("exit"), GoalSpec::leaf("exit"));
        assert!(matches!(
            Goal::from_spec(&spec, &GameConfig::default()),
            Err(GoalError::WrongArity { expected: 0, .. })
        ));
    }
}
