//! # Runtime Targets
//!
//! `_target_` fields name the class the external trainer instantiates. They
//! are closed enums here: each variant serializes to the dotted class path
//! the trainer's lookup table is keyed by, and an unknown path is rejected
//! when the record is resolved.

use serde::{Deserialize, Serialize};

macro_rules! class_targets {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $path:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $path)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            #[must_use]
            pub const fn class_path(self) -> &'static str {
                match self {
                    $( $name::$variant => $path, )+
                }
            }

            #[must_use]
            pub fn from_class_path(path: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|target| target.class_path() == path)
            }
        }
    };
}

class_targets! {
    /// Environment class built from a [`crate::TaskConfig`].
    pub enum TaskTarget {
        LeggedRobot => "legged_gym.envs.legged_robot.LeggedRobot",
        A1Amp => "legged_gym.envs.a1_amp.A1AMP",
    }
}

class_targets! {
    /// Learning algorithm built from an algorithm config.
    pub enum AlgorithmTarget {
        Ppo => "rsl_rl.algorithms.PPO",
        AmpPpo => "rsl_rl.algorithms.AMPPPO",
    }
}

class_targets! {
    /// Training loop built from a train config.
    pub enum RunnerTarget {
        OnPolicy => "rsl_rl.runners.OnPolicyRunner",
        AmpOnPolicy => "rsl_rl.runners.AMPOnPolicyRunner",
    }
}

impl Default for TaskTarget {
    fn default() -> Self {
        TaskTarget::LeggedRobot
    }
}

impl Default for AlgorithmTarget {
    fn default() -> Self {
        AlgorithmTarget::Ppo
    }
}

impl Default for RunnerTarget {
    fn default() -> Self {
        RunnerTarget::OnPolicy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_paths_round_trip_through_lookup() {
        for target in RunnerTarget::ALL {
            assert_eq!(RunnerTarget::from_class_path(target.class_path()), Some(*target));
        }
        assert_eq!(AlgorithmTarget::from_class_path("rsl_rl.algorithms.SAC"), None);
    }

    #[test]
    fn serializes_as_class_path() {
        let json = serde_json::to_string(&TaskTarget::A1Amp).unwrap();
        assert_eq!(json, "\"legged_gym.envs.a1_amp.A1AMP\"");
    }
}
