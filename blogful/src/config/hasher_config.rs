use serde::{Deserialize, Serialize};
use crate::lib_constants::{DEFAULT_ARGON2_M_COST, DEFAULT_ARGON2_P_COST, DEFAULT_ARGON2_T_COST};

/// Argon2id costs for password hashes. Any field left out of the
/// configuration keeps its default.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct HashingCosts {
    pub argon2_m_cost: u32,
    pub argon2_t_cost: u32,
    pub argon2_p_cost: u32,
}

impl HashingCosts {
    pub fn make_params(&self) -> Result<argon2::Params, argon2::Error> {
        argon2::Params::new(
            self.argon2_m_cost,
            self.argon2_t_cost,
            self.argon2_p_cost,
            None,
        )
    }
}

impl Default for HashingCosts {
    fn default() -> Self {
        HashingCosts {
            argon2_m_cost: DEFAULT_ARGON2_M_COST,
            argon2_t_cost: DEFAULT_ARGON2_T_COST,
            argon2_p_cost: DEFAULT_ARGON2_P_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_costs_keep_defaults() {
        let costs: HashingCosts = serde_json::de::from_str(
            r#"{"argon2_t_cost": 3}"#,
        ).unwrap();
        assert_eq!(
            costs,
            HashingCosts { argon2_t_cost: 3, ..Default::default() },
        );
    }

    #[test]
    fn default_params_are_valid() {
        let params = HashingCosts::default().make_params()
            .expect("default params rejected");
        assert_eq!(params.m_cost(), DEFAULT_ARGON2_M_COST);
        assert_eq!(params.t_cost(), DEFAULT_ARGON2_T_COST);
        assert_eq!(params.p_cost(), DEFAULT_ARGON2_P_COST);
    }

    #[test]
    fn zero_time_cost_is_rejected() {
        let costs = HashingCosts {
            argon2_t_cost: 0,
            ..Default::default()
        };
        assert!(costs.make_params().is_err());
    }
}
