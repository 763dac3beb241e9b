//! # Subscription Plans
//!
//! The three subscription tiers and the one access rule that gates content.
//!
//! ```text
//! Free (0)  <  Pro (1)  <  ProPlus (2)
//!
//! can_access(required, user)  =  rank(user) >= rank(required)
//! ```
//!
//! A free user sees only free content, a pro user sees free + pro, and a
//! pro-plus user sees everything. Enforcement is client-side only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    ProPlus,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::ProPlus];

    pub fn rank(self) -> u8 {
        match self {
            Plan::Free => 0,
            Plan::Pro => 1,
            Plan::ProPlus => 2,
        }
    }

    /// Human-facing name, as shown on badges.
    pub fn label(self) -> &'static str {
        match self {
            Plan::Free => "Gratuito",
            Plan::Pro => "Pro",
            Plan::ProPlus => "Pro Plus",
        }
    }

    /// Wire tag used in config files, env vars and CLI flags.
    pub fn tag(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::ProPlus => "pro-plus",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Plan::Free => "R$ 0 para sempre",
            Plan::Pro => "R$ 29,90 por mês",
            Plan::ProPlus => "R$ 49,90 por mês",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Plan::Free => &[
                "Acesso limitado às explicações básicas",
                "Exercícios básicos",
                "Suporte da comunidade",
            ],
            Plan::Pro => &[
                "Acesso a explicações intermediárias",
                "Todos os exercícios básicos e intermediários",
                "Suporte prioritário",
                "Certificados de conclusão",
            ],
            Plan::ProPlus => &[
                "Acesso completo a todas as explicações",
                "Todos os exercícios disponíveis",
                "Suporte VIP",
                "Sessões de mentoria mensais",
            ],
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlan(pub String);

impl fmt::Display for UnknownPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown plan '{}' (expected free, pro or pro-plus)", self.0)
    }
}

impl std::error::Error for UnknownPlan {}

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "pro-plus" | "pro_plus" | "proplus" => Ok(Plan::ProPlus),
            _ => Err(UnknownPlan(s.to_string())),
        }
    }
}

/// Whether a user on `user` may open content that requires `required`.
pub fn can_access(required: Plan, user: Plan) -> bool {
    user.rank() >= required.rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_content_open_to_everyone() {
        for user in Plan::ALL {
            assert!(can_access(Plan::Free, user));
        }
    }

    #[test]
    fn test_pro_plus_fixed_points() {
        assert!(!can_access(Plan::ProPlus, Plan::Free));
        assert!(!can_access(Plan::ProPlus, Plan::Pro));
        assert!(can_access(Plan::ProPlus, Plan::ProPlus));
    }

    #[test]
    fn test_can_access_is_monotonic_in_user_plan() {
        for required in Plan::ALL {
            for user in Plan::ALL {
                if !can_access(required, user) {
                    continue;
                }
                for upgraded in Plan::ALL.iter().filter(|p| p.rank() >= user.rank()) {
                    assert!(
                        can_access(required, *upgraded),
                        "{required} reachable from {user} but not from {upgraded}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_plan_tags_parse() {
        assert_eq!("pro-plus".parse::<Plan>(), Ok(Plan::ProPlus));
        assert_eq!(" PRO ".parse::<Plan>(), Ok(Plan::Pro));
        assert!("gold".parse::<Plan>().is_err());
        for plan in Plan::ALL {
            assert_eq!(plan.tag().parse::<Plan>(), Ok(plan));
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Plan::ProPlus).unwrap();
        assert_eq!(json, "\"pro-plus\"");
        let plan: Plan = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(plan, Plan::Free);
    }
}
