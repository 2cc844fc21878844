//! Subscription plans and the per-plan access tier table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Basic,
    Premium,
    Pro,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Premium, Plan::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Premium => "premium",
            Plan::Pro => "pro",
        }
    }

    /// Reads a stored plan value. Missing or unrecognized values fall back to `basic`.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan '{0}' (expected basic, premium or pro)")]
pub struct UnknownPlan(pub String);

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Plan::Basic),
            "premium" => Ok(Plan::Premium),
            "pro" => Ok(Plan::Pro),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

/// How many items of a group are unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Bounded(usize),
    Unbounded,
}

impl Limit {
    /// True when the 0-based position `index` falls inside the limit.
    pub fn allows(&self, index: usize) -> bool {
        match self {
            Limit::Bounded(max) => index < *max,
            Limit::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTier {
    pub sidebar_limit: Limit,
    pub top_limit: Limit,
}

/// Immutable plan -> tier table. Build once and share by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTiers {
    basic: AccessTier,
    premium: AccessTier,
    pro: AccessTier,
}

impl AccessTiers {
    pub fn new(basic: AccessTier, premium: AccessTier, pro: AccessTier) -> Self {
        Self {
            basic,
            premium,
            pro,
        }
    }

    pub fn tier(&self, plan: Plan) -> &AccessTier {
        match plan {
            Plan::Basic => &self.basic,
            Plan::Premium => &self.premium,
            Plan::Pro => &self.pro,
        }
    }
}

impl Default for AccessTiers {
    fn default() -> Self {
        Self::new(
            AccessTier {
                sidebar_limit: Limit::Bounded(3),
                top_limit: Limit::Bounded(3),
            },
            AccessTier {
                sidebar_limit: Limit::Bounded(4),
                top_limit: Limit::Bounded(5),
            },
            AccessTier {
                sidebar_limit: Limit::Unbounded,
                top_limit: Limit::Unbounded,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_defaults_to_basic() {
        assert_eq!(Plan::from_stored(None), Plan::Basic);
        assert_eq!(Plan::from_stored(Some("gold")), Plan::Basic);
        assert_eq!(Plan::from_stored(Some("")), Plan::Basic);
        assert_eq!(Plan::from_stored(Some("premium")), Plan::Premium);
    }

    #[test]
    fn test_plan_parse_is_case_sensitive() {
        assert!("Pro".parse::<Plan>().is_err());
        assert_eq!("pro".parse::<Plan>(), Ok(Plan::Pro));
    }

    #[test]
    fn test_default_tiers() {
        let tiers = AccessTiers::default();
        assert_eq!(tiers.tier(Plan::Basic).sidebar_limit, Limit::Bounded(3));
        assert_eq!(tiers.tier(Plan::Basic).top_limit, Limit::Bounded(3));
        assert_eq!(tiers.tier(Plan::Premium).sidebar_limit, Limit::Bounded(4));
        assert_eq!(tiers.tier(Plan::Premium).top_limit, Limit::Bounded(5));
        assert_eq!(tiers.tier(Plan::Pro).sidebar_limit, Limit::Unbounded);
    }

    #[test]
    fn test_limit_allows() {
        assert!(Limit::Bounded(3).allows(2));
        assert!(!Limit::Bounded(3).allows(3));
        assert!(!Limit::Bounded(0).allows(0));
        assert!(Limit::Unbounded.allows(usize::MAX));
    }
}
