use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Contract length. Wire spellings are fixed by the persisted JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "36months")]
    Months36,
    #[serde(rename = "24months")]
    Months24,
    #[serde(rename = "12months")]
    Months12,
    #[serde(rename = "mtm")]
    MonthToMonth,
}

impl Term {
    pub const ALL: [Term; 4] = [
        Term::Months36,
        Term::Months24,
        Term::Months12,
        Term::MonthToMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Term::Months36 => "36months",
            Term::Months24 => "24months",
            Term::Months12 => "12months",
            Term::MonthToMonth => "mtm",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::ALL
            .into_iter()
            .find(|term| term.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "term",
                got: s.to_string(),
            })
    }
}

/// Service tier within a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Lite,
    Standard,
    Unlimited,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Lite, Plan::Standard, Plan::Unlimited];

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Lite => "lite",
            Plan::Standard => "standard",
            Plan::Unlimited => "unlimited",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plan::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "plan",
                got: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} '{got}'")]
pub struct UnknownName {
    kind: &'static str,
    got: String,
}

/// Prices for the three plans of a single term.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanPrices {
    pub lite: f64,
    pub standard: f64,
    pub unlimited: f64,
}

impl PlanPrices {
    /// Derived-pricing rule: a lite price fixes the whole row at 1×/2×/3×.
    pub fn from_lite(price: f64) -> Self {
        Self {
            lite: price,
            standard: price * 2.0,
            unlimited: price * 3.0,
        }
    }

    pub fn price(&self, plan: Plan) -> f64 {
        match plan {
            Plan::Lite => self.lite,
            Plan::Standard => self.standard,
            Plan::Unlimited => self.unlimited,
        }
    }

    pub fn set_price(&mut self, plan: Plan, price: f64) {
        match plan {
            Plan::Lite => self.lite = price,
            Plan::Standard => self.standard = price,
            Plan::Unlimited => self.unlimited = price,
        }
    }
}

/// The full 4-term × 3-plan pricing table. All 12 cells are always present;
/// deserialization rejects partial or over-shaped documents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Matrix {
    #[serde(rename = "36months")]
    pub months_36: PlanPrices,
    #[serde(rename = "24months")]
    pub months_24: PlanPrices,
    #[serde(rename = "12months")]
    pub months_12: PlanPrices,
    pub mtm: PlanPrices,
}

impl Matrix {
    /// The all-zero matrix used before any pricing has been loaded or saved.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn row(&self, term: Term) -> &PlanPrices {
        match term {
            Term::Months36 => &self.months_36,
            Term::Months24 => &self.months_24,
            Term::Months12 => &self.months_12,
            Term::MonthToMonth => &self.mtm,
        }
    }

    pub fn row_mut(&mut self, term: Term) -> &mut PlanPrices {
        match term {
            Term::Months36 => &mut self.months_36,
            Term::Months24 => &mut self.months_24,
            Term::Months12 => &mut self.months_12,
            Term::MonthToMonth => &mut self.mtm,
        }
    }

    pub fn price(&self, term: Term, plan: Plan) -> f64 {
        self.row(term).price(plan)
    }

    /// All 12 cells in term-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Term, Plan, f64)> + '_ {
        Term::ALL.into_iter().flat_map(move |term| {
            Plan::ALL
                .into_iter()
                .map(move |plan| (term, plan, self.price(term, plan)))
        })
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
