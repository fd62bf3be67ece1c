//! The scope lattice: a strict total order over grant breadths.
//!
//! `self < organization < tenant`. A broader grant covers every
//! narrower request: a tenant-scoped grant authorizes organization-
//! and self-scoped actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidScopeError;

/// The breadth of resources a granted permission covers.
///
/// The Rust variant for the narrowest level is named `Own` (`Self` is a
/// reserved word); its wire form is `"self"`.
///
/// The derived [`Ord`] agrees with [`Scope::rank`], so `Scope` values
/// can be compared and `max`-folded directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The principal's own resources only.
    #[serde(rename = "self")]
    Own,
    /// All resources within the principal's organization.
    Organization,
    /// All resources within the tenant.
    Tenant,
}

impl Scope {
    /// Position of this scope in the total order.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Own => 0,
            Self::Organization => 1,
            Self::Tenant => 2,
        }
    }

    /// Whether a grant at `self` covers a request at `requested`.
    ///
    /// Defined as `rank(self) >= rank(requested)`: larger scopes contain
    /// smaller ones.
    #[must_use]
    pub fn contains(self, requested: Scope) -> bool {
        self.rank() >= requested.rank()
    }

    /// The wire token for this scope (`"self"`, `"organization"`, `"tenant"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Own => "self",
            Self::Organization => "organization",
            Self::Tenant => "tenant",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = InvalidScopeError;

    /// Parse a scope token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScopeError`] for any unrecognized token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("self") {
            Ok(Self::Own)
        } else if s.eq_ignore_ascii_case("organization") {
            Ok(Self::Organization)
        } else if s.eq_ignore_ascii_case("tenant") {
            Ok(Self::Tenant)
        } else {
            Err(InvalidScopeError {
                value: s.to_owned(),
            })
        }
    }
}

impl TryFrom<&str> for Scope {
    type Error = InvalidScopeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const ALL: [Scope; 3] = [Scope::Own, Scope::Organization, Scope::Tenant];

    #[test]
    fn rank_is_strictly_increasing() {
        assert!(Scope::Own.rank() < Scope::Organization.rank());
        assert!(Scope::Organization.rank() < Scope::Tenant.rank());
    }

    #[test]
    fn ord_agrees_with_rank() {
        for a in ALL {
            for b in ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn contains_iff_rank_geq() {
        for granted in ALL {
            for requested in ALL {
                assert_eq!(
                    granted.contains(requested),
                    granted.rank() >= requested.rank(),
                    "contains({granted}, {requested})"
                );
            }
        }
    }

    #[test]
    fn tenant_contains_everything() {
        for requested in ALL {
            assert!(Scope::Tenant.contains(requested));
        }
    }

    #[test]
    fn own_contains_only_own() {
        assert!(Scope::Own.contains(Scope::Own));
        assert!(!Scope::Own.contains(Scope::Organization));
        assert!(!Scope::Own.contains(Scope::Tenant));
    }

    #[test]
    fn parses_wire_tokens() {
        assert_eq!("self".parse::<Scope>().unwrap(), Scope::Own);
        assert_eq!("organization".parse::<Scope>().unwrap(), Scope::Organization);
        assert_eq!("tenant".parse::<Scope>().unwrap(), Scope::Tenant);
        assert_eq!("TENANT".parse::<Scope>().unwrap(), Scope::Tenant);
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "global".parse::<Scope>().unwrap_err();
        assert_eq!(err.value, "global");
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Scope::Own.to_string(), "self");
        assert_eq!(Scope::Organization.to_string(), "organization");
        assert_eq!(Scope::Tenant.to_string(), "tenant");
    }

    #[test]
    fn serde_uses_wire_tokens() {
        assert_eq!(serde_json::to_string(&Scope::Own).unwrap(), "\"self\"");
        assert_eq!(
            serde_json::from_str::<Scope>("\"organization\"").unwrap(),
            Scope::Organization
        );
    }

    #[test]
    fn max_fold_picks_broadest() {
        let broadest = [Scope::Own, Scope::Tenant, Scope::Organization]
            .into_iter()
            .max()
            .unwrap();
        assert_eq!(broadest, Scope::Tenant);
    }
}
