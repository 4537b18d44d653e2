//! Role values and role matching.
//!
//! Identity providers report roles in three shapes: a single role string,
//! a comma-separated role string, or a list of role strings. All three are
//! normalized to the same set before matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of normalized role names.
pub type RoleSet = BTreeSet<String>;

/// A role value as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleValue {
    /// `"admin"` or `"admin, moderator"`.
    One(String),
    /// `["admin", "moderator"]`.
    Many(Vec<String>),
}

impl RoleValue {
    /// Normalize into a set of trimmed, non-empty role names.
    ///
    /// List entries are split on commas as well, so `["a,b", "c"]` yields
    /// `{a, b, c}`.
    pub fn to_set(&self) -> RoleSet {
        match self {
            Self::One(value) => split_roles(value).collect(),
            Self::Many(values) => values.iter().flat_map(|v| split_roles(v)).collect(),
        }
    }

    /// Check whether any normalized role is in `required`.
    pub fn intersects(&self, required: &RoleSet) -> bool {
        self.to_set().iter().any(|role| required.contains(role))
    }
}

impl From<&str> for RoleValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for RoleValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for RoleValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

fn split_roles(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(String::from)
}

/// Build a required-role set from annotation values.
pub fn role_set<I, S>(roles: I) -> RoleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    roles
        .into_iter()
        .flat_map(|role| split_roles(role.as_ref()).collect::<Vec<_>>())
        .collect()
}

/// Whether `granted` satisfies `required`.
///
/// An absent role value never matches a non-empty requirement.
pub fn roles_match(granted: Option<&RoleValue>, required: &RoleSet) -> bool {
    granted.map_or(false, |value| value.intersects(required))
}
