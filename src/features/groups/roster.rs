//! Student group membership

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::GroupLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// Caller already belongs to this group (possibly the one requested)
    AlreadyMember(u32),
    Full,
    InvalidGroup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left,
    NotMember,
    InvalidGroup,
}

/// Group number → members, in join order.
///
/// A member is in at most one group and a group never exceeds
/// `GroupLimits::capacity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupRoster {
    groups: BTreeMap<u32, Vec<String>>,
}

impl GroupRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, limits: &GroupLimits, group: u32, member: &str) -> JoinOutcome {
        if !limits.is_valid_group(group) {
            return JoinOutcome::InvalidGroup;
        }

        let member = normalize_member(member);
        if let Some(current) = self.group_of(&member) {
            return JoinOutcome::AlreadyMember(current);
        }

        let members = self.groups.entry(group).or_default();
        if members.len() >= limits.capacity {
            return JoinOutcome::Full;
        }
        members.push(member);
        JoinOutcome::Joined
    }

    pub fn leave(&mut self, limits: &GroupLimits, group: u32, member: &str) -> LeaveOutcome {
        if !limits.is_valid_group(group) {
            return LeaveOutcome::InvalidGroup;
        }

        let member = normalize_member(member);
        let Some(members) = self.groups.get_mut(&group) else {
            return LeaveOutcome::NotMember;
        };
        let Some(index) = members.iter().position(|m| *m == member) else {
            return LeaveOutcome::NotMember;
        };

        members.remove(index);
        if members.is_empty() {
            self.groups.remove(&group);
        }
        LeaveOutcome::Left
    }

    pub fn group_of(&self, member: &str) -> Option<u32> {
        let member = normalize_member(member);
        self.groups
            .iter()
            .find(|(_, members)| members.contains(&member))
            .map(|(group, _)| *group)
    }

    /// Look a student up by name, ignoring case and inner spacing.
    /// Returns the group and the name as stored.
    pub fn find_group(&self, name: &str) -> Option<(u32, &str)> {
        let wanted = name.split_whitespace().collect::<Vec<_>>().join(" ");
        let wanted = normalize_member(&wanted);
        self.groups.iter().find_map(|(group, members)| {
            members
                .iter()
                .find(|m| **m == wanted)
                .map(|m| (*group, m.as_str()))
        })
    }

    pub fn members(&self, group: u32) -> &[String] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups with at least one member, in ascending group order
    pub fn occupied(&self) -> impl Iterator<Item = (u32, &[String])> + '_ {
        self.groups
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(group, members)| (*group, members.as_slice()))
    }
}

fn normalize_member(name: &str) -> String {
    name.trim().to_uppercase()
}
