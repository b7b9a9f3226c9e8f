//! Project sign-up votes, one project per group

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::GroupLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Voted,
    AlreadyVoted(u32),
    Full,
    InvalidProject,
}

/// Project number → voting groups, in vote order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectBoard {
    projects: BTreeMap<u32, Vec<u32>>,
}

impl ProjectBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vote(&mut self, limits: &GroupLimits, project: u32, group: u32) -> VoteOutcome {
        if !limits.is_valid_project(project) {
            return VoteOutcome::InvalidProject;
        }

        // Capacity is checked before the duplicate vote
        if self.groups_for(project).len() >= limits.capacity {
            return VoteOutcome::Full;
        }
        if let Some(existing) = self.project_of(group) {
            return VoteOutcome::AlreadyVoted(existing);
        }

        self.projects.entry(project).or_default().push(group);
        VoteOutcome::Voted
    }

    pub fn project_of(&self, group: u32) -> Option<u32> {
        self.projects
            .iter()
            .find(|(_, groups)| groups.contains(&group))
            .map(|(project, _)| *project)
    }

    pub fn groups_for(&self, project: u32) -> &[u32] {
        self.projects.get(&project).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Projects that have received at least one vote
    pub fn voted(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.projects
            .iter()
            .filter(|(_, groups)| !groups.is_empty())
            .map(|(project, groups)| (*project, groups.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> GroupLimits {
        GroupLimits {
            group_count: 100,
            project_count: 5,
            capacity: 6,
        }
    }

    #[test]
    fn test_vote_records_group() {
        let mut board = ProjectBoard::new();
        assert_eq!(board.vote(&limits(), 1, 12), VoteOutcome::Voted);
        assert_eq!(board.project_of(12), Some(1));
        assert_eq!(board.groups_for(1), &[12u32]);
    }

    #[test]
    fn test_group_votes_once() {
        let mut board = ProjectBoard::new();
        board.vote(&limits(), 1, 12);
        assert_eq!(board.vote(&limits(), 2, 12), VoteOutcome::AlreadyVoted(1));
        assert!(board.groups_for(2).is_empty());
    }

    #[test]
    fn test_at_most_capacity_groups_per_project() {
        let mut board = ProjectBoard::new();
        for group in 0..6 {
            assert_eq!(board.vote(&limits(), 3, group), VoteOutcome::Voted);
        }
        assert_eq!(board.vote(&limits(), 3, 6), VoteOutcome::Full);
    }

    #[test]
    fn test_invalid_project() {
        let mut board = ProjectBoard::new();
        assert_eq!(board.vote(&limits(), 5, 1), VoteOutcome::InvalidProject);
        assert_eq!(board.voted().count(), 0);
    }
}
