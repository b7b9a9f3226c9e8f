//! # Feature: Groups & Project Voting
//!
//! Students join numbered groups; each group votes for one project.
//! Membership and vote limits are enforced by the typed mappings themselves.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod projects;
pub mod roster;

pub use projects::{ProjectBoard, VoteOutcome};
pub use roster::{GroupRoster, JoinOutcome, LeaveOutcome};

use crate::core::Config;

/// Valid numbering and capacity for groups and projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLimits {
    /// Valid group numbers are `0..group_count`
    pub group_count: u32,
    /// Valid project numbers are `0..project_count`
    pub project_count: u32,
    /// Members per group, and groups per project
    pub capacity: usize,
}

impl GroupLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            group_count: config.group_count,
            project_count: config.project_count,
            capacity: config.group_capacity,
        }
    }

    pub fn is_valid_group(&self, group: u32) -> bool {
        group < self.group_count
    }

    pub fn is_valid_project(&self, project: u32) -> bool {
        project < self.project_count
    }
}
