use serde::Serialize;

use crate::enums::git_provider::GitProvider;
use crate::errors::ReviewResult;
use crate::structs::enabled_checks::EnabledChecks;
use crate::structs::pr_reference::PrReference;

/// Body of `POST /analyze`. Built once per submission and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pr_url: String,
    repo: String,
    pr_number: u64,
    server: GitProvider,
    enabled_checks: EnabledChecks,
}

impl AnalysisRequest {
    pub fn from_pr_url(pr_url: &str, enabled_checks: EnabledChecks) -> ReviewResult<Self> {
        let reference = PrReference::parse(pr_url)?;
        Ok(Self::new(pr_url.trim().to_string(), reference, enabled_checks))
    }

    pub fn new(pr_url: String, reference: PrReference, enabled_checks: EnabledChecks) -> Self {
        Self {
            pr_url,
            repo: reference.repo,
            pr_number: reference.number,
            server: reference.provider,
            enabled_checks,
        }
    }

    pub fn pr_url(&self) -> &str {
        &self.pr_url
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn pr_number(&self) -> u64 {
        self.pr_number
    }

    pub fn provider(&self) -> GitProvider {
        self.server
    }
}
