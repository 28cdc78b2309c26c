use reqwest::Url;

use crate::enums::git_provider::GitProvider;
use crate::errors::{ReviewError, ReviewResult};

/// A pull request located from its web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrReference {
    pub provider: GitProvider,
    /// `owner/name`
    pub repo: String,
    pub number: u64,
}

impl PrReference {
    pub fn parse(raw: &str) -> ReviewResult<Self> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed).map_err(|e| ReviewError::invalid_pr_url(trimmed, &e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ReviewError::invalid_pr_url(trimmed, "only http and https URLs are supported"));
        }

        let host = url.host_str().unwrap_or_default().to_lowercase();
        let provider = GitProvider::ALL
            .into_iter()
            .find(|p| host.contains(p.host()))
            .ok_or_else(|| ReviewError::invalid_pr_url(trimmed, &format!("unsupported git host '{}'", host)))?;

        let parts: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let (marker_index, marker) = provider.pull_segment();
        let number_index = marker_index + 1;
        if parts.len() <= number_index || parts[marker_index] != marker {
            return Err(ReviewError::invalid_pr_url(
                trimmed,
                &format!("expected a {} pull request path containing '/{}/<number>'", provider, marker),
            ));
        }

        let number = parts[number_index]
            .parse::<u64>()
            .map_err(|_| ReviewError::invalid_pr_url(trimmed, &format!("'{}' is not a PR number", parts[number_index])))?;

        Ok(Self {
            provider,
            repo: format!("{}/{}", parts[0], parts[1]),
            number,
        })
    }
}
