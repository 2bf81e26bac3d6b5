//! Structural validation of portfolio data.

use url::Url;

use crate::model::PortfolioData;

/// A single problem found while validating portfolio data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("name must not be empty")]
    EmptyName,

    #[error("bio must not be empty")]
    EmptyBio,

    #[error("avatar_url must be a URL or relative path, got {value:?}")]
    InvalidAvatarUrl { value: String },

    #[error("link {index}: label must not be empty")]
    EmptyLabel { index: usize },

    #[error("link {index} ({label:?}): url must not be empty")]
    EmptyUrl { index: usize, label: String },

    #[error("link {index} ({label:?}): invalid url {value:?}")]
    InvalidUrl { index: usize, label: String, value: String },

    #[error("link {index} ({label:?}): icon must not be empty")]
    EmptyIcon { index: usize, label: String },

    #[error("link {index} ({label:?}): invalid demo url {value:?}")]
    InvalidDemoUrl { index: usize, label: String, value: String },
}

/// Validate portfolio data, collecting every issue found.
///
/// An empty `links` list is valid. Each link must carry a non-empty label,
/// a parseable URL and a non-empty icon; the optional demo URL must parse
/// when present. The avatar may be an absolute URL or a relative path.
pub fn validate(data: &PortfolioData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if data.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyName);
    }
    if data.bio.trim().is_empty() {
        issues.push(ValidationIssue::EmptyBio);
    }
    if !is_url_or_relative_path(&data.avatar_url) {
        issues.push(ValidationIssue::InvalidAvatarUrl {
            value: data.avatar_url.clone(),
        });
    }

    for (index, link) in data.links.iter().enumerate() {
        let label = link.label.clone();

        if label.trim().is_empty() {
            issues.push(ValidationIssue::EmptyLabel { index });
        }

        if link.url.trim().is_empty() {
            issues.push(ValidationIssue::EmptyUrl {
                index,
                label: label.clone(),
            });
        } else if Url::parse(&link.url).is_err() {
            issues.push(ValidationIssue::InvalidUrl {
                index,
                label: label.clone(),
                value: link.url.clone(),
            });
        }

        if link.icon.is_empty() {
            issues.push(ValidationIssue::EmptyIcon {
                index,
                label: label.clone(),
            });
        }

        if let Some(demo) = &link.demo_url {
            if Url::parse(demo).is_err() {
                issues.push(ValidationIssue::InvalidDemoUrl {
                    index,
                    label,
                    value: demo.clone(),
                });
            }
        }
    }

    issues
}

impl PortfolioData {
    /// Validate, returning all issues on failure.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let issues = validate(self);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Accept absolute URLs and relative paths, reject anything else.
fn is_url_or_relative_path(value: &str) -> bool {
    if value.trim().is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    match Url::parse(value) {
        Ok(_) => true,
        // No scheme means a relative path like "/avatar.png" or "avatar.png".
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Icon, PortfolioLink};
    use pretty_assertions::assert_eq;

    fn link(label: &str, url: &str) -> PortfolioLink {
        PortfolioLink {
            label: label.to_string(),
            url: url.to_string(),
            icon: Icon::Emoji("🔗".to_string()),
            demo_url: None,
        }
    }

    fn base() -> PortfolioData {
        PortfolioData {
            name: "Ada".to_string(),
            avatar_url: "https://example.com/ada.png".to_string(),
            bio: "Engineer.".to_string(),
            links: vec![],
        }
    }

    #[test]
    fn empty_links_is_valid() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn missing_label_is_invalid() {
        let mut data = base();
        data.links.push(link("", "https://example.com"));

        let issues = validate(&data);
        assert_eq!(issues, vec![ValidationIssue::EmptyLabel { index: 0 }]);
    }

    #[test]
    fn unparseable_url_is_invalid() {
        let mut data = base();
        data.links.push(link("Broken", "not a url"));

        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidUrl {
                index: 0,
                label: "Broken".to_string(),
                value: "not a url".to_string(),
            }]
        );
    }

    #[test]
    fn relative_avatar_path_is_valid() {
        let mut data = base();
        data.avatar_url = "/images/avatar.png".to_string();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn avatar_with_whitespace_is_invalid() {
        let mut data = base();
        data.avatar_url = "not an avatar".to_string();

        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidAvatarUrl {
                value: "not an avatar".to_string(),
            }]
        );
    }

    #[test]
    fn bad_demo_url_is_invalid() {
        let mut data = base();
        let mut l = link("Project", "https://example.com/project");
        l.demo_url = Some("::nope::".to_string());
        data.links.push(l);

        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidDemoUrl {
                index: 0,
                label: "Project".to_string(),
                value: "::nope::".to_string(),
            }]
        );
    }

    #[test]
    fn collects_multiple_issues() {
        let mut data = base();
        data.name = String::new();
        data.links.push(PortfolioLink {
            label: String::new(),
            url: String::new(),
            icon: Icon::Emoji(String::new()),
            demo_url: None,
        });

        let issues = validate(&data);
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&ValidationIssue::EmptyName));
        assert!(issues.contains(&ValidationIssue::EmptyUrl {
            index: 0,
            label: String::new(),
        }));
    }
}
