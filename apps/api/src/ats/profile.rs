//! ATS profile: the keyword and section catalogs a résumé is scored against.
//!
//! The reference profile targets a MERN / full-stack internship résumé. Other
//! target roles load their own profile from a JSON file at startup
//! (`ATS_PROFILE_PATH`) without touching the scoring code.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REFERENCE_KEYWORDS: &[&str] = &[
    "mern",
    "fullstack",
    "javascript",
    "typescript",
    "node.js",
    "express",
    "react",
    "redux",
    "hooks",
    "mongodb",
    "sql",
    "git",
    "github",
    "docker",
    "cpp",
    "css",
    "nptel",
    "tailwind",
    "rest api",
    "html",
];

pub const REFERENCE_SECTIONS: &[&str] = &[
    "academic details",
    "internship/experience",
    "projects",
    "achievements",
    "skills",
    "extracurricular",
];

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile has an empty {0} catalog")]
    EmptyCatalog(&'static str),

    #[error("profile {0} catalog contains a blank entry")]
    BlankEntry(&'static str),

    #[error("profile keyword catalog lists {0:?} more than once (case-insensitive)")]
    DuplicateKeyword(String),

    #[error("profile display name {0:?} is shared by more than one keyword")]
    DuplicateDisplayName(String),
}

/// Immutable scoring configuration. Shared read-only across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsProfile {
    /// Canonical keywords, in report order.
    pub keywords: Vec<String>,
    /// Section-header phrases, matched as whole substrings.
    pub sections: Vec<String>,
    /// Catalog keyword (as written) → how it is shown in the matched list.
    #[serde(default)]
    pub display_names: BTreeMap<String, String>,
}

impl Default for AtsProfile {
    fn default() -> Self {
        Self {
            keywords: REFERENCE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            sections: REFERENCE_SECTIONS.iter().map(|s| s.to_string()).collect(),
            display_names: BTreeMap::from([("cpp".to_string(), "C++".to_string())]),
        }
    }
}

impl AtsProfile {
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: AtsProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        check_catalog("keyword", &self.keywords)?;
        check_catalog("section", &self.sections)?;
        self.check_display_names()
    }

    /// Every keyword needs its own display form, distinct from every other
    /// catalog entry. Otherwise one keyword's match hides another from both lists.
    fn check_display_names(&self) -> Result<(), ProfileError> {
        let mut folded = BTreeSet::new();
        for keyword in &self.keywords {
            if !folded.insert(keyword.to_lowercase()) {
                return Err(ProfileError::DuplicateKeyword(keyword.clone()));
            }
        }

        let mut shown = BTreeSet::new();
        for keyword in &self.keywords {
            let display = self.display_name(keyword);
            let shadows_other = display != keyword && self.keywords.iter().any(|k| k == display);
            if !shown.insert(display) || shadows_other {
                return Err(ProfileError::DuplicateDisplayName(display.to_string()));
            }
        }
        Ok(())
    }

    /// Display form of a catalog keyword.
    pub fn display_name<'a>(&'a self, keyword: &'a str) -> &'a str {
        self.display_names
            .get(keyword)
            .map(String::as_str)
            .unwrap_or(keyword)
    }
}

fn check_catalog(name: &'static str, entries: &[String]) -> Result<(), ProfileError> {
    if entries.is_empty() {
        return Err(ProfileError::EmptyCatalog(name));
    }
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(ProfileError::BlankEntry(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reference_profile_shape() {
        let profile = AtsProfile::default();
        assert_eq!(profile.keywords.len(), 20);
        assert_eq!(profile.sections.len(), 6);
        assert_eq!(profile.keywords[4], "node.js");
        assert_eq!(profile.keywords[18], "rest api");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_display_name_aliases_cpp_only() {
        let profile = AtsProfile::default();
        assert_eq!(profile.display_name("cpp"), "C++");
        assert_eq!(profile.display_name("react"), "react");
    }

    #[test]
    fn test_from_json_without_display_names() {
        let profile =
            AtsProfile::from_json(r#"{"keywords": ["rust", "tokio"], "sections": ["experience"]}"#)
                .unwrap();
        assert_eq!(profile.keywords, vec!["rust", "tokio"]);
        assert!(profile.display_names.is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_catalog() {
        let err = AtsProfile::from_json(r#"{"keywords": [], "sections": ["skills"]}"#).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyCatalog("keyword")));
    }

    #[test]
    fn test_from_json_rejects_blank_entry() {
        let err =
            AtsProfile::from_json(r#"{"keywords": ["rust"], "sections": ["  "]}"#).unwrap_err();
        assert!(matches!(err, ProfileError::BlankEntry("section")));
    }

    #[test]
    fn test_from_json_rejects_case_insensitive_duplicate_keyword() {
        let err = AtsProfile::from_json(r#"{"keywords": ["React", "react"], "sections": ["skills"]}"#)
            .unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateKeyword(ref k) if k == "react"));
    }

    #[test]
    fn test_from_json_rejects_two_keywords_with_one_display_name() {
        let err = AtsProfile::from_json(
            r#"{"keywords": ["cpp", "cplusplus"], "sections": ["skills"],
                "display_names": {"cpp": "C++", "cplusplus": "C++"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateDisplayName(ref d) if d == "C++"));
    }

    #[test]
    fn test_from_json_rejects_display_name_naming_another_keyword() {
        let err = AtsProfile::from_json(
            r#"{"keywords": ["js", "javascript"], "sections": ["skills"],
                "display_names": {"js": "javascript"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateDisplayName(ref d) if d == "javascript"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            AtsProfile::from_json("{not json").unwrap_err(),
            ProfileError::Json(_)
        ));
    }

    #[test]
    fn test_from_file_round_trips_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&AtsProfile::default()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = AtsProfile::from_file(file.path()).unwrap();
        assert_eq!(loaded, AtsProfile::default());
    }

    #[test]
    fn test_from_file_missing_reports_path() {
        let err = AtsProfile::from_file(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/profile.json"));
    }
}
