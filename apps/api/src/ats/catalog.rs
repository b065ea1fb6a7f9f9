//! Keyword catalog: the curated, role-grouped table of terms the extractor scans for.
//!
//! Loaded once at startup (builtin table or a JSON file) and shared read-only
//! behind an `Arc` for the life of the process.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::AnalysisError;

/// Builtin catalog, in scan order. Keywords are lower-case and may repeat
/// across groups; the extractor keeps the first occurrence.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "javascript", "react", "node.js", "typescript", "aws", "api", "restful", "github",
            "git", "agile", "scrum", "sql", "nosql", "docker", "kubernetes", "ci/cd",
            "full-stack", "backend", "frontend", "testing", "jest", "mocha",
        ],
    ),
    (
        "data scientist",
        &[
            "python", "r", "sql", "machine learning", "deep learning", "tensorflow", "pytorch",
            "pandas", "numpy", "scikit-learn", "data visualization", "statistics", "analytics",
            "hadoop", "spark", "big data", "nlp", "ai",
        ],
    ),
    (
        "product manager",
        &[
            "agile", "scrum", "product development", "user stories", "roadmap", "stakeholder",
            "requirements", "market research", "user experience", "analytics", "kpi", "metrics",
            "strategy", "competitive analysis", "jira",
        ],
    ),
    (
        "marketing",
        &[
            "seo", "sem", "social media", "content marketing", "google analytics",
            "campaign management", "email marketing", "digital marketing", "branding",
            "marketing strategy", "hubspot", "mailchimp", "conversion rate", "roi",
        ],
    ),
    (
        "finance",
        &[
            "financial analysis", "accounting", "budgeting", "forecasting", "excel",
            "financial reporting", "variance analysis", "balance sheet", "income statement",
            "cash flow", "financial modeling", "sap", "risk management", "auditing",
        ],
    ),
    (
        "sales",
        &[
            "account management", "client relationship", "crm", "salesforce", "hubspot",
            "lead generation", "negotiation", "closing", "pipeline management", "quotas", "b2b",
            "b2c", "sales strategy", "presentation", "customer acquisition",
        ],
    ),
    (
        "human resources",
        &[
            "recruiting", "onboarding", "employee relations", "benefits administration",
            "performance management", "talent acquisition", "hris", "compensation",
            "hr policies", "diversity", "inclusion", "training", "development",
        ],
    ),
    (
        "design",
        &[
            "figma", "sketch", "adobe creative suite", "ui/ux", "prototyping", "wireframing",
            "user research", "typography", "color theory", "responsive design", "visual design",
            "design systems", "photoshop", "illustrator", "indesign",
        ],
    ),
];

/// One job-role group. The label only groups keywords; it is never matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub label: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    groups: Vec<KeywordGroup>,
}

impl KeywordCatalog {
    /// The curated table shipped with the engine.
    pub fn builtin() -> Self {
        let groups = BUILTIN_GROUPS
            .iter()
            .map(|(label, keywords)| KeywordGroup {
                label: label.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { groups }
    }

    /// Builds a catalog from explicit groups. Every keyword must be non-empty
    /// and already lower-case, since matching lower-cases only the haystack.
    pub fn from_groups(groups: Vec<KeywordGroup>) -> Result<Self, AnalysisError> {
        for group in &groups {
            for keyword in &group.keywords {
                if keyword.trim().is_empty() {
                    return Err(AnalysisError::Catalog(format!(
                        "group '{}' contains an empty keyword",
                        group.label
                    )));
                }
                if *keyword != keyword.to_lowercase() {
                    return Err(AnalysisError::Catalog(format!(
                        "keyword '{keyword}' in group '{}' must be lower-case",
                        group.label
                    )));
                }
            }
        }
        Ok(Self { groups })
    }

    /// Parses `{ "<label>": ["keyword", ...], ... }`, keeping the object's key
    /// order as the scan order.
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let RawGroups(groups) =
            serde_json::from_str(json).map_err(|e| AnalysisError::Catalog(e.to_string()))?;
        Self::from_groups(groups)
    }

    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::Catalog(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Every keyword in scan order: groups in order, then keywords within a group.
    /// Repeats across groups are yielded as-is.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.keywords.iter().map(String::as_str))
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

struct GroupsVisitor;

impl<'de> Visitor<'de> for GroupsVisitor {
    type Value = Vec<KeywordGroup>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of group label to a list of keywords")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((label, keywords)) = map.next_entry::<String, Vec<String>>()? {
            groups.push(KeywordGroup { label, keywords });
        }
        Ok(groups)
    }
}

/// Groups as read from JSON, before validation.
struct RawGroups(Vec<KeywordGroup>);

impl<'de> Deserialize<'de> for RawGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GroupsVisitor).map(RawGroups)
    }
}
