use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use leptos::server_fn::{
    codec::JsonEncoding,
    error::{FromServerFnError, ServerFnErrorErr},
};
#[cfg(not(feature = "hydrate"))]
use rust_embed::Embed;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

pub const PORTFOLIO_PATH: &str = "/api/portfolio";

#[cfg(not(feature = "hydrate"))]
#[derive(Embed)]
#[folder = "content"]
struct Content;

#[cfg(not(feature = "hydrate"))]
const EMBEDDED_FILE: &str = "portfolio.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
}

impl PersonalInfo {
    /// "Bikramjit Singh" -> "BS"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub description: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    Software,
    Techniques,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Programming,
        SkillCategory::Software,
        SkillCategory::Techniques,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Software => "Software & Tools",
            SkillCategory::Techniques => "Techniques",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub programming: Vec<String>,
    pub software: Vec<String>,
    pub techniques: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Software => &self.software,
            SkillCategory::Techniques => &self.techniques,
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = (SkillCategory, &[String])> + '_ {
        SkillCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

/// Metric key to display string, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics(Vec<(String, String)>);

impl Metrics {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A repeated key replaces the earlier value but keeps its position,
    /// the same as a JSON object parsed in a browser.
    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metrics = Metrics::default();
        for (k, v) in iter {
            metrics.insert(k.into(), v.into());
        }
        metrics
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct MetricsVisitor;

impl<'de> Visitor<'de> for MetricsVisitor {
    type Value = Metrics;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of metric names to display strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metrics, A::Error> {
        let mut metrics = Metrics(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            metrics.insert(k, v);
        }
        Ok(metrics)
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MetricsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub metrics: Metrics,
    pub image: String,
    pub link: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorytellingEntry {
    pub description: String,
    pub title: String,
    pub image: String,
    pub link: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub personal: PersonalInfo,
    pub about: About,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storytelling: Option<StorytellingEntry>,
    pub education: Education,
}

impl PortfolioDocument {
    /// Reject documents whose list entities would share a render key.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        first_duplicate(self.experience.iter().map(|e| e.id))
            .map(|id| DataLoadError::DuplicateId {
                collection: "experience".to_string(),
                id,
            })
            .or_else(|| {
                first_duplicate(self.projects.iter().map(|p| p.id)).map(|id| {
                    DataLoadError::DuplicateId {
                        collection: "projects".to_string(),
                        id,
                    }
                })
            })
            .map_or(Ok(()), Err)
    }

    pub fn from_json(url: &str, body: &str) -> Result<Self, DataLoadError> {
        let doc = serde_json::from_str::<Self>(body).map_err(|e| DataLoadError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// The document compiled into the binary.
    #[cfg(not(feature = "hydrate"))]
    pub fn embedded() -> Result<Self, DataLoadError> {
        let file = Content::get(EMBEDDED_FILE).ok_or_else(|| DataLoadError::Embedded {
            message: format!("{EMBEDDED_FILE} is missing from the build"),
        })?;
        let body = std::str::from_utf8(&file.data).map_err(|e| DataLoadError::Embedded {
            message: e.to_string(),
        })?;
        serde_json::from_str::<Self>(body)
            .map_err(|e| DataLoadError::Embedded {
                message: e.to_string(),
            })
            .and_then(|doc| doc.validate().map(|_| doc))
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = u32>) -> Option<u32> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

/// Stable list key for entities with an `id`. `occurrence` is zero unless the
/// same id appeared earlier in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub id: u32,
    pub occurrence: u32,
}

pub trait Keyed {
    fn key_id(&self) -> u32;
}

impl Keyed for ExperienceEntry {
    fn key_id(&self) -> u32 {
        self.id
    }
}

impl Keyed for ProjectEntry {
    fn key_id(&self) -> u32 {
        self.id
    }
}

/// Pair each item with its render key, preserving input order.
pub fn keyed<T: Keyed + Clone>(items: &[T]) -> Vec<(RenderKey, T)> {
    let mut counts = HashMap::<u32, u32>::new();
    items
        .iter()
        .map(|item| {
            let id = item.key_id();
            let count = counts.entry(id).or_default();
            let key = RenderKey {
                id,
                occurrence: *count,
            };
            *count += 1;
            (key, item.clone())
        })
        .collect()
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataLoadError {
    #[error("Backend URL is not configured (set {variable})")]
    Unconfigured { variable: String },
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status {
        url: String,
        status: u16,
        detail: Option<String>,
    },
    #[error("Couldn't parse portfolio data: {message}")]
    Malformed { url: String, message: String },
    #[error("Embedded portfolio data is invalid: {message}")]
    Embedded { message: String },
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: String, id: u32 },
    #[error("{message}")]
    Transport { message: String },
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("Request failed with status code {status}"),
    }
}

impl DataLoadError {
    /// The URL the failed attempt was made against, when there was one.
    pub fn target_url(&self) -> Option<&str> {
        match self {
            DataLoadError::Request { url, .. }
            | DataLoadError::Status { url, .. }
            | DataLoadError::Malformed { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl FromServerFnError for DataLoadError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        DataLoadError::Transport {
            message: value.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_document() -> PortfolioDocument {
        PortfolioDocument {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                title: "Data Analyst".to_string(),
                tagline: "Numbers into narratives".to_string(),
                phone: "555-0100".to_string(),
                email: "jane@example.com".to_string(),
                github: "https://github.com/jane".to_string(),
                linkedin: "https://linkedin.com/in/jane".to_string(),
                location: "Waterloo, ON".to_string(),
            },
            about: About {
                description: "Analyst.".to_string(),
                highlights: vec![
                    Highlight {
                        label: "Projects".to_string(),
                        value: "15+".to_string(),
                    },
                    Highlight {
                        label: "Models".to_string(),
                        value: "8".to_string(),
                    },
                ],
            },
            skills: Skills {
                programming: vec!["Rust".to_string(), "SQL".to_string()],
                software: vec!["Tableau".to_string()],
                techniques: vec!["Regression".to_string()],
            },
            experience: vec![
                ExperienceEntry {
                    id: 1,
                    title: "Intern".to_string(),
                    company: "Acme".to_string(),
                    location: "Edmonton".to_string(),
                    period: "2025".to_string(),
                    achievements: vec!["Raised engagement by **25%**".to_string()],
                },
                ExperienceEntry {
                    id: 2,
                    title: "Coordinator".to_string(),
                    company: "University".to_string(),
                    location: "Waterloo".to_string(),
                    period: "2024".to_string(),
                    achievements: vec![],
                },
            ],
            projects: vec![ProjectEntry {
                id: 1,
                title: "Predictor".to_string(),
                description: "Predicts prices.".to_string(),
                technologies: vec!["Python".to_string()],
                metrics: [("zeta", "1"), ("alpha", "2")].into_iter().collect(),
                image: "/assets/p.png".to_string(),
                link: "https://example.com".to_string(),
                github: "https://github.com/jane/p".to_string(),
            }],
            storytelling: None,
            education: Education {
                degree: "BMath".to_string(),
                school: "University of Waterloo".to_string(),
                location: "Waterloo, ON".to_string(),
                period: "2022 – Present".to_string(),
            },
        }
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back = serde_json::from_str::<PortfolioDocument>(&json).unwrap();
        assert_eq!(back, doc);

        let keys = back.projects[0]
            .metrics
            .iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_metrics_keep_json_order() {
        let metrics =
            serde_json::from_str::<Metrics>(r#"{"size":"9K+","KPI's":"10","accuracy":"98%"}"#)
                .unwrap();
        let keys = metrics.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(keys, vec!["size", "KPI's", "accuracy"]);
        assert_eq!(metrics.get("KPI's"), Some("10"));
        assert_eq!(
            serde_json::to_string(&metrics).unwrap(),
            r#"{"size":"9K+","KPI's":"10","accuracy":"98%"}"#
        );
    }

    #[test]
    fn test_storytelling_is_optional() {
        let mut value = serde_json::to_value(sample_document()).unwrap();
        assert!(value.get("storytelling").is_none());
        value["updated_at"] = serde_json::json!("2025-01-01T00:00:00Z");
        let doc = serde_json::from_value::<PortfolioDocument>(value).unwrap();
        assert!(doc.storytelling.is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut doc = sample_document();
        assert!(doc.validate().is_ok());

        doc.experience[1].id = 1;
        assert_eq!(
            doc.validate(),
            Err(DataLoadError::DuplicateId {
                collection: "experience".to_string(),
                id: 1
            })
        );

        let mut doc = sample_document();
        let mut dup = doc.projects[0].clone();
        dup.title = "Copy".to_string();
        doc.projects.push(dup);
        assert!(matches!(
            doc.validate(),
            Err(DataLoadError::DuplicateId { ref collection, id: 1 }) if collection == "projects"
        ));
    }

    #[test]
    fn test_keyed_tolerates_duplicates() {
        let mut doc = sample_document();
        doc.experience[1].id = 1;
        let keyed = keyed(&doc.experience);
        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed[0].0, RenderKey { id: 1, occurrence: 0 });
        assert_eq!(keyed[1].0, RenderKey { id: 1, occurrence: 1 });
        assert_eq!(keyed[0].1.title, "Intern");
        assert_eq!(keyed[1].1.title, "Coordinator");
    }

    #[test]
    fn test_from_json_reports_url() {
        let err = PortfolioDocument::from_json("http://backend/api/portfolio", "{\"personal\":")
            .unwrap_err();
        assert_eq!(err.target_url(), Some("http://backend/api/portfolio"));
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }

    #[test]
    fn test_status_message_prefers_detail() {
        let err = DataLoadError::Status {
            url: "u".to_string(),
            status: 404,
            detail: Some("Portfolio data not found. Please seed the database.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Portfolio data not found. Please seed the database."
        );
        let err = DataLoadError::Status {
            url: "u".to_string(),
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_embedded_document_is_valid() {
        let doc = PortfolioDocument::embedded().expect("embedded document should parse");
        assert!(!doc.personal.name.is_empty());
        assert!(!doc.experience.is_empty());
        assert!(!doc.projects.is_empty());
        assert_eq!(doc.personal.initials(), "BS");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_embedded_survives_json_value() {
        let doc = PortfolioDocument::embedded().unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        let back = serde_json::from_value::<PortfolioDocument>(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_skill_groups_in_display_order() {
        let doc = sample_document();
        let groups = doc.skills.groups().collect::<Vec<_>>();
        assert_eq!(groups[0].0, SkillCategory::Programming);
        assert_eq!(groups[0].1, ["Rust".to_string(), "SQL".to_string()]);
        assert_eq!(groups[2].0, SkillCategory::Techniques);
    }
}
