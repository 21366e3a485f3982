use crate::services::ranking::{RankingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;

/// Anything that can be ranked by its title and description text
pub trait Candidate {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// Text used for vectorization: title and description joined by one space
    fn text(&self) -> String {
        format!("{} {}", self.title(), self.description())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

/// A user's declared skills and interests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl Profile {
    pub fn new<S: Into<String>>(
        skills: impl IntoIterator<Item = S>,
        interests: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }

    /// Skills followed by interests, in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(self.interests.iter())
            .map(String::as_str)
    }

    pub fn attribute_count(&self) -> usize {
        self.skills.len() + self.interests.len()
    }
}

/// Caller-owned project identifier, carried through ranking unchanged
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{}", n),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        ProjectId::Number(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        ProjectId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, title: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Candidate for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A candidate paired with its aggregate similarity score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedProject<T> {
    #[serde(flatten)]
    pub project: T,
    pub score: f64,
}

/// Input document: `{ "user": {...}, "projects": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    #[serde(alias = "profile")]
    pub user: Profile,
    pub projects: Vec<Project>,
}

impl RecommendationRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let request: Self = serde_json::from_reader(reader)?;
        request.validate()?;
        Ok(request)
    }

    /// Project ids must be unique so ranked output can be correlated back
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if !seen.insert(&project.id) {
                return Err(RankingError::InvalidInput(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }
        Ok(())
    }

    /// Example user and projects used when no input file is configured
    pub fn sample() -> Self {
        Self {
            user: Profile::new(["Swift"], ["Web"]),
            projects: vec![
                Project::new(
                    2,
                    "ML Image Classifier",
                    "A machine learning model to classify images using TensorFlow.",
                ),
                Project::new(
                    3,
                    "iOS Mobile Game",
                    "A 2D platformer game developed in Swift for iOS devices.",
                ),
                Project::new(
                    1,
                    "Advanced Webite App",
                    "A full-stack web application using React, Node.js, and MongoDB.",
                ),
            ],
        }
    }
}
