use crate::models::{Candidate, Profile, RankedProject};
use crate::services::similarity::cosine_similarity;
use crate::services::text::{to_term_vector, TermVector};
use std::cmp::Ordering;
use tracing::debug;

/// Ranking Layer - 文本相似度打分
/// Scores each candidate as the sum of its cosine similarities against every
/// skill and interest of the profile.
#[derive(Debug, Clone, Default)]
pub struct RankingLayer {
    /// Maximum candidates to return; `None` keeps all
    limit: Option<usize>,
}

impl RankingLayer {
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Create with a top-k cut applied after sorting
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self {
            limit: config.top_k,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// 對候選集進行打分排序, returning the candidates only
    pub fn rank<T: Candidate>(&self, profile: &Profile, candidates: Vec<T>) -> Vec<T> {
        self.rank_with_scores(profile, candidates)
            .into_iter()
            .map(|ranked| ranked.project)
            .collect()
    }

    /// Rank and keep each candidate's aggregate score
    pub fn rank_with_scores<T: Candidate>(
        &self,
        profile: &Profile,
        candidates: Vec<T>,
    ) -> Vec<RankedProject<T>> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let profile_vectors = self.vectorize_profile(profile);

        debug!(
            candidate_count = candidates.len(),
            attribute_count = profile_vectors.len(),
            "Ranking candidates"
        );

        let mut ranked: Vec<RankedProject<T>> = candidates
            .into_iter()
            .map(|candidate| {
                let score = self.compute_score(&profile_vectors, &candidate);
                RankedProject {
                    project: candidate,
                    score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep input order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }

        debug!(
            ranked_count = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            "Ranking complete"
        );

        ranked
    }

    /// Skills first, then interests; each vectorized once per call
    fn vectorize_profile(&self, profile: &Profile) -> Vec<TermVector> {
        profile.attributes().map(to_term_vector).collect()
    }

    /// Sum (not mean) of similarities against all profile vectors
    fn compute_score<T: Candidate>(&self, profile_vectors: &[TermVector], candidate: &T) -> f64 {
        let candidate_vector = to_term_vector(&candidate.text());

        profile_vectors
            .iter()
            .fold(0.0, |acc, attribute| {
                acc + cosine_similarity(attribute, &candidate_vector)
            })
    }
}

/// Rank `candidates` against `profile` with the default layer
pub fn recommend<T: Candidate>(profile: &Profile, candidates: Vec<T>) -> Vec<T> {
    RankingLayer::new().rank(profile, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, ProjectId, RecommendationRequest};
    use proptest::prelude::*;

    fn ids<T: std::borrow::Borrow<Project>>(projects: &[T]) -> Vec<ProjectId> {
        projects.iter().map(|p| p.borrow().id.clone()).collect()
    }

    #[test]
    fn test_sample_request_order() {
        let request = RecommendationRequest::sample();
        let ranked = recommend(&request.user, request.projects);

        // web (1/sqrt 12) > swift (1/sqrt 17) > no overlap
        assert_eq!(ids(&ranked), vec![1.into(), 3.into(), 2.into()]);
    }

    #[test]
    fn test_sample_scores() {
        let request = RecommendationRequest::sample();
        let ranked = RankingLayer::new().rank_with_scores(&request.user, request.projects);

        assert_eq!(ranked.len(), 3);
        assert!((ranked[0].score - 1.0 / 12f64.sqrt()).abs() < 1e-12);
        assert!((ranked[1].score - 1.0 / 17f64.sqrt()).abs() < 1e-12);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_empty_candidates() {
        let profile = Profile::new(["Swift"], ["Web"]);
        let ranked: Vec<Project> = recommend(&profile, Vec::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_profile_keeps_input_order() {
        let request = RecommendationRequest::sample();
        let expected = ids(&request.projects);

        let ranked = RankingLayer::new().rank_with_scores(&Profile::default(), request.projects);

        assert!(ranked.iter().all(|r| r.score == 0.0));
        let order: Vec<ProjectId> = ranked.iter().map(|r| r.project.id.clone()).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_equal_scores_are_stable() {
        let profile = Profile::new(["rust"], Vec::<&str>::new());
        let candidates = vec![
            Project::new("a", "Rust CLI", "tool"),
            Project::new("b", "Go service", "backend"),
            Project::new("c", "Rust CLI", "tool"),
            Project::new("d", "Python", "scripts"),
        ];

        let ranked = recommend(&profile, candidates);

        assert_eq!(
            ids(&ranked),
            vec!["a".into(), "c".into(), "b".into(), "d".into()]
        );
    }

    #[test]
    fn test_sum_not_average() {
        let project = Project::new(1, "Swift", "game");
        let once = Profile::new(["Swift"], Vec::<&str>::new());
        let twice = Profile::new(["Swift", "Swift"], Vec::<&str>::new());
        let layer = RankingLayer::new();

        let single = layer.rank_with_scores(&once, vec![project.clone()])[0].score;
        let double = layer.rank_with_scores(&twice, vec![project])[0].score;

        assert!((double - 2.0 * single).abs() < 1e-12);
    }

    #[test]
    fn test_skills_and_interests_both_count() {
        let profile = Profile::new(["swift"], ["games"]);
        let candidates = vec![
            Project::new(1, "Swift app", "utility"),
            Project::new(2, "Swift games", "arcade"),
        ];

        let ranked = recommend(&profile, candidates);
        assert_eq!(ids(&ranked), vec![2.into(), 1.into()]);
    }

    #[test]
    fn test_limit_truncates_after_sort() {
        let request = RecommendationRequest::sample();
        let ranked = RankingLayer::with_limit(1).rank(&request.user, request.projects);

        assert_eq!(ids(&ranked), vec![1.into()]);
    }

    #[test]
    fn test_limit_from_config() {
        let config = crate::Config {
            top_k: Some(2),
            ..Default::default()
        };
        assert_eq!(RankingLayer::from_config(&config).limit(), Some(2));
        assert_eq!(RankingLayer::new().limit(), None);
    }

    #[test]
    fn test_ranks_borrowed_candidates() {
        let request = RecommendationRequest::sample();
        let borrowed: Vec<&Project> = request.projects.iter().collect();

        let ranked = recommend(&request.user, borrowed);

        assert_eq!(ids(&ranked), vec![1.into(), 3.into(), 2.into()]);
        assert_eq!(request.projects, RecommendationRequest::sample().projects);
    }

    #[test]
    fn test_deterministic() {
        let request = RecommendationRequest::sample();
        let first = recommend(&request.user, request.projects.clone());
        let second = recommend(&request.user, request.projects);

        assert_eq!(first, second);
    }

    fn project_strategy() -> impl Strategy<Value = Vec<Project>> {
        proptest::collection::vec(("[a-d ]{0,12}", "[a-d ]{0,24}"), 0..10).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (title, description))| Project::new(i as i64, &title, &description))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_output_is_permutation(
            skills in proptest::collection::vec("[a-d]{1,2}", 0..3),
            interests in proptest::collection::vec("[a-d]{1,2}", 0..3),
            projects in project_strategy(),
        ) {
            let profile = Profile { skills, interests };
            let mut expected = ids(&projects);
            let mut actual = ids(&recommend(&profile, projects));

            let key = |id: &ProjectId| id.to_string();
            expected.sort_by_key(key);
            actual.sort_by_key(key);
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_scores_descending_and_ties_stable(
            skills in proptest::collection::vec("[a-d]{1,2}", 0..3),
            projects in project_strategy(),
        ) {
            let profile = Profile { skills, interests: Vec::new() };
            let ranked = RankingLayer::new().rank_with_scores(&profile, projects);

            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    // ids are input positions
                    prop_assert!(key_of(&pair[0].project.id) < key_of(&pair[1].project.id));
                }
            }
        }
    }

    fn key_of(id: &ProjectId) -> i64 {
        match id {
            ProjectId::Number(n) => *n,
            ProjectId::Text(_) => i64::MAX,
        }
    }
}
