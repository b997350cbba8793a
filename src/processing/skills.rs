//! Skill keyword matching against the fixed categorized skill table

use crate::processing::capitalize_first;
use crate::processing::resume::SkillCategoryMatches;
use regex::Regex;
use std::collections::HashSet;

/// The static skill table: nine fixed categories of lowercase skill tokens.
/// Process-wide immutable configuration; compiled into matchers once per
/// extractor construction.
fn skills_database() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Programming Languages",
            vec![
                "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "go",
                "rust", "scala", "kotlin", "swift", "r", "matlab", "perl", "lua", "dart",
                "elixir", "clojure",
            ],
        ),
        (
            "Web Development",
            vec![
                "react", "angular", "vue", "svelte", "node.js", "express", "django", "flask",
                "fastapi", "spring", "laravel", "rails", "html", "css", "sass", "less",
                "bootstrap", "tailwind", "material-ui", "next.js", "nuxt.js", "gatsby",
                "webpack", "vite",
            ],
        ),
        (
            "Data Science",
            vec![
                "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
                "matplotlib", "seaborn", "plotly", "jupyter", "tableau", "power bi",
                "apache spark", "hadoop", "dask", "xgboost", "lightgbm", "catboost", "mlflow",
                "airflow", "kubeflow",
            ],
        ),
        (
            "Databases",
            vec![
                "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra",
                "oracle", "sqlite", "dynamodb", "neo4j", "influxdb", "firebase", "supabase",
                "prisma",
            ],
        ),
        (
            "Cloud & DevOps",
            vec![
                "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible",
                "jenkins", "gitlab ci", "github actions", "travis ci", "helm", "istio",
                "prometheus", "grafana", "elk stack", "datadog", "new relic", "consul",
                "vault",
            ],
        ),
        (
            "AI & Machine Learning",
            vec![
                "machine learning", "deep learning", "neural networks", "nlp",
                "computer vision", "reinforcement learning", "transformers", "bert", "gpt",
                "opencv", "spacy", "nltk", "hugging face", "langchain", "llama",
                "stable diffusion",
            ],
        ),
        (
            "Mobile Development",
            vec![
                "react native", "flutter", "ionic", "xamarin", "swift", "kotlin",
                "objective-c", "android studio", "xcode", "cordova", "phonegap",
            ],
        ),
        (
            "Soft Skills",
            vec![
                "leadership", "communication", "teamwork", "problem-solving",
                "analytical thinking", "creative thinking", "project management", "agile",
                "scrum", "kanban", "mentoring", "cross-functional collaboration",
                "stakeholder management", "strategic planning",
            ],
        ),
        (
            "Tools & Platforms",
            vec![
                "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack",
                "microsoft teams", "vs code", "intellij", "eclipse", "postman", "insomnia",
                "figma", "sketch", "adobe", "notion", "miro", "lucidchart",
            ],
        ),
    ]
}

struct SkillPattern {
    skill: &'static str,
    regex: Regex,
}

struct SkillCategory {
    name: &'static str,
    patterns: Vec<SkillPattern>,
}

/// Matches resume text against the skill table with case-insensitive
/// whole-word patterns.
pub struct SkillsExtractor {
    categories: Vec<SkillCategory>,
}

impl Default for SkillsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsExtractor {
    pub fn new() -> Self {
        let categories = skills_database()
            .into_iter()
            .map(|(name, skills)| SkillCategory {
                name,
                patterns: skills
                    .into_iter()
                    .map(|skill| SkillPattern {
                        skill,
                        regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(skill)))
                            .expect("Invalid skill regex"),
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }

    /// Match the text against every skill token. Categories with no matches
    /// are omitted entirely; matched skills keep table order and are
    /// deduplicated within their category.
    pub fn extract(&self, text: &str) -> Vec<SkillCategoryMatches> {
        let text_lower = text.to_lowercase();
        let mut found = Vec::new();

        for category in &self.categories {
            let mut seen = HashSet::new();
            let mut skills = Vec::new();

            for pattern in &category.patterns {
                if pattern.regex.is_match(&text_lower) && seen.insert(pattern.skill) {
                    skills.push(capitalize_first(pattern.skill));
                }
            }

            if !skills.is_empty() {
                found.push(SkillCategoryMatches {
                    category: category.name.to_string(),
                    skills,
                });
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_for<'a>(
        matches: &'a [SkillCategoryMatches],
        category: &str,
    ) -> Option<&'a Vec<String>> {
        matches
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.skills)
    }

    #[test]
    fn test_case_insensitive_matching() {
        let extractor = SkillsExtractor::new();
        let matches = extractor.extract("Experienced in PYTHON and JavaScript development");
        let languages = skills_for(&matches, "Programming Languages").unwrap();
        assert!(languages.contains(&"Python".to_string()));
        assert!(languages.contains(&"Javascript".to_string()));
    }

    #[test]
    fn test_whole_word_boundary_required() {
        let extractor = SkillsExtractor::new();

        let matches = extractor.extract("I write pythonic code");
        assert!(skills_for(&matches, "Programming Languages").is_none());

        let matches = extractor.extract("I write Python code");
        assert!(skills_for(&matches, "Programming Languages").is_some());
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let extractor = SkillsExtractor::new();
        let matches = extractor.extract("docker and kubernetes");
        assert!(skills_for(&matches, "Cloud & DevOps").is_some());
        assert!(skills_for(&matches, "Databases").is_none());
        assert!(skills_for(&matches, "Soft Skills").is_none());
    }

    #[test]
    fn test_table_order_is_preserved() {
        let extractor = SkillsExtractor::new();
        // Mention java before python; output follows table order, not text order.
        let matches = extractor.extract("java then python");
        let languages = skills_for(&matches, "Programming Languages").unwrap();
        assert_eq!(languages, &vec!["Python".to_string(), "Java".to_string()]);
    }

    #[test]
    fn test_repeated_mentions_are_deduplicated() {
        let extractor = SkillsExtractor::new();
        let matches = extractor.extract("python python Python");
        let languages = skills_for(&matches, "Programming Languages").unwrap();
        assert_eq!(languages.len(), 1);
    }

    #[test]
    fn test_multi_word_and_special_character_tokens() {
        let extractor = SkillsExtractor::new();
        let matches = extractor.extract("machine learning models deployed with node.js services");
        assert!(skills_for(&matches, "AI & Machine Learning")
            .unwrap()
            .contains(&"Machine learning".to_string()));
        assert!(skills_for(&matches, "Web Development")
            .unwrap()
            .contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_empty_text_yields_no_matches() {
        let extractor = SkillsExtractor::new();
        assert!(extractor.extract("").is_empty());
    }
}
