//! Integration tests for the resume scanner

use resume_scan::input::manager::InputManager;
use resume_scan::processing::job_match::JobMatcher;
use resume_scan::processing::parser::ResumeParser;
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_from_path(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Bachelor of Science"));
}

#[tokio::test]
async fn test_extraction_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_from_path(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_from_path(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_caching_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_from_path(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.xyz");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "not a recognized format").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_from_path(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_from_path(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_scan_of_sample_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_from_path(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let data = ResumeParser::new().parse_text(&text);

    // Personal info
    assert_eq!(data.personal_info.name.as_deref(), Some("John Doe"));
    assert_eq!(
        data.personal_info.email.as_deref(),
        Some("john.doe@example.com")
    );
    assert_eq!(data.personal_info.phone.as_deref(), Some("(555) 123-4567"));
    assert_eq!(
        data.personal_info.linkedin.as_deref(),
        Some("https://linkedin.com/in/johndoe")
    );
    assert_eq!(
        data.personal_info.github.as_deref(),
        Some("https://github.com/johndoe")
    );

    // Skills: categories in table order, omitting unmatched categories
    let categories: Vec<&str> = data.skills.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(
        categories,
        vec![
            "Programming Languages",
            "Web Development",
            "Databases",
            "Cloud & DevOps",
            "Soft Skills",
            "Tools & Platforms"
        ]
    );
    let languages = &data.skills[0].skills;
    assert_eq!(languages, &["Python", "Javascript", "Typescript"]);
    assert_eq!(data.skills_count, 14);

    // Experience: two job entries plus the education line (it contains a year)
    assert_eq!(data.experience_count, 3);
    assert!(data.experience[0].title.contains("Senior Software Engineer"));
    assert_eq!(data.experience[0].description.len(), 3);
    assert_eq!(data.experience[1].description.len(), 2);

    // Education
    assert_eq!(data.education.len(), 1);
    assert_eq!(data.education[0].degree, "Bachelor");
    assert_eq!(data.education[0].year.as_deref(), Some("2019"));

    // Score: 30 personal + 25 skills + 24 experience + 5 education + 3 formatting
    assert_eq!(data.score_breakdown.personal_info, 30);
    assert_eq!(data.score_breakdown.skills, 25);
    assert_eq!(data.score_breakdown.experience, 24);
    assert_eq!(data.score_breakdown.education, 5);
    assert_eq!(data.score_breakdown.formatting, 3);
    assert_eq!(data.score_breakdown.keywords, 0);
    assert_eq!(data.ats_score, 87);
    assert_eq!(data.ats_score, data.score_breakdown.total());

    // Short resume: the only firing rule is the expand-content one.
    assert_eq!(data.recommendations.len(), 1);
    assert!(data.recommendations[0].contains("Expand your resume content"));
    assert!(data.recommendations.len() <= 8);
}

#[tokio::test]
async fn test_job_matching_against_sample_job() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_from_path(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_from_path(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let report = JobMatcher::new().score(&resume_text, &job_text);

    assert!((report.match_score - 70.0).abs() < 0.01);
    for keyword in ["python", "aws", "docker", "kubernetes", "postgresql"] {
        assert!(
            report.matching_keywords.contains(&keyword.to_string()),
            "expected matching keyword {}",
            keyword
        );
    }
    assert!(report.missing_keywords.contains(&"terraform".to_string()));
    assert!(!report
        .missing_keywords
        .iter()
        .any(|k| report.matching_keywords.contains(k)));
}

#[tokio::test]
async fn test_scan_is_idempotent() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_from_path(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let parser = ResumeParser::new();
    assert_eq!(parser.parse_text(&text), parser.parse_text(&text));
}
