use crate::analysis::keywords::tokenize;

/// Single-token skills recognised in a résumé. Multi-word skills such as
/// "machine learning" cannot match because résumés are compared token by token.
pub const SKILL_VOCABULARY: &[&str] = &[
    "agile",
    "analytics",
    "angular",
    "ansible",
    "aws",
    "azure",
    "communication",
    "css",
    "django",
    "docker",
    "excel",
    "express",
    "flask",
    "gcp",
    "git",
    "go",
    "graphql",
    "hadoop",
    "html",
    "java",
    "javascript",
    "jenkins",
    "jira",
    "kafka",
    "kotlin",
    "kubernetes",
    "leadership",
    "linux",
    "management",
    "microservices",
    "mongodb",
    "mysql",
    "node",
    "nosql",
    "numpy",
    "pandas",
    "php",
    "postgresql",
    "python",
    "pytorch",
    "react",
    "redis",
    "ruby",
    "rust",
    "scala",
    "scrum",
    "spark",
    "spring",
    "sql",
    "swift",
    "tableau",
    "teamwork",
    "tensorflow",
    "terraform",
    "typescript",
    "vue",
];

/// Returns the vocabulary skills present in `resume_text`, sorted.
pub fn extract_skills(resume_text: &str) -> Vec<String> {
    let tokens = tokenize(resume_text);
    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| tokens.contains(**skill))
        .map(|skill| skill.to_string())
        .collect();
    skills.sort();
    skills
}
