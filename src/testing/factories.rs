//! Test factories for creating test data with sensible defaults.
//!
//! Use the `*_with()` variants to customize specific fields.

use crate::github::Repository;

/// Create a Repository with default test values.
pub fn repository(name: &str) -> Repository {
    Repository {
        full_name: format!("octocat/{name}"),
        name: name.to_string(),
        description: None,
        homepage: None,
        html_url: format!("https://github.com/octocat/{name}"),
        language: None,
        topics: vec![],
        stargazers_count: 0,
        forks_count: 0,
    }
}

/// Create a Repository with customizations applied via closure.
pub fn repository_with(name: &str, f: impl FnOnce(&mut Repository)) -> Repository {
    let mut r = repository(name);
    f(&mut r);
    r
}

/// Create `count` repositories named repo-0, repo-1, ..., in order.
pub fn repositories(count: usize) -> Vec<Repository> {
    (0..count).map(|i| repository(&format!("repo-{i}"))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_defaults() {
        let r = repository("demo");
        assert_eq!(r.full_name, "octocat/demo");
        assert_eq!(r.html_url, "https://github.com/octocat/demo");
        assert_eq!(r.stargazers_count, 0);
    }

    #[test]
    fn repository_with_customization() {
        let r = repository_with("demo", |r| {
            r.language = Some("Rust".to_string());
            r.stargazers_count = 7;
        });
        assert_eq!(r.language.as_deref(), Some("Rust"));
        assert_eq!(r.stargazers_count, 7);
    }

    #[test]
    fn repositories_are_ordered_and_distinct() {
        let repos = repositories(3);
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo-0", "repo-1", "repo-2"]);
    }
}
