use crate::models::Recommendation;
use crate::store::RecordStore;

/// Catalog rows returned per missing skill.
const MATCHES_PER_SKILL: usize = 2;

/// Maps missing-skill names to learning resources by case-insensitive
/// substring lookup, preserving skill-then-match order. Skills with no
/// catalog hit simply contribute nothing.
pub async fn recommend(
    store: &impl RecordStore,
    missing_skills: &[String],
) -> anyhow::Result<Vec<Recommendation>> {
    let mut recommendations = Vec::new();

    for skill in missing_skills {
        let resources = store.resources_for_skill(skill, MATCHES_PER_SKILL).await?;
        for resource in resources {
            recommendations.push(Recommendation {
                skill: skill.clone(),
                title: resource.title,
                url: resource.url,
                kind: resource.kind,
            });
        }
    }

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;
    use crate::store::memory::MemoryStore;

    fn resource(skill_name: &str, title: &str) -> Resource {
        Resource {
            skill_name: skill_name.to_string(),
            title: title.to_string(),
            url: format!("https://learn.example.com/{}", title.to_lowercase()),
            kind: "Course".to_string(),
        }
    }

    fn catalog() -> MemoryStore {
        MemoryStore {
            resources: vec![
                resource("python basics", "Python Crash Course"),
                resource("Advanced PYTHON", "Fluent Python"),
                resource("sql", "SQL Fundamentals"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn matches_case_insensitively_on_substring() {
        let store = catalog();
        let results = recommend(&store, &["Python".to_string()]).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Python Crash Course");
        assert_eq!(results[1].title, "Fluent Python");
        assert!(results.iter().all(|r| r.skill == "Python"));
    }

    #[tokio::test]
    async fn caps_at_two_matches_per_skill() {
        let mut store = catalog();
        store.resources.push(resource("python web", "Django for APIs"));
        let results = recommend(&store, &["python".to_string()]).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn preserves_skill_then_match_order() {
        let store = catalog();
        let skills = vec!["sql".to_string(), "python".to_string()];
        let results = recommend(&store, &skills).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].skill, "sql");
        assert_eq!(results[0].title, "SQL Fundamentals");
        assert_eq!(results[1].skill, "python");
        assert_eq!(results[2].skill, "python");
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let store = catalog();
        let results = recommend(&store, &[]).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn unmatched_skill_contributes_no_entries() {
        let store = catalog();
        let skills = vec!["haskell".to_string(), "sql".to_string()];
        let results = recommend(&store, &skills).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].skill, "sql");
    }
}
