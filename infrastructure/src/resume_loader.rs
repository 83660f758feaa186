use domain::models::Profile;
use shared::types::Result;
use std::path::Path;
use std::time::Duration;

/// Mock resume "parser". Any file is accepted, its content is never
/// read; after a fixed delay the same placeholder profile comes back.
/// There is no failure path.
pub struct ResumeLoader {
    delay: Duration,
}

impl ResumeLoader {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub async fn load(&self, _path: &Path) -> Result<Profile> {
        tokio::time::sleep(self.delay).await;
        Ok(placeholder_profile())
    }
}

/// The fixed profile every upload resolves to.
pub fn placeholder_profile() -> Profile {
    Profile {
        name: "Alex Johnson".to_string(),
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "Python".to_string(),
            "SQL".to_string(),
            "AWS".to_string(),
            "Docker".to_string(),
            "Git".to_string(),
        ],
        experience: vec![
            "Senior Frontend Developer at TechCorp (2021-2024)".to_string(),
            "Full Stack Developer at StartupXYZ (2019-2021)".to_string(),
            "Junior Developer at WebAgency (2018-2019)".to_string(),
        ],
        education: "Bachelor of Science in Computer Science, Tech University (2018)".to_string(),
    }
}
