use serde::{Deserialize, Serialize};

/// One extracurricular offering. Keyed by its human-readable name in the
/// catalog, so the name itself is not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Advisory capacity. Stored and exposed, never checked on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
