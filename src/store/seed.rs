use crate::models::Activity;
use crate::store::catalog::Catalog;

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

/// The fixed school catalog. Built once at startup; membership never changes
/// at runtime, only the rosters do.
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Basketball".to_string(),
        activity(
            "Team sport and basketball skills training",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
    );
    catalog.insert(
        "Tennis Club".to_string(),
        activity(
            "Tennis lessons and competitive matches",
            "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
            10,
            &["sarah@mergington.edu"],
        ),
    );
    catalog.insert(
        "Art Studio".to_string(),
        activity(
            "Painting, drawing, and visual arts exploration",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["maya@mergington.edu", "lucas@mergington.edu"],
        ),
    );
    catalog.insert(
        "Music Band".to_string(),
        activity(
            "Learn instruments and perform in school concerts",
            "Fridays, 4:00 PM - 5:30 PM",
            20,
            &["james@mergington.edu"],
        ),
    );
    catalog.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Mondays and Thursdays, 3:30 PM - 4:30 PM",
            12,
            &["rachel@mergington.edu", "david@mergington.edu"],
        ),
    );
    catalog.insert(
        "Science Club".to_string(),
        activity(
            "Explore scientific experiments and research projects",
            "Tuesdays, 3:30 PM - 5:00 PM",
            18,
            &["aiden@mergington.edu"],
        ),
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_activities_with_complete_metadata() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 9);
        for (name, activity) in &catalog {
            assert!(!name.is_empty());
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
            assert!(activity.max_participants > 0);
        }
    }

    #[test]
    fn chess_club_seed_roster() {
        let catalog = seed_catalog();
        let chess = &catalog["Chess Club"];
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn seed_rosters_have_no_duplicates() {
        let catalog = seed_catalog();
        for activity in catalog.values() {
            let mut seen = std::collections::HashSet::new();
            for email in &activity.participants {
                assert!(seen.insert(email), "duplicate seed email: {}", email);
            }
        }
    }
}
