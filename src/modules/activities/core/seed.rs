// Initial directory contents.
//
// Purpose
// - Provide the default set of activities every fresh store starts with.
// - Load an alternative set from a JSON file shaped like the GET /activities response.
//
// Responsibilities
// - Reject seed data that would break the activity invariants up front.

use crate::modules::activities::core::activity::Activity;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid activity {name}: {reason}")]
    Invalid { name: String, reason: String },
}

pub fn default_activities() -> BTreeMap<String, Activity> {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}

pub fn load_activities_file(path: &Path) -> Result<BTreeMap<String, Activity>, SeedError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: display.clone(),
        source,
    })?;
    let activities = parse_activities(&contents).map_err(|source| SeedError::Parse {
        path: display,
        source,
    })?;
    validate_activities(&activities)?;
    Ok(activities)
}

fn parse_activities(contents: &str) -> Result<BTreeMap<String, Activity>, serde_json::Error> {
    serde_json::from_str(contents)
}

pub fn validate_activities(activities: &BTreeMap<String, Activity>) -> Result<(), SeedError> {
    for (name, activity) in activities {
        let mut seen = std::collections::HashSet::new();
        if let Some(duplicate) = activity.participants.iter().find(|p| !seen.insert(*p)) {
            return Err(SeedError::Invalid {
                name: name.clone(),
                reason: format!("participant {duplicate} is listed more than once"),
            });
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(SeedError::Invalid {
                name: name.clone(),
                reason: format!(
                    "{} participants exceed the capacity of {}",
                    activity.participants.len(),
                    activity.max_participants
                ),
            });
        }
    }
    Ok(())
}
