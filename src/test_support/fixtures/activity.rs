// Shared test fixture for Activity records.

use crate::modules::activities::core::activity::Activity;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: &[&str]) -> Self {
        self.inner.participants = v.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}
