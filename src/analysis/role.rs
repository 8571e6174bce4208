//! Target job roles understood by the analysis backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Data Scientist")]
    DataScientist,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::BackendDeveloper,
        Role::FrontendDeveloper,
        Role::FullStackDeveloper,
        Role::DataScientist,
    ];

    /// Name sent in the `role` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::BackendDeveloper => "Backend Developer",
            Role::FrontendDeveloper => "Frontend Developer",
            Role::FullStackDeveloper => "Full Stack Developer",
            Role::DataScientist => "Data Scientist",
        }
    }

    /// Short command-line alias.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::BackendDeveloper => "backend",
            Role::FrontendDeveloper => "frontend",
            Role::FullStackDeveloper => "fullstack",
            Role::DataScientist => "data-scientist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Accepts the display name, the slug, or either with `-`/`_` in place of spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        Role::ALL
            .iter()
            .copied()
            .find(|role| {
                let name: String = role.as_str().to_lowercase().replace(' ', "");
                let slug: String = role.slug().replace('-', "");
                normalized == name || normalized == slug
            })
            .ok_or_else(|| {
                let names: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
                format!("Invalid role: '{}'. Available roles: {}", s, names.join(", "))
            })
    }
}
