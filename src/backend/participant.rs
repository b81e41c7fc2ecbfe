use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use chrono::{DateTime, Utc};

/// A candidate as returned by the recruitment profile endpoint.
///
/// Only the fields the modal renders directly are typed. Everything else the
/// API sends is kept verbatim in `details` and handed to the detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub user_id: String,
    pub profile: ParticipantProfile,
    #[serde(default)]
    pub social: Option<SocialLinks>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub country_of_residence: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.social.as_ref().and_then(|s| non_empty(s.linkedin.as_deref()))
    }

    pub fn github(&self) -> Option<&str> {
        self.social.as_ref().and_then(|s| non_empty(s.github.as_deref()))
    }
}

fn non_empty(link: Option<&str>) -> Option<&str> {
    link.filter(|l| !l.trim().is_empty())
}

/// Kind of a recorded recruiter action. Kinds this app does not act on are
/// kept as their wire string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Favorite,
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Favorite => "favorite",
            ActionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ActionKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "favorite" => ActionKind::Favorite,
            _ => ActionKind::Other(kind),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One entry of the action history: `user` is the profile the action targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecruitmentAction {
    pub user: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub timestamp: DateTime<Utc>,
}

impl RecruitmentAction {
    pub fn new(user: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            user: user.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}
