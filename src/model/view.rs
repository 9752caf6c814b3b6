use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Leaderboard,
    Analytics,
    Insights,
    Profile,
}

pub fn view_order() -> &'static [View] {
    &[
        View::Leaderboard,
        View::Analytics,
        View::Insights,
        View::Profile,
    ]
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Leaderboard => "leaderboard",
            View::Analytics => "analytics",
            View::Insights => "insights",
            View::Profile => "profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        view_order()
            .iter()
            .copied()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| {
                format!(
                    "unknown view '{s}' (use leaderboard|analytics|insights|profile)"
                )
            })
    }
}
