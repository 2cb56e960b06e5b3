//! Resource kinds listed by the feature-store dashboard.

use std::fmt;
use std::str::FromStr;

/// Known resource types. The string form is the key the dashboard stores
/// selections under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Feature,
    Label,
    Source,
    TrainingSet,
    Entity,
    User,
    Model,
    Provider,
}

impl ResourceType {
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Feature,
        ResourceType::Label,
        ResourceType::Source,
        ResourceType::TrainingSet,
        ResourceType::Entity,
        ResourceType::User,
        ResourceType::Model,
        ResourceType::Provider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Feature => "Feature",
            ResourceType::Label => "Label",
            ResourceType::Source => "Source",
            ResourceType::TrainingSet => "TrainingSet",
            ResourceType::Entity => "Entity",
            ResourceType::User => "User",
            ResourceType::Model => "Model",
            ResourceType::Provider => "Provider",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown resource type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_display_for_all_types() {
        for ty in ResourceType::ALL {
            assert_eq!(ty.to_string().parse::<ResourceType>(), Ok(ty));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "feature".parse::<ResourceType>().expect_err("lowercase");
        assert!(err.contains("feature"));
    }
}
