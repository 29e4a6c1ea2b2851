//! Remedy product line categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of the remedies product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemedyCategory {
    Wealth,
    Health,
    Relationship,
    Protection,
    SelfConfidence,
    Education,
    CrownChakra,
    ThirdEyeChakra,
    ThroatChakra,
    HeartChakra,
    SolarPlexusChakra,
    SacralChakra,
    RootChakra,
}

impl RemedyCategory {
    /// Every category, in menu order.
    pub const ALL: [RemedyCategory; 13] = [
        RemedyCategory::Wealth,
        RemedyCategory::Health,
        RemedyCategory::Relationship,
        RemedyCategory::Protection,
        RemedyCategory::SelfConfidence,
        RemedyCategory::Education,
        RemedyCategory::CrownChakra,
        RemedyCategory::ThirdEyeChakra,
        RemedyCategory::ThroatChakra,
        RemedyCategory::HeartChakra,
        RemedyCategory::SolarPlexusChakra,
        RemedyCategory::SacralChakra,
        RemedyCategory::RootChakra,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            RemedyCategory::Wealth => "wealth",
            RemedyCategory::Health => "health",
            RemedyCategory::Relationship => "relationship",
            RemedyCategory::Protection => "protection",
            RemedyCategory::SelfConfidence => "self-confidence",
            RemedyCategory::Education => "education",
            RemedyCategory::CrownChakra => "crown-chakra",
            RemedyCategory::ThirdEyeChakra => "third-eye-chakra",
            RemedyCategory::ThroatChakra => "throat-chakra",
            RemedyCategory::HeartChakra => "heart-chakra",
            RemedyCategory::SolarPlexusChakra => "solar-plexus-chakra",
            RemedyCategory::SacralChakra => "sacral-chakra",
            RemedyCategory::RootChakra => "root-chakra",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RemedyCategory::Wealth => "Wealth",
            RemedyCategory::Health => "Health",
            RemedyCategory::Relationship => "Relationship",
            RemedyCategory::Protection => "Protection",
            RemedyCategory::SelfConfidence => "Self Confidence",
            RemedyCategory::Education => "Education",
            RemedyCategory::CrownChakra => "Crown Chakra",
            RemedyCategory::ThirdEyeChakra => "Third Eye Chakra",
            RemedyCategory::ThroatChakra => "Throat Chakra",
            RemedyCategory::HeartChakra => "Heart Chakra",
            RemedyCategory::SolarPlexusChakra => "Solar Plexus Chakra",
            RemedyCategory::SacralChakra => "Sacral Chakra",
            RemedyCategory::RootChakra => "Root Chakra",
        }
    }

    /// Parse a slug, ignoring case and surrounding whitespace.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for RemedyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
