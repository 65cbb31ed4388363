//! Catalog - Static brand and phrase tables

use crate::domain::value_objects::ProductLine;

/// Brand used when neither the caller nor the category table supplies one
pub const DEFAULT_BRAND: &str = "ARM & HAMMER";

/// Base name used for categories outside the known product lines
pub const FALLBACK_BASE_NAME: &str = "Innovation";

/// Innovation descriptor: the technology and what it does for the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Innovation {
    pub tech: &'static str,
    pub benefit: &'static str,
}

pub const INNOVATIONS: [Innovation; 10] = [
    Innovation {
        tech: "AI-powered personalization",
        benefit: "adapts to your unique needs",
    },
    Innovation {
        tech: "biodegradable capsules",
        benefit: "dissolves completely in water",
    },
    Innovation {
        tech: "microbiome technology",
        benefit: "supports natural balance",
    },
    Innovation {
        tech: "carbon-negative formula",
        benefit: "removes CO2 from atmosphere",
    },
    Innovation {
        tech: "smart sensor technology",
        benefit: "tracks usage and effectiveness",
    },
    Innovation {
        tech: "waterless concentrate",
        benefit: "just add water at home",
    },
    Innovation {
        tech: "probiotic-enhanced",
        benefit: "promotes healthy bacteria",
    },
    Innovation {
        tech: "plant-based enzymes",
        benefit: "100% natural cleaning power",
    },
    Innovation {
        tech: "zero-waste refills",
        benefit: "reusable forever packaging",
    },
    Innovation {
        tech: "UV-activated formula",
        benefit: "powered by sunlight",
    },
];

pub fn brands(line: ProductLine) -> &'static [&'static str] {
    match line {
        ProductLine::Laundry => &["ARM & HAMMER", "OXICLEAN", "XTRA"],
        ProductLine::OralCare => &[
            "ARM & HAMMER",
            "THERABREATH",
            "WATERPIK",
            "SPINBRUSH",
            "ORAJEL",
        ],
        ProductLine::PersonalCare => &["BATISTE", "NAIR", "FLAWLESS", "ARM & HAMMER"],
        ProductLine::Health => &["VITAFUSION", "L'IL CRITTERS", "ZICAM"],
        ProductLine::HomeCare => &["ARM & HAMMER", "KABOOM", "OXICLEAN"],
        ProductLine::PetCare => &["ARM & HAMMER"],
        ProductLine::SexualWellness => &["TROJAN", "FIRST RESPONSE"],
    }
}

pub fn base_names(line: ProductLine) -> &'static [&'static str] {
    match line {
        ProductLine::Laundry => &["UltraClean", "FreshWave", "PureWash", "EcoBoost", "SmartClean"],
        ProductLine::OralCare => &[
            "SmileBright",
            "FreshGuard",
            "TeethShield",
            "OralPure",
            "MouthCare",
        ],
        ProductLine::PersonalCare => &[
            "SkinGlow",
            "BodyFresh",
            "PureTouch",
            "DermaCare",
            "Refresh",
        ],
        ProductLine::Health => &[
            "VitaBoost",
            "HealthPlus",
            "NutriCore",
            "WellnessMax",
            "LifeForce",
        ],
        ProductLine::HomeCare => &[
            "CleanMaster",
            "HomePure",
            "SparkleClean",
            "FreshHome",
            "PowerClean",
        ],
        ProductLine::PetCare => &["PetFresh", "FurCare", "PawPure", "AnimalWell", "PetGuard"],
        ProductLine::SexualWellness => &[
            "IntimaCare",
            "LovePlus",
            "PureTouch",
            "WellnessPlus",
            "CareMax",
        ],
    }
}

pub const STANDARD_FEATURES: [&str; 2] =
    ["Clinically proven effectiveness", "Eco-friendly packaging"];

pub const STANDARD_USAGE: &str = "Use as directed for best results";

pub const STANDARD_PRICE: &str = "$19.99 - 24oz";

pub const STANDARD_SUSTAINABILITY: &str = "100% recyclable packaging, carbon neutral production";
