//! Static content models for the informational screens.
//!
//! Parsed from `assets/pages/*.json` at startup and rendered read-only.

use serde::{Deserialize, Serialize};

/// A product feature highlighted on the home screen.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Feature {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// An anonymized customer story shown on the home screen.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CaseStudy {
    pub id: String,
    pub company_type: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub effect: String,
    pub quote: String,
}

/// One numbered step of the getting-started guide.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuideStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
}

/// Content for the home screen (`assets/pages/home.json`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HomePage {
    pub tagline: String,
    pub features: Vec<Feature>,
    pub case_studies: Vec<CaseStudy>,
}

/// Content for the getting-started screen
/// (`assets/pages/getting_started.json`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuidePage {
    pub steps: Vec<GuideStep>,
}
