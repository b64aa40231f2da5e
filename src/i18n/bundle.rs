//! Typed shape of one language's content bundle.
//!
//! Every struct denies unknown fields, so both language files must use the
//! same field names to load at all. Optional fields are the only ones a
//! language may leave out.

use serde::{Deserialize, Serialize};

/// The complete display content for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Translations {
    pub navbar: NavbarText,
    pub hero: HeroText,
    pub about: AboutText,
    pub experience: ExperienceText,
    pub projects: ProjectsText,
    pub skills: SkillsText,
    pub footprint: FootprintText,
    pub certifications: CertificationsText,
    pub contact: ContactText,
    pub footer: FooterText,
    pub common: CommonText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavbarText {
    pub brand: String,
    pub about: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub certifications: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroText {
    pub badge: String,
    pub title: String,
    pub role: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub location: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutText {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceText {
    pub title: String,
    pub items: Vec<ExperienceEntry>,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsText {
    pub title: String,
    pub active_title: String,
    pub active_subtitle: String,
    pub active: Vec<ActiveProject>,
    pub featured: Vec<FeaturedProject>,
    pub other_title: String,
    pub other: Vec<OtherProject>,
    pub labels: ProjectLabels,
}

/// A project under active development, with a live deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActiveProject {
    pub name: String,
    pub status: String,
    pub description: String,
    pub live_url: String,
    pub github_url: String,
    /// Technologies separated by `•`
    pub tech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

impl ActiveProject {
    /// Technology chips split on the `•` separator.
    pub fn tech_chips(&self) -> Vec<&str> {
        self.tech
            .split('•')
            .map(str::trim)
            .filter(|chip| !chip.is_empty())
            .collect()
    }
}

/// A highlighted project with a problem/solution write-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeaturedProject {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub problem: String,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub technologies: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A smaller project listed compactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OtherProject {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Headings used inside project cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectLabels {
    pub problem: String,
    pub solution: String,
    pub outcome: String,
    pub highlights: String,
    pub in_progress: String,
    pub live_site: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillsText {
    pub title: String,
    pub domains: Vec<SkillDomain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillDomain {
    pub category: String,
    pub skills: Vec<String>,
}

/// Public code-hosting profile section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FootprintText {
    pub title: String,
    pub description: String,
    pub github_label: String,
    pub profile_url: String,
    pub stats_label: String,
    pub repos_label: String,
    pub followers_label: String,
    pub loading_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificationsText {
    pub title: String,
    pub professional_certificate: ProfessionalCertificate,
    pub view_label: String,
    pub courses_note: String,
    pub show_courses: String,
    pub hide_courses: String,
}

/// A multi-course certificate program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfessionalCertificate {
    pub name: String,
    pub provider: String,
    pub date: String,
    pub link: String,
    pub description: String,
    pub included_courses_label: String,
    pub included_courses: Vec<CertificateEntry>,
}

/// One completed certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificateEntry {
    pub name: String,
    pub provider: String,
    pub date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactText {
    pub title: String,
    pub text: String,
    pub cta: String,
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterText {
    pub rights: String,
    pub built_with: String,
}

/// Microcopy shared by the chrome around the sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommonText {
    pub loading: String,
    pub menu: String,
    pub theme_dark: String,
    pub theme_light: String,
    pub language: String,
    pub keybinds: String,
}
