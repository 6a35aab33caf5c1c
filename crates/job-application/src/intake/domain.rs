use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role an applicant is applying for. An unset select is modelled as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub const fn label(self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Parse a select value. Anything outside the closed set, including `""`, is unset.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|position| position.label() == raw)
    }

    /// Positions that are asked for their years of relevant experience.
    pub const fn tracks_experience(self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed skill catalog offered as checkboxes. Ordering follows presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
    React,
    #[serde(rename = "Node.js")]
    NodeJs,
}

impl Skill {
    pub const CATALOG: [Skill; 5] = [
        Skill::JavaScript,
        Skill::Css,
        Skill::Python,
        Skill::React,
        Skill::NodeJs,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
            Skill::React => "React",
            Skill::NodeJs => "Node.js",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::CATALOG.into_iter().find(|skill| skill.label() == raw)
    }
}

/// Every input on the form, keyed by the wire name used in requests and error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "position")]
    Position,
    #[serde(rename = "relevantExperience")]
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    #[serde(rename = "managementExperience")]
    ManagementExperience,
    #[serde(rename = "additionalSkills")]
    AdditionalSkills,
    #[serde(rename = "preferredInterviewTime")]
    PreferredInterviewTime,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::Position,
        FormField::RelevantExperience,
        FormField::PortfolioUrl,
        FormField::ManagementExperience,
        FormField::AdditionalSkills,
        FormField::PreferredInterviewTime,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::PhoneNumber => "phoneNumber",
            FormField::Position => "position",
            FormField::RelevantExperience => "relevantExperience",
            FormField::PortfolioUrl => "portfolioURL",
            FormField::ManagementExperience => "managementExperience",
            FormField::AdditionalSkills => "additionalSkills",
            FormField::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Phone Number",
            FormField::Position => "Applying for Position",
            FormField::RelevantExperience => "Relevant Experience (Years)",
            FormField::PortfolioUrl => "Portfolio URL",
            FormField::ManagementExperience => "Management Experience",
            FormField::AdditionalSkills => "Additional Skills",
            FormField::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == raw)
    }

    /// Whether the control is shown for the given position. Conditional fields
    /// keep their values while hidden.
    pub fn is_visible(self, position: Option<Position>) -> bool {
        match self {
            FormField::RelevantExperience => position.is_some_and(Position::tracks_experience),
            FormField::PortfolioUrl => position == Some(Position::Designer),
            FormField::ManagementExperience => position == Some(Position::Manager),
            _ => true,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory record of every value on the form for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(
        default,
        serialize_with = "serialize_position",
        deserialize_with = "deserialize_position"
    )]
    pub position: Option<Position>,
    /// Raw value of the number input; parsed only when validated.
    #[serde(default, deserialize_with = "deserialize_experience")]
    pub relevant_experience: String,
    #[serde(default, rename = "portfolioURL")]
    pub portfolio_url: String,
    #[serde(default)]
    pub management_experience: String,
    #[serde(default)]
    pub additional_skills: BTreeSet<Skill>,
    #[serde(default)]
    pub preferred_interview_time: String,
}

impl ApplicationDraft {
    /// Current value of a text-like field. Skills have no single text value.
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => Some(self.full_name.as_str()),
            FormField::Email => Some(self.email.as_str()),
            FormField::PhoneNumber => Some(self.phone_number.as_str()),
            FormField::Position => Some(self.position.map(Position::label).unwrap_or_default()),
            FormField::RelevantExperience => Some(self.relevant_experience.as_str()),
            FormField::PortfolioUrl => Some(self.portfolio_url.as_str()),
            FormField::ManagementExperience => Some(self.management_experience.as_str()),
            FormField::PreferredInterviewTime => Some(self.preferred_interview_time.as_str()),
            FormField::AdditionalSkills => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::FullName => Some(&mut self.full_name),
            FormField::Email => Some(&mut self.email),
            FormField::PhoneNumber => Some(&mut self.phone_number),
            FormField::RelevantExperience => Some(&mut self.relevant_experience),
            FormField::PortfolioUrl => Some(&mut self.portfolio_url),
            FormField::ManagementExperience => Some(&mut self.management_experience),
            FormField::PreferredInterviewTime => Some(&mut self.preferred_interview_time),
            FormField::Position | FormField::AdditionalSkills => None,
        }
    }

    /// Years of relevant experience when the raw input is a finite number.
    pub fn experience_years(&self) -> Option<f64> {
        self.relevant_experience
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|years| years.is_finite())
    }
}

fn serialize_position<S>(position: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(position.map(Position::label).unwrap_or_default())
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_empty() {
        return Ok(None);
    }
    Position::parse(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown position '{raw}'")))
}

/// JSON clients may send the number input as a number or as its text.
fn deserialize_experience<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawExperience {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawExperience>::deserialize(deserializer)? {
        Some(RawExperience::Text(text)) => text,
        Some(RawExperience::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
