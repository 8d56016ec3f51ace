//! Request types for the catalog HTTP API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spellbook_domain::{DomainError, NewSpell, SpellFilter, SpellLevel, SpellSchool};

/// A request field that could not be converted into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl RequestError {
    fn invalid(field: &'static str, message: impl ToString) -> Self {
        Self::InvalidField {
            field,
            message: message.to_string(),
        }
    }

    fn from_domain(field: &'static str, err: DomainError) -> Self {
        Self::invalid(field, err)
    }
}

/// Query-string form of a [`SpellFilter`].
///
/// Every field arrives as a string the way an HTML form would send it. An
/// absent or empty field leaves that dimension neutral. `classes` is a
/// comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub classes: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub casting_time: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub is_homebrew: Option<String>,
    #[serde(default)]
    pub is_ritual: Option<String>,
    #[serde(default)]
    pub requires_concentration: Option<String>,
}

impl SpellQuery {
    /// Build the filter this form describes.
    pub fn into_filter(self) -> Result<SpellFilter, RequestError> {
        let level = non_empty(self.level)
            .map(|raw| {
                let n: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| RequestError::invalid("level", format!("'{}' is not a number", raw)))?;
                spell_level(n)
            })
            .transpose()?;

        let school = non_empty(self.school)
            .map(|raw| raw.parse::<SpellSchool>())
            .transpose()
            .map_err(|e| RequestError::from_domain("school", e))?;

        let classes: Vec<String> = non_empty(self.classes)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(SpellFilter::cleared()
            .with_search(self.search.unwrap_or_default())
            .with_classes(classes)
            .with_level(level)
            .with_school(school)
            .with_casting_time(non_empty(self.casting_time))
            .with_source(non_empty(self.source))
            .with_homebrew(parse_flag("isHomebrew", self.is_homebrew)?)
            .with_ritual(parse_flag("isRitual", self.is_ritual)?)
            .with_concentration(parse_flag(
                "requiresConcentration",
                self.requires_concentration,
            )?))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn spell_level(n: i64) -> Result<SpellLevel, RequestError> {
    let n = u8::try_from(n).map_err(|_| {
        RequestError::invalid("level", format!("{} is outside 0-{}", n, SpellLevel::MAX))
    })?;
    SpellLevel::new(n).map_err(|e| RequestError::from_domain("level", e))
}

fn parse_flag(field: &'static str, value: Option<String>) -> Result<Option<bool>, RequestError> {
    match non_empty(value).as_deref() {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(RequestError::invalid(
            field,
            format!("expected 'true' or 'false', got '{}'", other),
        )),
    }
}

/// Body of `POST /api/spells`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpellRequest {
    pub name: String,
    /// Checked against the 0-9 range in [`CreateSpellRequest::into_new_spell`].
    pub level: i64,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    #[serde(default)]
    pub components: Vec<String>,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub is_ritual: bool,
    #[serde(default)]
    pub requires_concentration: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateSpellRequest {
    pub fn into_new_spell(self) -> Result<NewSpell, RequestError> {
        let level = spell_level(self.level)?;
        let school = self
            .school
            .parse::<SpellSchool>()
            .map_err(|e| RequestError::from_domain("school", e))?;
        if self.name.trim().is_empty() {
            return Err(RequestError::invalid("name", "cannot be empty"));
        }

        Ok(NewSpell {
            name: self.name,
            level,
            school,
            casting_time: self.casting_time,
            range: self.range,
            components: self.components,
            duration: self.duration,
            description: self.description,
            classes: self.classes,
            is_ritual: self.is_ritual,
            requires_concentration: self.requires_concentration,
            image_url: self.image_url,
        })
    }
}
