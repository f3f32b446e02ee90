use regex::Regex;
use serde::{Deserialize, Serialize};

// Format patterns for organisation fields. The phone, website and social
// patterns all accept the empty string so optional fields may be left blank.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(.+)$";
const PHONE_PATTERN: &str = r"^[+]*[(]?[0-9]{1,4}[)]?[-\s\./0-9]*$|^$";
const WEBSITE_PATTERN: &str = r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})[/\w .-]*/?|^$";
const FACEBOOK_PATTERN: &str = r"^(https?://)?(www\.)?facebook\.com/.*|^$";
const TWITTER_PATTERN: &str = r"^(https?://)?(www\.)?twitter\.com/.*|^$";
const INSTAGRAM_PATTERN: &str = r"^(https?://)?(www\.)?instagram\.com/.*|^$";

/// Static organisation information served read-only on the organisation
/// endpoint. Loaded from a JSON file once at startup and validated there; an
/// invalid file prevents the process from serving traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganisationInfo {
    pub name: String,
    pub address: Address,
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OrganisationConfigError {
    #[error("Failed to read organisation config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse organisation config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid organisation config: {0}")]
    Validation(String),
}

impl OrganisationInfo {
    /// Load and validate organisation info from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, OrganisationConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| OrganisationConfigError::Read {
                path: path.to_string(),
                source,
            })?;

        let info: OrganisationInfo =
            serde_json::from_str(&contents).map_err(|source| OrganisationConfigError::Parse {
                path: path.to_string(),
                source,
            })?;

        info.validate().map_err(OrganisationConfigError::Validation)?;
        Ok(info)
    }

    /// Check all format constraints, returning the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Organisation name is required".to_string());
        }

        if self.address.street.trim().is_empty() {
            return Err("Street address is required".to_string());
        }
        if self.address.city.trim().is_empty() {
            return Err("City is required".to_string());
        }
        if self.address.state.trim().is_empty() {
            return Err("State is required".to_string());
        }
        if self.address.zip.trim().is_empty() {
            return Err("ZIP code is required".to_string());
        }

        if self.contact.name.trim().is_empty() {
            return Err("Contact name is required".to_string());
        }
        if self.contact.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if !matches_pattern(EMAIL_PATTERN, &self.contact.email) {
            return Err("Invalid email format".to_string());
        }

        if let Some(phone) = &self.phone {
            if !matches_pattern(PHONE_PATTERN, phone) {
                return Err("Invalid phone number format".to_string());
            }
        }
        if let Some(website) = &self.website {
            if !matches_pattern(WEBSITE_PATTERN, website) {
                return Err("Invalid website URL format".to_string());
            }
        }

        if let Some(social) = &self.social {
            if let Some(facebook) = &social.facebook {
                if !matches_pattern(FACEBOOK_PATTERN, facebook) {
                    return Err("Invalid Facebook URL".to_string());
                }
            }
            if let Some(twitter) = &social.twitter {
                if !matches_pattern(TWITTER_PATTERN, twitter) {
                    return Err("Invalid Twitter URL".to_string());
                }
            }
            if let Some(instagram) = &social.instagram {
                if !matches_pattern(INSTAGRAM_PATTERN, instagram) {
                    return Err("Invalid Instagram URL".to_string());
                }
            }
        }

        Ok(())
    }
}

// The whole value must match, not just a prefix or substring
fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(&format!("^(?:{pattern})$"))
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}
