//! Profile API request and response types.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use starmate_model::{InterestsInput, ProfileInput, ProfileRecord, Zodiac};
use starmate_transform::normalization::parse_birthday;
use starmate_transform::zodiac::calculate_age;

/// Horoscope value some API responses use for "no value".
const HOROSCOPE_SENTINEL: &str = "Error";

/// Body of `POST /api/login`. The API expects the email in both fields.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// A `message` field that is either one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    List(Vec<String>),
}

impl MessageBody {
    /// Flatten to one display string; `None` when blank.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            MessageBody::Text(text) => text.trim().to_string(),
            MessageBody::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Generic response carrying only a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<MessageBody>,
}

impl ApiMessage {
    pub fn text(&self) -> Option<String> {
        self.message.as_ref().and_then(MessageBody::text)
    }
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<MessageBody>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<RemoteProfile>,
}

/// Response of `GET /api/getProfile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub message: Option<MessageBody>,
    #[serde(default)]
    pub data: Option<RemoteProfile>,
}

/// A profile as stored by the API. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horoscope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    #[serde(
        deserialize_with = "lenient_measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
    #[serde(
        deserialize_with = "lenient_measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
}

/// A stored measurement in whichever JSON shape the API returned it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Whole(u32),
    Fractional(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawMeasurement {
    fn whole(self) -> Option<u32> {
        match self {
            RawMeasurement::Whole(value) => Some(value),
            RawMeasurement::Fractional(value) => rounded(value),
            RawMeasurement::Text(text) => {
                let text = text.trim();
                text.parse()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(rounded))
            }
            RawMeasurement::Other(_) => None,
        }
    }
}

fn rounded(value: f64) -> Option<u32> {
    let value = value.round();
    (value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value)).then(|| value as u32)
}

/// Unreadable or negative measurements become `None` instead of failing the profile.
fn lenient_measurement<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawMeasurement>::deserialize(deserializer)?.and_then(RawMeasurement::whole))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RemoteProfile {
    /// Horoscope, treating blank values and the "Error" sentinel as absent.
    pub fn horoscope(&self) -> Option<&str> {
        self.horoscope
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != HOROSCOPE_SENTINEL)
    }

    /// Zodiac sign when the stored value names one of the twelve signs.
    pub fn zodiac(&self) -> Option<Zodiac> {
        self.zodiac.as_deref().and_then(|value| value.parse().ok())
    }

    /// Birthday when stored in "DD MM YYYY" form.
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        self.birthday
            .as_deref()
            .and_then(|value| parse_birthday(value).date())
    }

    /// Age on `today`, recomputed from the stored birthday.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birthday_date()
            .map(|birthday| calculate_age(birthday, today))
    }

    /// Prefill values for the profile form.
    pub fn to_input(&self) -> ProfileInput {
        ProfileInput {
            name: self.name.clone().unwrap_or_default(),
            birthday: self.birthday.clone().unwrap_or_default(),
            height: self.height.map(|h| h.to_string()).unwrap_or_default(),
            weight: self.weight.map(|w| w.to_string()).unwrap_or_default(),
            interests: InterestsInput::List(self.interests.clone()),
            gender: self.gender.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /api/createProfile` and `PUT /api/updateProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horoscope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl ProfilePayload {
    /// Payload of the interests screen, which only saves tags.
    pub fn interests_only(tags: Vec<String>) -> Self {
        Self {
            interests: Some(tags),
            ..Self::default()
        }
    }
}

impl From<&ProfileRecord> for ProfilePayload {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            birthday: Some(record.birthday_text()),
            height: Some(record.height),
            weight: Some(record.weight),
            gender: Some(record.gender.as_str().to_string()),
            zodiac: Some(record.zodiac.as_str().to_string()),
            horoscope: Some(record.horoscope.clone()),
            interests: Some(record.interests.clone()),
        }
    }
}
