// ABOUTME: Alert data model for transient toast notifications
// Holds the request shape passed to add_alert and the stored alert record

use chrono::{DateTime, Utc};
use ratatui::text::Text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an alert inside one provider. Keys grow monotonically and are
/// never reused, so two alerts raised in the same millisecond still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertKey(pub(crate) u64);

impl AlertKey {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// Severity of an alert. Plain data: colours and icons are chosen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Default,
    Success,
    Danger,
    Warning,
    Info,
    Custom,
}

impl AlertVariant {
    pub fn indicator(&self) -> &'static str {
        match self {
            AlertVariant::Default => "•",
            AlertVariant::Success => "✓",
            AlertVariant::Danger => "✗",
            AlertVariant::Warning => "⚠",
            AlertVariant::Info => "ℹ",
            AlertVariant::Custom => "◆",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Success => "success",
            AlertVariant::Danger => "danger",
            AlertVariant::Warning => "warning",
            AlertVariant::Info => "info",
            AlertVariant::Custom => "custom",
        }
    }
}

/// Extended alert content shown under the title.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertBody {
    Text(String),
    /// Pre-styled fragment rendered as-is.
    Rich(Text<'static>),
}

impl AlertBody {
    /// Number of terminal lines the body occupies before wrapping.
    pub fn line_count(&self) -> usize {
        match self {
            AlertBody::Text(text) => text.lines().count().max(1),
            AlertBody::Rich(text) => text.lines.len(),
        }
    }
}

impl From<&str> for AlertBody {
    fn from(text: &str) -> Self {
        AlertBody::Text(text.to_string())
    }
}

impl From<String> for AlertBody {
    fn from(text: String) -> Self {
        AlertBody::Text(text)
    }
}

impl From<Text<'static>> for AlertBody {
    fn from(text: Text<'static>) -> Self {
        AlertBody::Rich(text)
    }
}

/// Request to raise an alert. Everything but the title is optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAlert {
    pub title: String,
    pub variant: AlertVariant,
    pub body: Option<AlertBody>,
    pub data_test_id: Option<String>,
    pub skip_auto_close: bool,
}

impl NewAlert {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).variant(AlertVariant::Success)
    }

    pub fn danger(title: impl Into<String>) -> Self {
        Self::new(title).variant(AlertVariant::Danger)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title).variant(AlertVariant::Warning)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).variant(AlertVariant::Info)
    }

    #[must_use]
    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<AlertBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn data_test_id(mut self, id: impl Into<String>) -> Self {
        self.data_test_id = Some(id.into());
        self
    }

    /// Keep the alert on screen until it is closed explicitly.
    #[must_use]
    pub fn skip_auto_close(mut self) -> Self {
        self.skip_auto_close = true;
        self
    }
}

impl From<&str> for NewAlert {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for NewAlert {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

/// An alert in the active list.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub key: AlertKey,
    pub title: String,
    pub variant: AlertVariant,
    pub body: Option<AlertBody>,
    pub data_test_id: Option<String>,
    pub skip_auto_close: bool,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub(crate) fn from_request(key: AlertKey, request: NewAlert) -> Self {
        Self {
            key,
            title: request.title,
            variant: request.variant,
            body: request.body,
            data_test_id: request.data_test_id,
            skip_auto_close: request.skip_auto_close,
            created_at: Utc::now(),
        }
    }

    pub fn auto_closes(&self) -> bool {
        !self.skip_auto_close
    }
}
