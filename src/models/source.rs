#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSource {
    #[default]
    Official, // pre-seeded by the organisers
    User, // submitted through `flinta add`
}

impl EventSource {
    /// Convert enum → CSV string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSource::Official => "official",
            EventSource::User => "user",
        }
    }

    /// Convert CSV string → enum.
    /// A blank value means the row predates the `source` column.
    pub fn from_csv_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "official" => Some(EventSource::Official),
            "user" => Some(EventSource::User),
            _ => None,
        }
    }

    /// Badge text shown on every carousel slide.
    pub fn badge(&self) -> &'static str {
        match self {
            EventSource::Official => "Official Event",
            EventSource::User => "User-Submitted Event",
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventSource {
    type Err = crate::errors::AppError;

    /// Strict parse used by CLI filters: blank is not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "official" => Ok(EventSource::Official),
            "user" => Ok(EventSource::User),
            other => Err(crate::errors::AppError::InvalidSource(other.to_string())),
        }
    }
}
