use thiserror::Error;

/// Failures surfaced by the shot-planning pipeline.
///
/// All variants are local and synchronous: nothing is retried and no partial
/// state is left behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShotError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown {kind} '{id}'")]
    UnknownProfile { kind: &'static str, id: String },

    #[error("invalid course: {0}")]
    InvalidCourse(String),
}

impl ShotError {
    /// Stable snake_case tag used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate { .. } => "invalid_coordinate",
            Self::InvalidInput(_) => "invalid_input",
            Self::UnknownProfile { .. } => "unknown_profile",
            Self::InvalidCourse(_) => "invalid_course",
        }
    }

    /// Turn a request-decoding failure back into a typed error. The catalog
    /// `Deserialize` impls render misses as `unknown <kind> '<id>'`; those keep
    /// their `UnknownProfile` kind, anything else is `InvalidInput`.
    pub fn from_decode_message(message: &str) -> Self {
        for kind in ["club", "shape", "trajectory"] {
            let prefix = format!("unknown {kind} '");
            if let Some(start) = message.find(&prefix) {
                let rest = &message[start + prefix.len()..];
                if let Some(end) = rest.rfind('\'') {
                    return Self::unknown(kind, &rest[..end]);
                }
            }
        }
        Self::InvalidInput(message.to_string())
    }

    pub(crate) fn unknown(kind: &'static str, id: &str) -> Self {
        Self::UnknownProfile {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_messages_recover_catalog_misses() {
        let err = ShotError::from_decode_message("club: unknown club 'PT' at line 1 column 90");
        assert_eq!(err, ShotError::unknown("club", "PT"));

        let err = ShotError::from_decode_message("unknown trajectory 'moonshot'");
        assert_eq!(err.kind(), "unknown_profile");

        // Serde's own variant errors are not catalog lookups.
        let err = ShotError::from_decode_message("unknown variant `teleport`, expected `set_club`");
        assert_eq!(err.kind(), "invalid_input");
    }
}
