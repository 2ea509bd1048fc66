use serde::{Deserialize, Serialize};

/// Classification attached to a single range reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorTag {
    Boundary,
    End,
    None,
}

impl SensorTag {
    /// Decodes the tag column of a scan line. Unknown tags are `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "boundary" => SensorTag::Boundary,
            "end" => SensorTag::End,
            _ => SensorTag::None,
        }
    }

    #[must_use]
    pub fn is_classified(self) -> bool {
        !matches!(self, SensorTag::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_decoding() {
        assert_eq!(SensorTag::from_token("boundary"), SensorTag::Boundary);
        assert_eq!(SensorTag::from_token("end"), SensorTag::End);
        assert_eq!(SensorTag::from_token("none"), SensorTag::None);
        assert_eq!(SensorTag::from_token("Boundary"), SensorTag::None);
        assert!(!SensorTag::from_token("").is_classified());
    }
}
