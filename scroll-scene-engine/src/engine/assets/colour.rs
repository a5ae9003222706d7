use bevy::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `#RRGGBB` / `#RRGGBBAA` colour as written in scene manifests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexColour(pub Color);

impl HexColour {
    pub fn parse(hex: &str) -> Result<Self, String> {
        Srgba::hex(hex)
            .map(|srgba| Self(Color::Srgba(srgba)))
            .map_err(|err| format!("invalid colour `{hex}`: {err}"))
    }

    /// Parse a colour that is known to be valid at compile time.
    pub fn constant(hex: &'static str) -> Self {
        Self::parse(hex).unwrap_or(Self(Color::WHITE))
    }
}

impl Default for HexColour {
    fn default() -> Self {
        Self(Color::WHITE)
    }
}

impl From<HexColour> for Color {
    fn from(colour: HexColour) -> Self {
        colour.0
    }
}

impl<'de> Deserialize<'de> for HexColour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        HexColour::parse(&hex).map_err(serde::de::Error::custom)
    }
}

impl Serialize for HexColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_srgba().to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let gold = HexColour::parse("#F0B14B").expect("valid hex");
        assert_eq!(gold, HexColour::parse("f0b14b").expect("valid hex"));
        let srgba = gold.0.to_srgba();
        assert!((srgba.red - 240.0 / 255.0).abs() < 1e-6);
        assert!((srgba.green - 177.0 / 255.0).abs() < 1e-6);
        assert!((srgba.blue - 75.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert!(HexColour::parse("tomato").is_err());
        assert!(serde_json::from_str::<HexColour>("\"#12\"").is_err());
    }
}
