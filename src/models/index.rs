use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexSign {
    #[serde(rename = "+")]
    Gain,
    #[default]
    #[serde(rename = "-")]
    Loss,
}

/// Cook index: signed percentage of weight lost (`-`) or gained (`+`) while cooking.
///
/// Magnitude is a whole percentage in `0..=999`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CookIndex {
    #[serde(default)]
    pub sign: IndexSign,
    #[serde(default)]
    pub magnitude: u16,
}

impl CookIndex {
    pub fn loss(magnitude: u16) -> Self {
        Self {
            sign: IndexSign::Loss,
            magnitude,
        }
    }

    pub fn gain(magnitude: u16) -> Self {
        Self {
            sign: IndexSign::Gain,
            magnitude,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.magnitude == 0
    }
}

impl std::fmt::Display for CookIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = match self.sign {
            IndexSign::Gain => '+',
            IndexSign::Loss => '-',
        };
        write!(f, "{}{}%", sign, self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_serde() {
        let index: CookIndex = serde_json::from_str(r#"{"sign": "+", "magnitude": 20}"#).unwrap();
        assert_eq!(index, CookIndex::gain(20));
        assert_eq!(index.to_string(), "+20%");
    }

    #[test]
    fn test_default_is_neutral() {
        let index: CookIndex = serde_json::from_str("{}").unwrap();
        assert!(index.is_neutral());
    }
}
