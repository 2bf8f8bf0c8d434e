/// Tunables for a single search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop after this many expansions. `None` runs until the walk
    /// terminates on its own, which it always does within `rows * cols`
    /// expansions.
    pub max_iterations: Option<usize>,
}

impl SearchConfig {
    /// A config bounded to `n` expansions.
    pub fn bounded(n: usize) -> Self {
        Self {
            max_iterations: Some(n),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_iterations":3}"#).unwrap();
        assert_eq!(cfg, SearchConfig::bounded(3));
    }
}
