//! A single candidate diagnosis as returned by the diagnostic API.

use serde::{Deserialize, Deserializer, Serialize};

use super::presence::truthy;

/// One ranked candidate from the diagnostic API.
///
/// Read-only input to the likelihood engine. Only `match_score`,
/// `sensitivity`, `specificity`, `matched_presentations`, and
/// `clinical_pearls` feed the computation; the remaining fields are carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Display name of the diagnosis.
    #[serde(default)]
    pub label: String,
    /// Raw rule-engine match score, 0-10 typical but not enforced.
    pub match_score: f64,
    /// True-positive rate of the matched finding pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f64>,
    /// True-negative rate of the matched finding pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<f64>,
    /// Findings that contributed to the match, in API order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matched_presentations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub clinical_pearls: Vec<String>,
    /// Specialty tag. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub all_presentations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub icd10: Vec<String>,
    /// SNOMED codes arrive as either integers or strings.
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub snomed: Vec<serde_json::Value>,
}

impl DiagnosticResult {
    /// Create a result with only a label and match score.
    pub fn new(label: impl Into<String>, match_score: f64) -> Self {
        Self {
            label: label.into(),
            match_score,
            sensitivity: None,
            specificity: None,
            matched_presentations: Vec::new(),
            clinical_pearls: Vec::new(),
            family: None,
            rule_id: None,
            all_presentations: Vec::new(),
            icd10: Vec::new(),
            snomed: Vec::new(),
        }
    }

    /// Attach sensitivity and specificity.
    pub fn with_test_characteristics(mut self, sensitivity: f64, specificity: f64) -> Self {
        self.sensitivity = Some(sensitivity);
        self.specificity = Some(specificity);
        self
    }

    pub fn with_presentations<I, S>(mut self, presentations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched_presentations = presentations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pearls<I, S>(mut self, pearls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clinical_pearls = pearls.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Sensitivity and specificity, but only when both are truthy.
    ///
    /// A value of exactly `0` counts as missing. See [`truthy`].
    pub fn test_characteristics(&self) -> Option<(f64, f64)> {
        Some((truthy(self.sensitivity)?, truthy(self.specificity)?))
    }
}

/// Accept `null` wherever a list is expected.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
