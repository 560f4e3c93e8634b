//! Analysis report
//!
//! The serializable result of analyzing one token batch.

use crate::error::Result;
use crate::stats::{character_count_tester, token_length, PositionResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Full analysis of one token batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique ID for this analysis
    pub id: String,

    /// When the analysis ran (RFC 3339)
    pub timestamp: String,

    /// Token type that was analyzed (e.g. "session_nonce")
    pub token_type: String,

    /// Number of tokens in the batch
    pub batch_size: usize,

    /// Length of every token, in characters
    pub token_length: usize,

    /// p-value below which a position is reported as low
    pub significance: f64,

    /// One result per character position
    pub positions: Vec<PositionResult>,
}

impl AnalysisReport {
    /// Analyze a batch of tokens
    pub fn analyze<S: AsRef<str>>(
        tokens: &[S],
        token_type: impl Into<String>,
        significance: f64,
    ) -> Result<Self> {
        let token_length = token_length(tokens)?;
        let positions = character_count_tester(tokens)?;

        let report = Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            token_type: token_type.into(),
            batch_size: tokens.len(),
            token_length,
            significance,
            positions,
        };

        info!(
            id = %report.id,
            batch_size = report.batch_size,
            token_length = report.token_length,
            low = report.low_positions().len(),
            "analysis complete"
        );

        Ok(report)
    }

    /// Positions whose p-value falls below the significance level
    pub fn low_positions(&self) -> Vec<&PositionResult> {
        self.positions
            .iter()
            .filter(|p| p.p_value < self.significance)
            .collect()
    }

    /// Smallest p-value across all positions, if any
    pub fn min_p_value(&self) -> Option<f64> {
        self.positions.iter().map(|p| p.p_value).reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_analyze() {
        let report = AnalysisReport::analyze(&["abc", "bca"], "session_nonce", 0.01).unwrap();

        assert_eq!(report.token_type, "session_nonce");
        assert_eq!(report.batch_size, 2);
        assert_eq!(report.token_length, 3);
        assert_eq!(report.positions.len(), 3);
        assert!(report.low_positions().is_empty());
        assert_eq!(report.min_p_value(), Some(1.0));
        assert!(uuid::Uuid::parse_str(&report.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn test_low_positions() {
        // Position 1 is 'a' in 9 of 10 tokens
        let tokens = vec![
            "aa", "ba", "aa", "ba", "aa", "ba", "aa", "ba", "aa", "bb",
        ];
        let report = AnalysisReport::analyze(&tokens, "t", 0.05).unwrap();

        let low = report.low_positions();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].position, 1);
    }

    #[test]
    fn test_analyze_empty() {
        let tokens: Vec<String> = Vec::new();
        let result = AnalysisReport::analyze(&tokens, "t", 0.01);
        assert!(matches!(result, Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = AnalysisReport::analyze(&["ab", "cd", "ab"], "t", 0.01).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let loaded: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.positions.len(), 2);
        for (a, b) in loaded.positions.iter().zip(&report.positions) {
            assert_eq!(a.histogram, b.histogram);
            assert_eq!(a.degrees_of_freedom, b.degrees_of_freedom);
            assert!((a.p_value - b.p_value).abs() < 1e-12);
        }
    }
}
