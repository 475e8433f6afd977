use std::fmt;

use serde::Serialize;

/// Loan-advisory sub-topic a user message appears to address.
///
/// Assigned by keyword matching on the user's message, never derived from
/// the model's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    IntentClassifier,
    LoanEligibility,
    LoanApplication,
    FinancialLiteracy,
}

impl AgentType {
    /// Classifies a user message by scanning its lowercase folding for fixed
    /// trigger substrings. The branches are evaluated in a fixed order and the
    /// first match wins: "eligibility" outranks "application"/"apply" even
    /// when both are present.
    pub fn classify(message: &str) -> Self {
        let folded = message.to_lowercase();
        if folded.contains("eligibility") {
            AgentType::LoanEligibility
        } else if folded.contains("application") || folded.contains("apply") {
            AgentType::LoanApplication
        } else if folded.contains("improve") || folded.contains("credit score") {
            AgentType::FinancialLiteracy
        } else {
            AgentType::IntentClassifier
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::IntentClassifier => "intent_classifier",
            AgentType::LoanEligibility => "loan_eligibility",
            AgentType::LoanApplication => "loan_application",
            AgentType::FinancialLiteracy => "financial_literacy",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
