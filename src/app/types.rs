/**
 * Shared Types Module
 *
 * Defines shared types for the app shell: the view state machine and the
 * feature screen catalog shared by both applications.
 */

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/signup screen
    Auth,
    /// Main menu with one button per feature screen
    Home,
    /// A feature screen
    Feature(FeatureKind),
}

/// The feature screens reachable from the main menu.
///
/// Personal Finance shows the first four, PrepPal the last three. The screen
/// bodies are placeholders; each feature is an external collaborator that
/// populates the view it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    TransactionRecord,
    InterestCalculator,
    BudgetReport,
    DownloadPdf,
    NoteSummarizer,
    DoubtClarification,
    PracticeQuestions,
}

impl FeatureKind {
    /// Button and screen title.
    pub fn title(&self) -> &'static str {
        match self {
            FeatureKind::TransactionRecord => "Transaction Record",
            FeatureKind::InterestCalculator => "Interest Calculator",
            FeatureKind::BudgetReport => "Budget Report",
            FeatureKind::DownloadPdf => "Download PDF",
            FeatureKind::NoteSummarizer => "Note Summarizer",
            FeatureKind::DoubtClarification => "Doubt Clarification",
            FeatureKind::PracticeQuestions => "Practice Questions",
        }
    }

    /// One-line description shown on the placeholder screen.
    pub fn blurb(&self) -> &'static str {
        match self {
            FeatureKind::TransactionRecord => "Track income and expenses over time.",
            FeatureKind::InterestCalculator => "Compute simple and compound interest.",
            FeatureKind::BudgetReport => "Summarize spending against your budget.",
            FeatureKind::DownloadPdf => "Export your records as a PDF document.",
            FeatureKind::NoteSummarizer => "Condense uploaded notes into key points.",
            FeatureKind::DoubtClarification => "Ask questions about your study material.",
            FeatureKind::PracticeQuestions => "Generate practice questions from notes.",
        }
    }
}

/// Information about the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_view_variants() {
        assert_eq!(AppView::Auth, AppView::Auth);
        assert_ne!(AppView::Auth, AppView::Home);
        assert_eq!(
            AppView::Feature(FeatureKind::BudgetReport),
            AppView::Feature(FeatureKind::BudgetReport)
        );
        assert_ne!(
            AppView::Feature(FeatureKind::BudgetReport),
            AppView::Feature(FeatureKind::DownloadPdf)
        );
    }

    #[test]
    fn test_feature_titles_are_distinct() {
        let all = [
            FeatureKind::TransactionRecord,
            FeatureKind::InterestCalculator,
            FeatureKind::BudgetReport,
            FeatureKind::DownloadPdf,
            FeatureKind::NoteSummarizer,
            FeatureKind::DoubtClarification,
            FeatureKind::PracticeQuestions,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.title().is_empty());
            assert!(!a.blurb().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn test_user_info_serialization() {
        let user = UserInfo {
            username: "testuser".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: UserInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(user.username, deserialized.username);
    }
}
