//! Per-application branding.
//!
//! The two binaries are the same shell with different skins: everything that
//! differs between Personal Finance and PrepPal lives in one `Branding` value
//! built here and passed explicitly through the view layer.

use crate::app::theme::colors;
use crate::app::theme::Palette;
use crate::app::types::FeatureKind;

/// Everything that distinguishes one application from the other.
#[derive(Debug, Clone, Copy)]
pub struct Branding {
    /// Display name shown in titles and headers
    pub app_name: &'static str,
    /// Native window title
    pub window_title: &'static str,
    /// Subdirectory of the OS data directory holding this app's files
    pub data_dir_name: &'static str,
    /// Feature screens listed on the main menu, in order
    pub features: &'static [FeatureKind],
    /// Color scheme
    pub palette: Palette,
}

/// Branding for the Personal Finance application.
pub fn personal_finance() -> Branding {
    Branding {
        app_name: "Personal Finance",
        window_title: "Personal Finance",
        data_dir_name: "PersonalFinance",
        features: &[
            FeatureKind::TransactionRecord,
            FeatureKind::InterestCalculator,
            FeatureKind::BudgetReport,
            FeatureKind::DownloadPdf,
        ],
        palette: colors::PERSONAL_FINANCE,
    }
}

/// Branding for the PrepPal application.
pub fn preppal() -> Branding {
    Branding {
        app_name: "PrepPal",
        window_title: "PrepPal",
        data_dir_name: "PrepPal",
        features: &[
            FeatureKind::NoteSummarizer,
            FeatureKind::DoubtClarification,
            FeatureKind::PracticeQuestions,
        ],
        palette: colors::PREPPAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apps_use_separate_data_dirs() {
        assert_ne!(
            personal_finance().data_dir_name,
            preppal().data_dir_name
        );
    }

    #[test]
    fn test_feature_lists_do_not_overlap() {
        let finance = personal_finance();
        let prep = preppal();
        for kind in finance.features {
            assert!(!prep.features.contains(kind));
        }
    }
}
