//! Audit ratio view: two bars scaled against the larger of the up/down totals.

use api::AuditInfo;

use crate::format::{format_ratio, format_size};

pub const UP_LEADING_COLOR: &str = "#28a745";
pub const UP_TRAILING_COLOR: &str = "#dc3545";
pub const DOWN_LEADING_COLOR: &str = "#17a2b8";
pub const DOWN_TRAILING_COLOR: &str = "#ffc107";

/// Scale `(up, down)` to percentages of the larger one. Both zero gives `(0, 0)`.
pub fn scale_pair(up: u64, down: u64) -> (f64, f64) {
    let max = up.max(down);
    if max == 0 {
        return (0.0, 0.0);
    }
    let max = max as f64;
    (up as f64 / max * 100.0, down as f64 / max * 100.0)
}

/// One progress bar: fill percentage, fill color and the caption under it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub percent: f64,
    pub color: &'static str,
    pub label: String,
}

/// Everything the audit card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditView {
    /// Ratio with one decimal.
    pub ratio: String,
    /// Audits done (bytes given).
    pub up: BarView,
    /// Audits received (bytes received).
    pub down: BarView,
}

impl From<&AuditInfo> for AuditView {
    fn from(audit: &AuditInfo) -> Self {
        let (up_percent, down_percent) = scale_pair(audit.total_up, audit.total_down);

        let up_color = if audit.total_up >= audit.total_down {
            UP_LEADING_COLOR
        } else {
            UP_TRAILING_COLOR
        };
        let down_color = if audit.total_down >= audit.total_up {
            DOWN_LEADING_COLOR
        } else {
            DOWN_TRAILING_COLOR
        };

        Self {
            ratio: format_ratio(audit.audit_ratio),
            up: BarView {
                percent: up_percent,
                color: up_color,
                label: format_size(audit.total_up),
            },
            down: BarView {
                percent: down_percent,
                color: down_color,
                label: format_size(audit.total_down),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit(ratio: Option<f64>, up: u64, down: u64) -> AuditInfo {
        AuditInfo {
            audit_ratio: ratio,
            total_up: up,
            total_down: down,
        }
    }

    #[test]
    fn test_scale_pair() {
        assert_eq!(scale_pair(80, 20), (100.0, 25.0));
        assert_eq!(scale_pair(20, 80), (25.0, 100.0));
        assert_eq!(scale_pair(7, 7), (100.0, 100.0));
        assert_eq!(scale_pair(0, 5), (0.0, 100.0));
    }

    #[test]
    fn test_scale_pair_both_zero() {
        let (up, down) = scale_pair(0, 0);
        assert_eq!((up, down), (0.0, 0.0));
        assert!(!up.is_nan() && !down.is_nan());
    }

    #[test]
    fn test_view_when_up_leads() {
        let view = AuditView::from(&audit(Some(4.0), 2_500_000, 1500));
        assert_eq!(view.ratio, "4.0");
        assert_eq!(view.up.color, UP_LEADING_COLOR);
        assert_eq!(view.down.color, DOWN_TRAILING_COLOR);
        assert_eq!(view.up.label, "2.50 MB");
        assert_eq!(view.down.label, "2 kB");
        assert_eq!(view.up.percent, 100.0);
        assert!((view.down.percent - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_view_when_down_leads() {
        let view = AuditView::from(&audit(Some(0.25), 20, 80));
        assert_eq!(view.up.color, UP_TRAILING_COLOR);
        assert_eq!(view.down.color, DOWN_LEADING_COLOR);
        assert_eq!(view.up.percent, 25.0);
        assert_eq!(view.up.label, "20 bytes");
    }

    #[test]
    fn test_view_tie_uses_leading_colors() {
        let view = AuditView::from(&audit(None, 0, 0));
        assert_eq!(view.ratio, "0.0");
        assert_eq!(view.up.color, UP_LEADING_COLOR);
        assert_eq!(view.down.color, DOWN_LEADING_COLOR);
        assert_eq!(view.up.percent, 0.0);
    }
}
