use qiq_common::{Certification, CertificationStatus};
use serde::Serialize;

/// Colour band of the compliance ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceHealth {
    Good,
    Warning,
    Critical,
}

impl ComplianceHealth {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 75 {
            Self::Good
        } else if percentage >= 50 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub compliant: usize,
    pub at_risk: usize,
    pub non_compliant: usize,
    pub total: usize,
}

impl ComplianceSummary {
    pub fn from_certifications<'a, I>(certifications: I) -> Self
    where
        I: IntoIterator<Item = &'a Certification>,
    {
        let mut summary = Self::default();
        for cert in certifications {
            summary.total += 1;
            match cert.status {
                CertificationStatus::Compliant => summary.compliant += 1,
                CertificationStatus::AtRisk => summary.at_risk += 1,
                CertificationStatus::NonCompliant => summary.non_compliant += 1,
            }
        }
        summary
    }

    /// Share of compliant certifications, rounded to a whole percent. 0 when empty.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.compliant as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn health(&self) -> ComplianceHealth {
        ComplianceHealth::from_percentage(self.percentage())
    }
}
