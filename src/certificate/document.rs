//! Certificate document model
//!
//! Pure data derived from a user snapshot, a milestone and the issue date.
//! Knows nothing about how it will be drawn.

use chrono::{Datelike, NaiveDate};

use crate::domain::UserSnapshot;
use crate::milestones::{Milestone, Requirement, RequirementKind};

pub const CERTIFICATE_ID_PREFIX: &str = "CERT";
pub const CERTIFICATE_ID_DELIMITER: char = '-';

/// Number of leading user id characters used in certificate ids
const USER_ID_CHARS: usize = 5;

/// Fully resolved certificate text. Rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    pub recipient_name: String,
    pub reason_text: String,
    pub milestone_name: String,
    pub milestone_value_label: String,
    /// Long-form date, e.g. "October 18, 2026"
    pub issue_date: String,
    pub certificate_id: String,
}

pub struct CertificateDocumentBuilder;

impl CertificateDocumentBuilder {
    /// Build the document for `milestone` as issued on `today`.
    ///
    /// Total over valid inputs. The only volatile input is the calendar year
    /// of `today`, which is part of the certificate id.
    pub fn build(user: &UserSnapshot, milestone: &Milestone, today: NaiveDate) -> CertificateDocument {
        CertificateDocument {
            recipient_name: user.username.clone(),
            reason_text: reason_text(milestone.requirement.kind()).to_string(),
            milestone_name: milestone.name.clone(),
            milestone_value_label: value_label(milestone.requirement),
            issue_date: today.format("%B %-d, %Y").to_string(),
            certificate_id: certificate_id(&user.id, &milestone.id, today.year()),
        }
    }
}

pub fn reason_text(kind: RequirementKind) -> &'static str {
    match kind {
        RequirementKind::Level => {
            "For outstanding performance and dedication in reaching the rank of"
        }
        RequirementKind::Speed => "For demonstrating exceptional typing proficiency by achieving",
        RequirementKind::Consistency => "For consistent practice and dedication by completing",
    }
}

pub fn value_label(requirement: Requirement) -> String {
    match requirement {
        Requirement::ByLevel(n) => format!("Level {n}"),
        Requirement::ByBestWpm(n) => format!("{n} WPM"),
        Requirement::ByTestCount(n) => format!("{n} Tests"),
    }
}

/// `CERT-<first 5 of user id>-<MILESTONE ID>-<year>`, upper-cased
pub fn certificate_id(user_id: &str, milestone_id: &str, year: i32) -> String {
    let user_part: String = user_id.chars().take(USER_ID_CHARS).collect();
    let d = CERTIFICATE_ID_DELIMITER;
    format!(
        "{CERTIFICATE_ID_PREFIX}{d}{}{d}{}{d}{year:04}",
        user_part.to_uppercase(),
        milestone_id.to_uppercase()
    )
}
