use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Work-list view of a judgement. `verified` is derived: true when any
/// reviewer has a verification record with is_verified on this judgement.
#[derive(Debug, Clone)]
pub struct JudgementSummary {
    pub id: Uuid,
    pub filename: String,
    pub year: String,
    pub trial: String,
    pub appeal: Option<String>,
    pub corrigendum: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Full judgement as the edit screen needs it: the source document (plus
/// appeal/corrigendum variants when the case has them) and the
/// machine-extracted feature payload the reviewer corrects against it.
#[derive(Debug, Clone)]
pub struct JudgementDetail {
    pub id: Uuid,
    pub filename: String,
    pub year: String,
    pub trial: String,
    pub appeal: Option<String>,
    pub corrigendum: Option<String>,
    pub html: String,
    pub appeal_html: Option<String>,
    pub corrigendum_html: Option<String>,
    pub extracted_features: Option<JsonValue>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reviewer's saved (and possibly verified) feature payload for one
/// judgement. At most one per (judgement, reviewer).
#[derive(Debug, Clone)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub source_judgement_id: Uuid,
    pub verified_by: Uuid,
    pub is_verified: bool,
    pub features: JsonValue,
    pub updated_at: DateTime<Utc>,
}
