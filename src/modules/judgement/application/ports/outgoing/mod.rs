pub mod judgement_query;
pub mod judgement_repository;
pub mod verification_repository;

pub use judgement_query::{JudgementPage, JudgementQuery, JudgementQueryError};
pub use judgement_repository::{JudgementRepository, JudgementRepositoryError};
pub use verification_repository::{
    SaveVerificationData, VerificationRepository, VerificationRepositoryError,
};
