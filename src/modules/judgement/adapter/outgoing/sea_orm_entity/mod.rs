pub mod judgements;
pub mod verified_features;
