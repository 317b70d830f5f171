use serde::Serialize;
use ts_rs::TS;

use crate::models::catalog::entities::{Grade, Subject, Track};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct TrackListResponse {
    pub items: Vec<Track>,
}
