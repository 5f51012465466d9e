//! TfL StopPoint response types.

use serde::Deserialize;

use crate::domain::StopPoint;

/// Envelope for `GET /StopPoint?lat=..&lon=..`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    #[serde(default)]
    pub stop_points: Option<Vec<StopPointDto>>,
}

/// Minimal DTO for a stop - we only need the NaPTAN id and name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub naptan_id: String,
    pub common_name: String,
}

impl From<StopPointDto> for StopPoint {
    fn from(dto: StopPointDto) -> Self {
        StopPoint::new(dto.naptan_id, dto.common_name)
    }
}
