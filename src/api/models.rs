use serde::Serialize;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}
