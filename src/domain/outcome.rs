/// Result of carrying out a move, reported for observability only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationOutcome {
    pub success: bool,
    pub moved_from: String,
    pub moved_to: String,
    pub error_detail: Option<String>,
}

impl RelocationOutcome {
    pub fn moved(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { success: true, moved_from: from.into(), moved_to: to.into(), error_detail: None }
    }

    pub fn failed(from: impl Into<String>, to: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            moved_from: from.into(),
            moved_to: to.into(),
            error_detail: Some(detail.into()),
        }
    }
}
