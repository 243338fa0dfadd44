use reqwest::StatusCode;

/// The three ways a conditional GET can end.
///
/// Only an exact `200 OK` counts as new content; other 2xx codes such as
/// `206 Partial Content` fall into [`ResponseStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    NotModified,
    Success,
    Other(StatusCode),
}

impl From<StatusCode> for ResponseStatus {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_MODIFIED => Self::NotModified,
            StatusCode::OK => Self::Success,
            other => Self::Other(other),
        }
    }
}
