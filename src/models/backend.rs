//! Reachability of the backend API.

use glowboard_core::FetchError;

/// Result of the last backend interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No request has settled yet.
    #[default]
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable { Self::Online } else { Self::Offline }
    }

    /// Status implied by a finished request. Any HTTP answer, even an
    /// error status, proves the backend is up.
    pub fn from_outcome<T>(result: &Result<T, FetchError>) -> Self {
        Self::from_reachable(!matches!(
            result,
            Err(FetchError::Network(_) | FetchError::Timeout | FetchError::NoWindow)
        ))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking backend...",
            Self::Online => "Backend connected",
            Self::Offline => "Backend offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reachable() {
        assert_eq!(BackendStatus::from_reachable(true), BackendStatus::Online);
        assert_eq!(BackendStatus::from_reachable(false), BackendStatus::Offline);
        assert_eq!(BackendStatus::default(), BackendStatus::Checking);
    }

    #[test]
    fn test_health_check_answered_with_error_status_is_online() {
        // The root endpoint may 404 on a healthy server.
        let answered: Result<(), FetchError> = Err(FetchError::Http {
            status: 404,
            status_text: "Not Found".into(),
        });
        assert_eq!(BackendStatus::from_outcome(&answered), BackendStatus::Online);
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(BackendStatus::from_outcome(&Ok::<_, FetchError>(())), BackendStatus::Online);
        assert_eq!(
            BackendStatus::from_outcome::<()>(&Err(FetchError::Http {
                status: 500,
                status_text: "Internal Server Error".into(),
            })),
            BackendStatus::Online
        );
        assert_eq!(
            BackendStatus::from_outcome::<()>(&Err(FetchError::Json("eof".into()))),
            BackendStatus::Online
        );
        assert_eq!(
            BackendStatus::from_outcome::<()>(&Err(FetchError::Timeout)),
            BackendStatus::Offline
        );
        assert_eq!(
            BackendStatus::from_outcome::<()>(&Err(FetchError::Network("offline".into()))),
            BackendStatus::Offline
        );
    }
}
