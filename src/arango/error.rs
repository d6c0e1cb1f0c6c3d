use thiserror::Error;

/// Errors from the document database, classified by how callers should
/// react to them rather than by raw status code.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("conflict: {message} (error {code})")]
    Conflict { code: i64, message: String },

    #[error("not found: {message} (error {code})")]
    NotFound { code: i64, message: String },

    #[error("forbidden: {message} (error {code})")]
    Forbidden { code: i64, message: String },

    #[error("server error {status}: {message} (error {code})")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("connection failed: {0}")]
    Connectivity(#[from] reqwest::Error),
}

impl DbError {
    pub fn from_response(status: u16, code: i64, message: String) -> Self {
        match status {
            409 => DbError::Conflict { code, message },
            404 => DbError::NotFound { code, message },
            401 | 403 => DbError::Forbidden { code, message },
            _ => DbError::Api {
                status,
                code,
                message,
            },
        }
    }

    /// Creation conflicts ("already exists", duplicate key) are the one
    /// kind the bootstrap paths deliberately swallow.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_classification() {
        let err = DbError::from_response(409, 1207, "duplicate name".to_string());
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        let err = DbError::from_response(404, 1202, "document not found".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_forbidden_classification() {
        for status in [401, 403] {
            let err = DbError::from_response(status, 11, "insufficient rights".to_string());
            assert!(matches!(err, DbError::Forbidden { .. }));
        }
    }

    #[test]
    fn test_other_statuses_map_to_api() {
        let err = DbError::from_response(500, 4, "out of memory".to_string());
        match err {
            DbError::Api { status, code, .. } => {
                assert_eq!(status, 500);
                assert_eq!(code, 4);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
