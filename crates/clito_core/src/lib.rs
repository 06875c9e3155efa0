pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::Task;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new(1, "demo", "2025-12-20T00:00:00Z".to_string());

        assert_eq!(task.id, 1);
        assert_eq!(task.description, "demo");
        assert!(!task.completed);
        assert_eq!(task.created_at, "2025-12-20T00:00:00Z");
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn mark_completed_records_timestamp() {
        let mut task = Task::new(1, "demo", "2025-12-20T00:00:00Z".to_string());
        task.mark_completed("2025-12-21T09:00:00Z".to_string());

        assert!(task.completed);
        assert_eq!(task.completed_at.as_deref(), Some("2025-12-21T09:00:00Z"));
    }

    #[test]
    fn app_error_exposes_code() {
        let err = AppError::invalid_input("missing id");
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(AppError::NotFound(3).code(), "not_found");
        assert_eq!(
            AppError::io("disk full").to_string(),
            "io_error - disk full"
        );
    }
}
