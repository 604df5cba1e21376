//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 120]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional assignee; cleared when the user is deleted.
        assignee_id -> Nullable<Uuid>,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
