//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 150]
        name -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Project membership roster (many-to-many projects/users).
    project_members (project_id, user_id) {
        /// Owning project.
        project_id -> Uuid,
        /// Member user.
        user_id -> Uuid,
        /// Roster position; preserves insertion order.
        position -> Integer,
    }
}

diesel::joinable!(project_members -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_members);
