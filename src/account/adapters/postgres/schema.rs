//! Diesel schema for user account persistence.

diesel::table! {
    /// User accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique login name.
        #[max_length = 150]
        username -> Varchar,
        /// Optional email address.
        #[max_length = 254]
        email -> Nullable<Varchar>,
        /// Password hash in PHC string format.
        password_hash -> Text,
        /// Staff privilege flag.
        is_staff -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
