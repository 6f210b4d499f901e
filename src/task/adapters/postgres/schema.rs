//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title, constrained to 200 characters.
        #[max_length = 200]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp, set once by the store.
        created_at -> Timestamptz,
        /// Last-modification timestamp, refreshed on every write.
        updated_at -> Timestamptz,
    }
}
