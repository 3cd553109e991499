//! Diesel schema for record persistence.

diesel::table! {
    /// Patient records with analysis text and serialised boards.
    records (id) {
        /// Record identifier.
        id -> Uuid,
        /// Email of the owning user.
        #[max_length = 320]
        owner_email -> Varchar,
        /// Display label.
        #[max_length = 255]
        record_name -> Varchar,
        /// Analysis text, empty until a report has been analysed.
        analysis_result -> Text,
        /// Serialised board, empty until a plan has been structured.
        kanban_records -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// User profiles keyed by email.
    user_profiles (email) {
        /// Profile email.
        #[max_length = 320]
        email -> Varchar,
        /// Display username.
        #[max_length = 255]
        username -> Varchar,
        /// Optional age.
        age -> Nullable<Int4>,
        /// Optional free-text location.
        location -> Nullable<Text>,
    }
}
