//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Geographic regions walks belong to.
    regions (id) {
        id -> Uuid,
        code -> Text,
        name -> Text,
        /// Square kilometres.
        area -> Float8,
        lat -> Float8,
        long -> Float8,
        population -> Int8,
    }
}

diesel::table! {
    /// Difficulty grades.
    walk_difficulties (id) {
        id -> Uuid,
        code -> Text,
    }
}

diesel::table! {
    /// Walks; both foreign keys cascade on delete.
    walks (id) {
        id -> Uuid,
        name -> Text,
        /// Kilometres.
        length -> Float8,
        region_id -> Uuid,
        walk_difficulty_id -> Uuid,
    }
}

diesel::joinable!(walks -> regions (region_id));
diesel::joinable!(walks -> walk_difficulties (walk_difficulty_id));

diesel::allow_tables_to_appear_in_same_query!(regions, walk_difficulties, walks);
