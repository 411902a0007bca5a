//! Diesel schema for task persistence.

diesel::table! {
    /// Task documents with their embedded unit tests.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Insertion sequence backing storage-native ordering.
        seq -> Int8,
        /// Task name.
        name -> Text,
        /// Difficulty level.
        level -> Int8,
        /// Ordered unit test array.
        unit_tests -> Jsonb,
    }
}
