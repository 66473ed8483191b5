// 🔑 Identifier Generator - Stable entity identity
//
// Every entity (account, category, subcategory, transaction) gets a UUID
// string at creation. Identity NEVER changes after that; ids are never
// reused or recycled, so no coordination with persisted state is needed.

/// Generate a fresh entity id.
///
/// UUID v4 gives 122 bits of randomness in a compact hyphenated string -
/// collision probability is negligible for the lifetime of a process.
pub fn generate() -> String {
    uuid::Uuid::new_v4().to_string()
}
