/// Context-free addition helper used as a trivial assert target in the
/// test suites.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
