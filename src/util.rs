/*!

  Utils for gate-lab development.

*/

/// Compare two truth-table text blocks line by line, for clearer failures
/// than a whole-artifact `assert_eq!`.
#[macro_export]
macro_rules! assert_table_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                for (i, (left_line, right_line)) in
                    left_val.lines().zip(right_val.lines()).enumerate()
                {
                    assert_eq!(left_line, right_line, "tables differ at line {}", i);
                }
                assert_eq!(
                    left_val.lines().count(),
                    right_val.lines().count(),
                    "tables differ in line count"
                );
            }
        }
    };
}
