use std::cmp::Ordering;
use std::fmt::Display;

/// Check that a slice is strictly ascending under `partial_cmp`.
///
/// Incomparable neighbours (for example NaN) fail the check.
pub fn is_strictly_ascending<V: PartialOrd>(values: &[V]) -> bool {
    values
        .windows(2)
        .all(|w| matches!(w[0].partial_cmp(&w[1]), Some(Ordering::Less)))
}

/// Render cut points as a comma separated list.
pub fn fmt_cut_points<V: Display>(v: &[V]) -> String {
    let mut res = String::new();
    if let Some(last) = v.len().checked_sub(1) {
        for n in &v[..last] {
            res.push_str(format!("{}", n).as_str());
            res.push_str(", ");
        }
        res.push_str(format!("{}", v[last]).as_str());
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_ascending() {
        assert!(is_strictly_ascending(&[1, 2, 3]));
        assert!(is_strictly_ascending::<i32>(&[]));
        assert!(is_strictly_ascending(&[5]));
        assert!(!is_strictly_ascending(&[1, 1, 2]));
        assert!(!is_strictly_ascending(&[3, 2]));
        assert!(!is_strictly_ascending(&[0.0, f64::NAN, 1.0]));
    }

    #[test]
    fn test_fmt_cut_points() {
        assert_eq!(fmt_cut_points::<i32>(&[]), "");
        assert_eq!(fmt_cut_points(&[10]), "10");
        assert_eq!(fmt_cut_points(&[0, 10, 20]), "0, 10, 20");
    }
}
