use huepath_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(0, 0);
        let b = Pos::new(3, -2);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }
}
