//! XP-to-level derivation.

/// Map cumulative XP to a level label.
///
/// Thresholds are evaluated descending, first match wins. Pure and total:
/// any integer yields a label.
pub fn level_for_xp(xp: i64) -> &'static str {
    if xp >= 300 {
        "Scholarship Master"
    } else if xp >= 200 {
        "Scholarship Pro"
    } else if xp >= 100 {
        "Scholarship Explorer"
    } else if xp >= 50 {
        "Scholarship Novice"
    } else {
        "Scholarship Newbie"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_map_per_threshold_table() {
        assert_eq!(level_for_xp(0), "Scholarship Newbie");
        assert_eq!(level_for_xp(49), "Scholarship Newbie");
        assert_eq!(level_for_xp(50), "Scholarship Novice");
        assert_eq!(level_for_xp(99), "Scholarship Novice");
        assert_eq!(level_for_xp(100), "Scholarship Explorer");
        assert_eq!(level_for_xp(199), "Scholarship Explorer");
        assert_eq!(level_for_xp(200), "Scholarship Pro");
        assert_eq!(level_for_xp(299), "Scholarship Pro");
        assert_eq!(level_for_xp(300), "Scholarship Master");
        assert_eq!(level_for_xp(1_000_000), "Scholarship Master");
    }
}
