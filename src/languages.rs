use crate::model::{LanguageUsage, RankedLanguage, Rgb, NEUTRAL_GRAY};
use std::collections::HashMap;

pub const DEFAULT_TOP_K: usize = 5;
pub const OTHERS_LABEL: &str = "Others";

struct LanguageAccum {
    name: String,
    color: Rgb,
    size: u64,
}

/// Ranks languages by total bytes across all repositories.
///
/// Languages past `top_k` are folded into a trailing "Others" entry. Every
/// percentage is relative to the grand total, so the returned list sums to
/// 100 whenever that total is non-zero. Equal sizes keep first-seen order.
pub fn rank_languages(usages: &[LanguageUsage], top_k: usize) -> Vec<RankedLanguage> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accums: Vec<LanguageAccum> = Vec::new();

    for usage in usages {
        match index.get(usage.language.as_str()) {
            Some(&i) => {
                let accum = &mut accums[i];
                accum.size += usage.size;
                accum.color = usage.color;
            }
            None => {
                index.insert(usage.language.as_str(), accums.len());
                accums.push(LanguageAccum {
                    name: usage.language.clone(),
                    color: usage.color,
                    size: usage.size,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    accums.sort_by(|a, b| b.size.cmp(&a.size));

    let total: u64 = accums.iter().map(|a| a.size).sum();
    let percent_of = |size: u64| {
        if total == 0 {
            0.0
        } else {
            size as f64 / total as f64 * 100.0
        }
    };

    let rest: u64 = accums.iter().skip(top_k).map(|a| a.size).sum();
    let has_rest = accums.len() > top_k;

    let mut ranked: Vec<RankedLanguage> = accums
        .into_iter()
        .take(top_k)
        .map(|a| RankedLanguage {
            percent: percent_of(a.size),
            name: a.name,
            color: a.color,
            size: a.size,
        })
        .collect();

    if has_rest {
        ranked.push(RankedLanguage {
            name: OTHERS_LABEL.to_string(),
            color: NEUTRAL_GRAY,
            size: rest,
            percent: percent_of(rest),
        });
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usage(name: &str, size: u64) -> LanguageUsage {
        LanguageUsage::new(name, size, Rgb::new(1, 2, 3))
    }

    fn percent_sum(ranked: &[RankedLanguage]) -> f64 {
        ranked.iter().map(|r| r.percent).sum()
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        assert!(rank_languages(&[], DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn sums_sizes_across_repositories() {
        let usages = [usage("Rust", 10), usage("Go", 30), usage("Rust", 25)];
        let ranked = rank_languages(&usages, DEFAULT_TOP_K);
        let names: Vec<_> = ranked.iter().map(|r| (r.name.as_str(), r.size)).collect();
        assert_eq!(names, vec![("Rust", 35), ("Go", 30)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_languages(&[usage("A", 100), usage("B", 100)], DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[1].name, "B");
        assert!((ranked[0].percent - 50.0).abs() < 1e-9);
        assert!((ranked[1].percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn long_tail_is_folded_into_others() {
        let sizes = [50, 40, 30, 20, 10, 5, 5];
        let usages: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| usage(&format!("L{i}"), s))
            .collect();

        let ranked = rank_languages(&usages, 5);

        assert_eq!(ranked.len(), 6);
        let others = ranked.last().unwrap();
        assert_eq!(others.name, OTHERS_LABEL);
        assert_eq!(others.size, 10);
        assert_eq!(others.color, NEUTRAL_GRAY);
        assert!((percent_sum(&ranked) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn no_others_when_everything_fits() {
        let ranked = rank_languages(&[usage("A", 3), usage("B", 1)], 2);
        assert!(ranked.iter().all(|r| r.name != OTHERS_LABEL));
        assert!((percent_sum(&ranked) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn latest_color_wins() {
        let usages = [
            LanguageUsage::new("Rust", 1, Rgb::new(1, 1, 1)),
            LanguageUsage::new("Rust", 1, Rgb::new(2, 2, 2)),
        ];
        assert_eq!(rank_languages(&usages, 5)[0].color, Rgb::new(2, 2, 2));
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let ranked = rank_languages(&[usage("A", 0), usage("B", 0)], 5);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.percent == 0.0));
    }

    #[test]
    fn same_input_same_output() {
        let usages = [
            usage("Go", 40),
            usage("Rust", 40),
            usage("C", 40),
            usage("Go", 0),
            usage("Lua", 10),
            usage("Nix", 10),
            usage("Zig", 10),
        ];
        let first = rank_languages(&usages, 4);
        assert_eq!(first, rank_languages(&usages, 4));
        let names: Vec<_> = first.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust", "C", "Lua", OTHERS_LABEL]);
    }
}
