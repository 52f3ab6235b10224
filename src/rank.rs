use crate::Normalized;

/// How rows with equal scores share ranks. Scores are compared for exact equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankMethod {
    /// Standard competition ranking ("1224"): tied rows take the best rank of their group, and the
    /// next distinct score resumes at the number of rows ranked above it plus one.
    #[default]
    Competition,
    /// Modified competition ranking ("1334"): tied rows take the worst rank of their group.
    ModifiedCompetition,
    /// Dense ranking ("1223"): tied rows share a rank and the next distinct score takes the next
    /// integer.
    Dense,
}

impl std::str::FromStr for RankMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "competition" => Ok(Self::Competition),
            "modified" => Ok(Self::ModifiedCompetition),
            "dense" => Ok(Self::Dense),
            _ => Err(format!(
                "unknown tie policy {s:?}, expected one of: competition, modified, dense"
            )),
        }
    }
}

/// Rank `scores` in descending order, 1 being the highest score. The returned ranks are aligned
/// with `scores` by position.
pub fn rank(scores: &[Normalized], method: RankMethod) -> Vec<usize> {
    let order = permutation::sort_by(scores, |a, b| b.cmp(a));
    let sorted = order.apply_slice(scores);

    let mut ranks: Vec<usize> = Vec::with_capacity(sorted.len());
    let mut start = 0;
    let mut distinct = 0;
    while start < sorted.len() {
        let len = sorted[start..]
            .iter()
            .take_while(|s| **s == sorted[start])
            .count();
        distinct += 1;
        let rank = match method {
            RankMethod::Competition => start + 1,
            RankMethod::ModifiedCompetition => start + len,
            RankMethod::Dense => distinct,
        };
        ranks.extend(std::iter::repeat(rank).take(len));
        start += len;
    }

    order.inverse().apply_slice_in_place(&mut ranks);
    ranks
}

#[cfg(test)]
mod test {
    use super::{rank, RankMethod};
    use crate::Normalized;

    fn scores(values: &[f64]) -> Vec<Normalized> {
        values.iter().map(|v| Normalized::new(*v).unwrap()).collect()
    }

    #[test]
    fn distinct_scores() {
        let scores = scores(&[0.2, 0.9, 0.5, 0.1]);
        for method in [
            RankMethod::Competition,
            RankMethod::ModifiedCompetition,
            RankMethod::Dense,
        ] {
            assert_eq!(rank(&scores, method), vec![3, 1, 2, 4]);
        }
    }

    #[test]
    fn tie_policies() {
        let scores = scores(&[0.5, 0.9, 0.5, 0.1, 0.9, 0.5]);
        assert_eq!(
            rank(&scores, RankMethod::Competition),
            vec![3, 1, 3, 6, 1, 3]
        );
        assert_eq!(
            rank(&scores, RankMethod::ModifiedCompetition),
            vec![5, 2, 5, 6, 2, 5]
        );
        assert_eq!(rank(&scores, RankMethod::Dense), vec![2, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn default_is_competition() {
        assert_eq!(RankMethod::default(), RankMethod::Competition);
        assert_eq!("dense".parse::<RankMethod>(), Ok(RankMethod::Dense));
        assert!("average".parse::<RankMethod>().is_err());
    }

    #[test]
    fn empty() {
        assert!(rank(&[], RankMethod::Competition).is_empty());
    }
}
