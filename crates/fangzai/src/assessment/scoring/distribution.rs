use super::super::domain::SubDimension;
use super::Scores;
use serde::Serialize;

/// A group member's raw score and its share of the group total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupShare {
    pub sub_dimension: SubDimension,
    pub score: u32,
    pub percentage: u32,
}

/// Shares within one reporting group, in input order. An all-zero group
/// reports 0% for every member.
pub fn group_distribution(scores: &Scores, names: &[SubDimension]) -> Vec<GroupShare> {
    let total = names
        .iter()
        .map(|sub_dimension| scores.get(*sub_dimension))
        .sum::<u32>()
        .max(1);

    names
        .iter()
        .map(|sub_dimension| {
            let score = scores.get(*sub_dimension);
            GroupShare {
                sub_dimension: *sub_dimension,
                score,
                percentage: rounded_percentage(score, total),
            }
        })
        .collect()
}

// round half up
fn rounded_percentage(part: u32, total: u32) -> u32 {
    let part = u64::from(part);
    let total = u64::from(total);
    ((part * 200 + total) / (total * 2)) as u32
}
