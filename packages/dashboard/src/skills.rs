use std::collections::HashMap;

use api::SkillTransaction;

use crate::format::format_skill;

/// Summed amount for one skill.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTotal {
    pub label: String,
    pub amount: u64,
}

/// Fold `(type, amount)` records into per-type sums, keeping first-seen order.
pub fn aggregate_skills<'a, I>(records: I) -> Vec<SkillTotal>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut totals: Vec<SkillTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for (skill, amount) in records {
        let slot = *index.entry(skill).or_insert_with(|| {
            totals.push(SkillTotal {
                label: skill.to_string(),
                amount: 0,
            });
            totals.len() - 1
        });
        totals[slot].amount += amount;
    }
    totals
}

/// Aggregate skill transactions and turn their types into chart labels.
pub fn skill_chart_data(transactions: &[SkillTransaction]) -> Vec<SkillTotal> {
    aggregate_skills(transactions.iter().map(|t| (t.r#type.as_str(), t.amount)))
        .into_iter()
        .map(|total| SkillTotal {
            label: format_skill(&total.label),
            amount: total.amount,
        })
        .collect()
}
