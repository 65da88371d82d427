use serde::Serialize;

use crate::model::{AssumptionTable, Overrides};

/// Which side of its baseline an answer falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Above,
    Below,
    AtBaseline,
}

impl Direction {
    fn between(value: f64, baseline: f64) -> Self {
        if value > baseline {
            Direction::Above
        } else if value < baseline {
            Direction::Below
        } else {
            Direction::AtBaseline
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewEntry {
    pub id: &'static str,
    pub value: f64,
    pub baseline: f64,
    pub direction: Direction,
}

/// Answers sharing a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReview {
    pub category: &'static str,
    pub entries: Vec<ReviewEntry>,
}

/// Group the answered assumptions by category.
///
/// Categories appear in the order their first assumption appears in the table,
/// and entries keep table order within a category.
pub fn review(table: &AssumptionTable, overrides: &Overrides) -> Vec<CategoryReview> {
    let mut groups: Vec<CategoryReview> = Vec::new();

    for assumption in table {
        let Some(value) = overrides.get(assumption.id) else {
            continue;
        };
        let entry = ReviewEntry {
            id: assumption.id,
            value,
            baseline: assumption.default_value,
            direction: Direction::between(value, assumption.default_value),
        };

        match groups.iter_mut().find(|g| g.category == assumption.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CategoryReview {
                category: assumption.category,
                entries: vec![entry],
            }),
        }
    }

    groups
}
