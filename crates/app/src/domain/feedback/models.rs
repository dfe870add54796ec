//! Feedback Models

use crate::domain::feedback::records::FeedbackRecord;

/// Feedback left on one food item, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItemFeedback {
    pub entries: Vec<FeedbackRecord>,
}

impl FoodItemFeedback {
    /// Mean star rating, or `None` without any feedback.
    #[must_use]
    pub fn average_stars(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }

        let total: u32 = self.entries.iter().map(|entry| u32::from(entry.stars)).sum();

        #[expect(
            clippy::cast_precision_loss,
            reason = "feedback counts stay far below f64 precision limits"
        )]
        let count = self.entries.len() as f64;

        Some(f64::from(total) / count)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{
        feedback::records::FeedbackUuid, food_items::records::FoodItemUuid,
        users::records::UserUuid,
    };

    use super::*;

    fn entry(stars: u8) -> FeedbackRecord {
        FeedbackRecord {
            uuid: FeedbackUuid::new(),
            user_uuid: UserUuid::new(),
            username: "ada".to_string(),
            food_item_uuid: FoodItemUuid::new(),
            stars,
            comment: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn average_of_no_feedback_is_none() {
        let feedback = FoodItemFeedback { entries: vec![] };

        assert_eq!(feedback.average_stars(), None);
    }

    #[test]
    fn average_is_mean_of_stars() {
        let feedback = FoodItemFeedback {
            entries: vec![entry(5), entry(4), entry(2)],
        };

        let average = feedback.average_stars().unwrap_or_default();

        assert!((average - 11.0 / 3.0).abs() < f64::EPSILON);
    }
}
