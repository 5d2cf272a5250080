//! Body-type quiz service

use crate::error::ApiError;
use bmi_calculator_shared::body_type::{quiz_questions, QuizQuestion};
use bmi_calculator_shared::types::{BodyTypeInfo, BodyTypeResponse};
use bmi_calculator_shared::{score_answers, BodyType, QuizAnswers};

pub struct BodyTypeService;

impl BodyTypeService {
    /// Score a completed quiz
    pub fn classify(answers: &QuizAnswers) -> BodyTypeResponse {
        BodyTypeResponse::from(score_answers(answers))
    }

    /// All body types with their profiles, in tie-break order
    pub fn types() -> Vec<BodyTypeInfo> {
        BodyType::ALL
            .into_iter()
            .map(|body_type| BodyTypeInfo {
                body_type,
                profile: body_type.profile(),
            })
            .collect()
    }

    /// Profile of a single body type by its lowercase name
    pub fn find(name: &str) -> Result<BodyTypeInfo, ApiError> {
        Self::types()
            .into_iter()
            .find(|info| info.body_type.title().eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::NotFound(format!("Unknown body type: {}", name)))
    }

    pub fn questions() -> Vec<QuizQuestion> {
        quiz_questions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_calculator_shared::{Shoulders, Waist, WeightGainPattern};

    #[test]
    fn test_classify_includes_profile() {
        let answers = QuizAnswers {
            shoulders: Shoulders::Wider,
            waist: Waist::Undefined,
            weight_gain: WeightGainPattern::Bottom,
        };
        let response = BodyTypeService::classify(&answers);
        assert_eq!(response.body_type, BodyType::Endomorph);
        assert_eq!(response.scores.endomorph, 6);
        assert_eq!(response.profile.title, "Endomorph");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let info = BodyTypeService::find("MESOMORPH").unwrap();
        assert_eq!(info.body_type, BodyType::Mesomorph);
        assert!(matches!(
            BodyTypeService::find("athletic"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_types_in_order() {
        let types: Vec<BodyType> = BodyTypeService::types().into_iter().map(|t| t.body_type).collect();
        assert_eq!(types, BodyType::ALL.to_vec());
    }
}
