//! Body-type quiz classification
//!
//! Three multiple-choice answers are scored into one of three somatotypes.
//! Each answer adds points to exactly one body type; the highest total wins.
//!
//! Ties go to the body type listed first in [`BodyType::ALL`]
//! (Ectomorph, then Mesomorph, then Endomorph). A fold that moves to the
//! later candidate on equal scores would resolve the same ties the other way,
//! e.g. a three-way tie to Endomorph; [`BodyTypeScores::dominant`] does not.

use crate::errors::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Quiz Answers
// ============================================================================

/// How the shoulders compare to the hips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shoulders {
    Narrower,
    Same,
    Wider,
}

/// How defined the waist is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waist {
    Defined,
    Straight,
    Undefined,
}

/// Where weight is gained first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGainPattern {
    Even,
    Middle,
    Bottom,
    Top,
}

impl FromStr for Shoulders {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "narrower" => Ok(Shoulders::Narrower),
            "same" => Ok(Shoulders::Same),
            "wider" => Ok(Shoulders::Wider),
            _ => Err(CalcError::UnknownAnswer {
                question: "shoulders",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Waist {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "defined" => Ok(Waist::Defined),
            "straight" => Ok(Waist::Straight),
            "undefined" => Ok(Waist::Undefined),
            _ => Err(CalcError::UnknownAnswer {
                question: "waist",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for WeightGainPattern {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "even" => Ok(WeightGainPattern::Even),
            "middle" => Ok(WeightGainPattern::Middle),
            "bottom" => Ok(WeightGainPattern::Bottom),
            "top" => Ok(WeightGainPattern::Top),
            _ => Err(CalcError::UnknownAnswer {
                question: "weight_gain",
                value: s.to_string(),
            }),
        }
    }
}

/// Complete set of quiz answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub shoulders: Shoulders,
    pub waist: Waist,
    pub weight_gain: WeightGainPattern,
}

impl QuizAnswers {
    /// Parse answers from their lowercase option values
    pub fn parse(shoulders: &str, waist: &str, weight_gain: &str) -> Result<Self, CalcError> {
        Ok(Self {
            shoulders: shoulders.parse()?,
            waist: waist.parse()?,
            weight_gain: weight_gain.parse()?,
        })
    }
}

impl Default for QuizAnswers {
    /// Preselected answers of the quiz form
    fn default() -> Self {
        Self {
            shoulders: Shoulders::Same,
            waist: Waist::Defined,
            weight_gain: WeightGainPattern::Even,
        }
    }
}

// ============================================================================
// Body Types
// ============================================================================

/// Somatotype determined by the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    /// Candidates in tie-break order
    pub const ALL: [BodyType; 3] = [BodyType::Ectomorph, BodyType::Mesomorph, BodyType::Endomorph];

    pub fn title(&self) -> &'static str {
        match self {
            BodyType::Ectomorph => "Ectomorph",
            BodyType::Mesomorph => "Mesomorph",
            BodyType::Endomorph => "Endomorph",
        }
    }

    /// Descriptive profile for result display
    pub fn profile(&self) -> BodyTypeProfile {
        match self {
            BodyType::Ectomorph => BodyTypeProfile {
                title: "Ectomorph",
                description: "Naturally lean and long, with difficulty gaining weight",
                characteristics: [
                    "Narrow shoulders and hips",
                    "Long limbs",
                    "Fast metabolism",
                    "Difficulty gaining weight",
                ],
                recommendations: [
                    "Focus on strength training",
                    "Increase caloric intake",
                    "Eat protein-rich foods",
                    "Include complex carbohydrates",
                ],
            },
            BodyType::Mesomorph => BodyTypeProfile {
                title: "Mesomorph",
                description: "Athletic and muscular, with a medium frame",
                characteristics: [
                    "Athletic build",
                    "Gains muscle easily",
                    "Responsive to exercise",
                    "Medium-sized joints/bones",
                ],
                recommendations: [
                    "Balance cardio and strength training",
                    "Moderate protein intake",
                    "Watch portion sizes",
                    "Stay consistent with exercise",
                ],
            },
            BodyType::Endomorph => BodyTypeProfile {
                title: "Endomorph",
                description: "Naturally broad and strong, with slower metabolism",
                characteristics: [
                    "Wider frame",
                    "Stores fat easily",
                    "Strong lower body",
                    "Slower metabolism",
                ],
                recommendations: [
                    "Regular cardio exercise",
                    "High-protein, low-carb diet",
                    "Strength training",
                    "Portion control",
                ],
            },
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Description, characteristics and training advice for a body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyTypeProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub characteristics: [&'static str; 4],
    pub recommendations: [&'static str; 4],
}

// ============================================================================
// Scoring
// ============================================================================

/// Accumulated points per body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BodyTypeScores {
    pub ectomorph: u32,
    pub mesomorph: u32,
    pub endomorph: u32,
}

impl BodyTypeScores {
    pub fn get(&self, body_type: BodyType) -> u32 {
        match body_type {
            BodyType::Ectomorph => self.ectomorph,
            BodyType::Mesomorph => self.mesomorph,
            BodyType::Endomorph => self.endomorph,
        }
    }

    fn add(&mut self, body_type: BodyType, points: u32) {
        match body_type {
            BodyType::Ectomorph => self.ectomorph += points,
            BodyType::Mesomorph => self.mesomorph += points,
            BodyType::Endomorph => self.endomorph += points,
        }
    }

    /// Body type with the highest score
    ///
    /// The running best is only replaced on a strictly greater score, so the
    /// earliest of several tied candidates wins.
    pub fn dominant(&self) -> BodyType {
        let mut best = BodyType::ALL[0];
        for candidate in BodyType::ALL.into_iter().skip(1) {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Score each answer into the body type it points to
pub fn score_answers(answers: &QuizAnswers) -> BodyTypeScores {
    let mut scores = BodyTypeScores::default();

    match answers.shoulders {
        Shoulders::Narrower => scores.add(BodyType::Ectomorph, 2),
        Shoulders::Same => scores.add(BodyType::Mesomorph, 2),
        Shoulders::Wider => scores.add(BodyType::Endomorph, 2),
    }

    match answers.waist {
        Waist::Straight => scores.add(BodyType::Ectomorph, 2),
        Waist::Defined => scores.add(BodyType::Mesomorph, 2),
        Waist::Undefined => scores.add(BodyType::Endomorph, 2),
    }

    match answers.weight_gain {
        WeightGainPattern::Even => scores.add(BodyType::Mesomorph, 2),
        WeightGainPattern::Top | WeightGainPattern::Bottom => scores.add(BodyType::Endomorph, 2),
        WeightGainPattern::Middle => scores.add(BodyType::Ectomorph, 1),
    }

    scores
}

/// Determine the dominant body type for a set of quiz answers
pub fn determine_body_type(answers: &QuizAnswers) -> BodyType {
    score_answers(answers).dominant()
}

// ============================================================================
// Quiz Questions
// ============================================================================

/// A selectable answer of a quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A quiz question as presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Field name of the answer in [`QuizAnswers`]
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<QuizOption>,
}

/// The three quiz questions in the order they are asked
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            name: "shoulders",
            label: "How do your shoulders compare to your hips?",
            options: vec![
                QuizOption { value: "narrower", label: "Narrower than hips" },
                QuizOption { value: "same", label: "About the same as hips" },
                QuizOption { value: "wider", label: "Wider than hips" },
            ],
        },
        QuizQuestion {
            name: "waist",
            label: "How would you describe your waist?",
            options: vec![
                QuizOption { value: "defined", label: "Clearly defined/curvy" },
                QuizOption { value: "straight", label: "Straight/athletic" },
                QuizOption { value: "undefined", label: "Softly defined" },
            ],
        },
        QuizQuestion {
            name: "weight_gain",
            label: "Where do you tend to gain weight first?",
            options: vec![
                QuizOption { value: "even", label: "Evenly throughout body" },
                QuizOption { value: "middle", label: "Midsection" },
                QuizOption { value: "bottom", label: "Lower body" },
                QuizOption { value: "top", label: "Upper body" },
            ],
        },
    ]
}
