//! The 20-question reference instrument.

use super::{Question, Questionnaire};

pub const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];
pub const INTENSITY: &[&str] = &["Not at all", "Slightly", "Moderately", "Very", "Extremely"];
pub const QUALITY: &[&str] = &["Poor", "Fair", "Good", "Very Good", "Excellent"];
pub const ATTITUDE: &[&str] = &["Positive", "Neutral", "Negative"];
pub const YES_NO: &[&str] = &["Yes", "No"];
pub const YES_NO_SOMETIMES: &[&str] = &["Yes", "No", "Sometimes"];

pub const QUESTIONS: [Question; 20] = [
    Question::choice("How often do you feel physically and emotionally drained?", FREQUENCY),
    Question::slider("Rate your energy levels during and after work on a scale of 1-10", 1, 10),
    Question::choice("How would you rate your sleep quality?", QUALITY),
    Question::slider("On a scale of 1-10, how stressed do you feel at work?", 1, 10),
    Question::choice("How interested are you in your daily tasks?", INTENSITY),
    Question::choice(
        "How would you describe your attitude towards colleagues or clients?",
        ATTITUDE,
    ),
    Question::choice("Do you feel your work lacks meaning?", YES_NO_SOMETIMES),
    Question::slider(
        "Rate your confidence in performing your job effectively on a scale of 1-10",
        1,
        10,
    ),
    Question::choice("How satisfied are you with your accomplishments at work?", INTENSITY),
    Question::choice("Have you noticed a decline in your productivity or efficiency?", YES_NO),
    Question::choice(
        "Do you experience physical symptoms like headaches or muscle tension frequently?",
        FREQUENCY,
    ),
    Question::choice("Do you often feel anxious or depressed?", FREQUENCY),
    Question::choice(
        "How often do you take sick days or time off due to feeling overwhelmed?",
        FREQUENCY,
    ),
    Question::choice(
        "Do you find yourself avoiding social interactions with colleagues or friends?",
        FREQUENCY,
    ),
    Question::choice(
        "Have you started using unhealthy coping strategies (e.g., overeating, alcohol)?",
        FREQUENCY,
    ),
    Question::choice("Are you working excessive hours?", YES_NO),
    Question::choice("Are your job expectations clear?", YES_NO_SOMETIMES),
    Question::choice("Do you have support from colleagues or supervisors?", YES_NO_SOMETIMES),
    Question::slider("Rate your work-life balance on a scale of 1-10", 1, 10),
    Question::choice("Can you relax and recover outside of work hours?", FREQUENCY),
];

/// The reference questionnaire.
pub fn reference() -> Questionnaire {
    Questionnaire::new(QUESTIONS.to_vec())
}
