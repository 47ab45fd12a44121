use std::collections::HashMap;

use uuid::Uuid;

use crate::models::domain::{ExamResult, ExamSession, ExamSummary, OptionKey, Question};

pub struct ScoringService;

impl ScoringService {
    /// Scores a submission against the session's fixed question sequence.
    ///
    /// Results follow the session's presentation order, not the submission
    /// order. An omitted or null answer scores as incorrect. A session
    /// question with no matching record in `questions` is skipped entirely
    /// (deleted mid-exam); answers for ids outside the session's sequence
    /// are ignored.
    pub fn score(
        session: &ExamSession,
        questions: &[Question],
        answers: &HashMap<Uuid, Option<OptionKey>>,
    ) -> ExamSummary {
        let question_map: HashMap<Uuid, &Question> =
            questions.iter().map(|q| (q.id, q)).collect();

        let mut results = Vec::with_capacity(session.question_ids.len());
        let mut correct_answers = 0;

        for question_id in &session.question_ids {
            let Some(question) = question_map.get(question_id) else {
                continue;
            };

            let user_key = answers.get(question_id).copied().flatten();
            let is_correct = user_key == Some(question.correct);
            if is_correct {
                correct_answers += 1;
            }

            results.push(ExamResult {
                question_id: *question_id,
                question_text: question.text.clone(),
                user_answer: user_key.map(|key| question.option_text(key).to_string()),
                correct_answer: question.option_text(question.correct).to_string(),
                is_correct,
            });
        }

        let total_questions = results.len();
        let percentage = if total_questions == 0 {
            // Sessions are never created with zero questions; this only
            // happens when every question was deleted mid-exam.
            0.0
        } else {
            100.0 * correct_answers as f64 / total_questions as f64
        };

        ExamSummary {
            total_questions,
            correct_answers,
            percentage,
            results,
        }
    }
}
