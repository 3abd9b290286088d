//! 考试评分

use std::collections::{HashMap, HashSet};

use super::entities::{AnswerKey, SubmittedAnswer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
}

/// 按题目答案计算得分
///
/// 每道题只计第一次作答，不属于本场考试的题目忽略，无法识别的选项按答错处理。
/// `answer_keys` 为空时得分为 0，调用方需要先拒绝没有题目的考试。
pub fn score_answers(answer_keys: &HashMap<i64, AnswerKey>, answers: &[SubmittedAnswer]) -> Score {
    let total = answer_keys.len();
    let mut answered = HashSet::with_capacity(answers.len());
    let mut correct = 0;

    for answer in answers {
        let Some(key) = answer_keys.get(&answer.question_id) else {
            continue;
        };
        if !answered.insert(answer.question_id) {
            continue;
        }
        if answer.selected_option.parse::<AnswerKey>().ok() == Some(*key) {
            correct += 1;
        }
    }

    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };

    Score {
        correct,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> HashMap<i64, AnswerKey> {
        HashMap::from([(1, AnswerKey::A), (2, AnswerKey::B), (3, AnswerKey::C), (4, AnswerKey::D)])
    }

    fn answer(question_id: i64, option: &str) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id,
            selected_option: option.to_string(),
        }
    }

    #[test]
    fn test_partial_score() {
        let score = score_answers(&keys(), &[answer(1, "A"), answer(2, "C"), answer(3, "c")]);
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 4);
        assert!((score.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_answers_count_once() {
        let score = score_answers(&keys(), &[answer(1, "A"), answer(1, "A"), answer(1, "A")]);
        assert_eq!(score.correct, 1);
        assert!((score.percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_answer_wins() {
        let score = score_answers(&keys(), &[answer(2, "A"), answer(2, "B")]);
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn test_unknown_questions_and_bad_options_ignored() {
        let score = score_answers(&keys(), &[answer(99, "A"), answer(4, "E"), answer(3, "C")]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 4);
    }

    #[test]
    fn test_all_correct_is_hundred() {
        let answers = [answer(1, "A"), answer(2, "B"), answer(3, "C"), answer(4, "D")];
        let score = score_answers(&keys(), &answers);
        assert!((score.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_questions_scores_zero() {
        let score = score_answers(&HashMap::new(), &[answer(1, "A")]);
        assert_eq!(score.total, 0);
        assert_eq!(score.percentage, 0.0);
    }
}
