//! Answer ordering for display

use rand::Rng;
use rand::seq::SliceRandom;

use super::model::Question;

/// An answer as laid out on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerChoice {
    /// Index in the question's authored answer list; this is what gets submitted
    pub index: usize,
    pub text: String,
    pub indicator: Option<String>,
}

/// Shuffle a question's answers for one presentation
///
/// Every call produces a fresh order. The `index` on each choice always points
/// back into the unshuffled list, so scoring does not depend on the layout.
pub fn present_answers(question: &Question, rng: &mut impl Rng) -> Vec<AnswerChoice> {
    let mut choices: Vec<AnswerChoice> = question
        .answers
        .iter()
        .enumerate()
        .map(|(index, answer)| AnswerChoice {
            index,
            text: answer.text.clone(),
            indicator: answer.indicator.clone(),
        })
        .collect();
    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::quiz::model::{Answer, Modality};

    fn question() -> Question {
        Question {
            id: "q".into(),
            prompt: "Which letter?".into(),
            modality: Modality::MultipleChoice,
            clips: vec![],
            answers: vec![
                Answer::correct("A"),
                Answer::wrong("B"),
                Answer::wrong("C"),
                Answer::wrong("D"),
            ],
        }
    }

    #[test]
    fn indices_point_at_authored_answers() {
        let question = question();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let choices = present_answers(&question, &mut rng);
            assert_eq!(choices.len(), 4);
            for choice in &choices {
                assert_eq!(question.answers[choice.index].text, choice.text);
            }
        }
    }

    #[test]
    fn correct_answer_survives_shuffle() {
        let question = question();
        let mut rng = StdRng::seed_from_u64(99);
        let choices = present_answers(&question, &mut rng);

        let correct: Vec<_> =
            choices.iter().filter(|c| question.is_correct_index(c.index)).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].text, "A");
    }

    #[test]
    fn order_varies_between_presentations() {
        let question = question();
        let mut rng = StdRng::seed_from_u64(1);
        let first: Vec<usize> =
            present_answers(&question, &mut rng).iter().map(|c| c.index).collect();

        let varied = (0..50).any(|_| {
            let next: Vec<usize> =
                present_answers(&question, &mut rng).iter().map(|c| c.index).collect();
            next != first
        });
        assert!(varied);
    }
}
