use super::common::*;
use crate::workflows::assessment::domain::{AssessmentError, Dichotomy};
use crate::workflows::assessment::{AssessmentSession, Survey, SurveyState};

fn complete_session(survey: &Survey, answers: &[usize]) -> AssessmentSession {
    let mut session = AssessmentSession::new();
    for option_index in answers {
        session
            .answer(survey, *option_index)
            .expect("answer accepted");
    }
    session
}

#[test]
fn new_session_starts_on_first_question() {
    let survey = Survey::standard();
    let session = AssessmentSession::new();

    assert_eq!(session.state(), &SurveyState::InProgress { index: 0 });
    assert_eq!(session.answered(), 0);
    assert_eq!(
        session.current_question(&survey).map(|question| question.id),
        Some(1)
    );
}

#[test]
fn answering_advances_through_the_survey() {
    let survey = Survey::standard();
    let mut session = AssessmentSession::new();

    for expected_next in 1..28 {
        let state = session.answer(&survey, MOST_POSITIVE).expect("answer accepted");
        assert_eq!(state, &SurveyState::InProgress { index: expected_next });
    }

    let last = session
        .current_question(&survey)
        .expect("last question active");
    assert_eq!(last.id, 28);
    assert!(!session.is_complete());
}

#[test]
fn final_answer_completes_and_classifies() {
    let survey = Survey::standard();
    let session = complete_session(&survey, &answers_by_axis(0, 1, 3, 4));

    assert!(session.is_complete());
    let result = session.result().expect("result present");
    assert_eq!(result.type_code.as_str(), "ESFP");
    assert_eq!(result.axis_scores.get(Dichotomy::SN), 14);
    assert_eq!(result.axis_scores.get(Dichotomy::TF), -14);
    assert!(session.current_question(&survey).is_none());
}

#[test]
fn responses_follow_question_order_and_axes() {
    let survey = Survey::standard();
    let session = complete_session(&survey, &answers_by_axis(0, 0, 0, 0));

    for (response, question) in session.responses().iter().zip(survey.questions()) {
        assert_eq!(response.question_id, question.id);
        assert_eq!(response.dichotomy, question.dichotomy);
    }
}

#[test]
fn completed_session_rejects_further_answers_until_reset() {
    let survey = Survey::standard();
    let mut session = complete_session(&survey, &answers_by_axis(4, 4, 4, 4));

    assert_eq!(
        session.answer(&survey, 0),
        Err(AssessmentError::AlreadyComplete)
    );
    assert_eq!(session.answered(), 28);

    session.reset();
    assert_eq!(session.state(), &SurveyState::InProgress { index: 0 });
    assert!(session.responses().is_empty());
    assert!(session.result().is_none());
}

#[test]
fn invalid_option_leaves_state_untouched() {
    let survey = Survey::standard();
    let mut session = AssessmentSession::new();
    session.answer(&survey, 1).expect("answer accepted");

    let before = session.clone();
    match session.answer(&survey, 7) {
        Err(AssessmentError::InvalidOption { question_id, index }) => {
            assert_eq!(question_id, 2);
            assert_eq!(index, 7);
        }
        other => panic!("expected invalid option, got {other:?}"),
    }
    assert_eq!(session, before);
}
