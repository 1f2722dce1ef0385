use serde::Serialize;

use super::classifier::classify;
use super::domain::{AssessmentError, AxisScores, Question, Response, TypeCode, TypeProfile};
use super::profiles::resolve_profile;
use super::scoring::score;
use super::survey::Survey;

/// Classification produced once every question has been answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub type_code: TypeCode,
    pub axis_scores: AxisScores,
    pub profile: &'static TypeProfile,
}

/// Classify a full response sequence.
///
/// Partial sequences are rejected; there are no partial-score semantics.
/// Every response must agree with its survey question.
pub fn evaluate(survey: &Survey, responses: &[Response]) -> Result<AssessmentResult, AssessmentError> {
    if !survey.is_complete(responses) {
        return Err(AssessmentError::Incomplete {
            answered: responses.len(),
            required: survey.len(),
        });
    }
    for response in responses {
        survey.validate(response)?;
    }

    let axis_scores = score(responses);
    let type_code = classify(&axis_scores);
    let profile = resolve_profile(type_code)?;

    Ok(AssessmentResult {
        type_code,
        axis_scores,
        profile,
    })
}

/// Stateless scoring of option indices given in question order.
pub fn evaluate_answers(
    survey: &Survey,
    option_indices: &[usize],
) -> Result<AssessmentResult, AssessmentError> {
    let responses = option_indices
        .iter()
        .enumerate()
        .map(|(position, option_index)| {
            let question = survey.current_question(position)?;
            Response::for_option(question, *option_index)
        })
        .collect::<Result<Vec<_>, _>>()?;

    evaluate(survey, &responses)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SurveyState {
    InProgress { index: usize },
    Complete { result: AssessmentResult },
}

impl SurveyState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InProgress { .. } => "in_progress",
            Self::Complete { .. } => "complete",
        }
    }
}

/// Owned survey progress for a single respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    state: SurveyState,
    responses: Vec<Response>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            state: SurveyState::InProgress { index: 0 },
            responses: Vec::new(),
        }
    }

    pub fn state(&self) -> &SurveyState {
        &self.state
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SurveyState::Complete { .. })
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            SurveyState::Complete { result } => Some(result),
            SurveyState::InProgress { .. } => None,
        }
    }

    pub fn current_question<'a>(&self, survey: &'a Survey) -> Option<&'a Question> {
        match self.state {
            SurveyState::InProgress { index } => survey.current_question(index).ok(),
            SurveyState::Complete { .. } => None,
        }
    }

    /// Record the selected option for the active question and advance.
    ///
    /// Answering the last question classifies the responses and moves the
    /// session to `Complete`, which only `reset` leaves.
    pub fn answer(
        &mut self,
        survey: &Survey,
        option_index: usize,
    ) -> Result<&SurveyState, AssessmentError> {
        let index = match self.state {
            SurveyState::InProgress { index } => index,
            SurveyState::Complete { .. } => return Err(AssessmentError::AlreadyComplete),
        };

        let question = survey.current_question(index)?;
        let response = Response::for_option(question, option_index)?;
        self.responses.push(response);

        if index + 1 < survey.len() {
            self.state = SurveyState::InProgress { index: index + 1 };
            return Ok(&self.state);
        }

        match evaluate(survey, &self.responses) {
            Ok(result) => {
                self.state = SurveyState::Complete { result };
                Ok(&self.state)
            }
            Err(err) => {
                self.responses.pop();
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = SurveyState::InProgress { index: 0 };
        self.responses.clear();
    }
}
