//! Q&A board client

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::{Answer, AnswerFormData, Question, QuestionFormData, QuestionQuery},
};

const FETCH_ALL_FAILED: &str = "질문 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "질문을 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "질문 등록에 실패했습니다.";
const UPDATE_FAILED: &str = "질문 수정에 실패했습니다.";
const DELETE_FAILED: &str = "질문 삭제에 실패했습니다.";
const FETCH_ANSWERS_FAILED: &str = "답변 목록을 불러오는데 실패했습니다.";
const CREATE_ANSWER_FAILED: &str = "답변 등록에 실패했습니다.";
const UPDATE_ANSWER_FAILED: &str = "답변 수정에 실패했습니다.";
const DELETE_ANSWER_FAILED: &str = "답변 삭제에 실패했습니다.";

/// Client for questions and their answers
#[derive(Debug, Clone)]
pub struct QuestionClient {
    http: HttpClient,
}

impl QuestionClient {
    /// Create a new question client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get questions matching the filters
    pub async fn fetch_all(&self, query: &QuestionQuery) -> ClientResult<Vec<Question>> {
        info!("Fetching questions");

        let request = query
            .to_pairs()
            .into_iter()
            .fold(ApiRequest::get(Endpoint::Questions.template()), |request, (key, value)| {
                request.query(key, value)
            });

        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(FETCH_ALL_FAILED))
    }

    /// Get a question by ID
    pub async fn fetch_by_id(&self, id: i64) -> ClientResult<Question> {
        info!("Fetching question: {}", id);

        self.http
            .send_json(ApiRequest::get(Endpoint::Question.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(FETCH_FAILED))
    }

    /// Post a new question
    pub async fn create(&self, form: &QuestionFormData) -> ClientResult<Question> {
        info!("Creating question: {}", form.title);

        let request = ApiRequest::post(Endpoint::Questions.template()).json(form)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(CREATE_FAILED))
    }

    /// Edit a question
    pub async fn update(&self, id: i64, form: &QuestionFormData) -> ClientResult<Question> {
        info!("Updating question: {}", id);

        let request = ApiRequest::put(Endpoint::Question.with_id(id)).json(form)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(UPDATE_FAILED))
    }

    /// Delete a question
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!("Deleting question: {}", id);

        self.http
            .send_no_content(ApiRequest::delete(Endpoint::Question.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(DELETE_FAILED))
    }

    /// Get the answers of a question
    pub async fn fetch_answers(&self, question_id: i64) -> ClientResult<Vec<Answer>> {
        info!("Fetching answers for question: {}", question_id);

        self.http
            .send_json(ApiRequest::get(Endpoint::Answers.with_id(question_id)))
            .await
            .map_err(|e| e.with_fallback(FETCH_ANSWERS_FAILED))
    }

    /// Answer a question
    pub async fn create_answer(
        &self,
        question_id: i64,
        form: &AnswerFormData,
    ) -> ClientResult<Answer> {
        info!("Creating answer for question: {}", question_id);

        let request = ApiRequest::post(Endpoint::Answers.with_id(question_id)).json(form)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(CREATE_ANSWER_FAILED))
    }

    /// Edit an answer
    pub async fn update_answer(&self, answer_id: i64, form: &AnswerFormData) -> ClientResult<Answer> {
        info!("Updating answer: {}", answer_id);

        let request = ApiRequest::put(Endpoint::Answer.with_id(answer_id)).json(form)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(UPDATE_ANSWER_FAILED))
    }

    /// Delete an answer
    pub async fn delete_answer(&self, answer_id: i64) -> ClientResult<()> {
        info!("Deleting answer: {}", answer_id);

        self.http
            .send_no_content(ApiRequest::delete(Endpoint::Answer.with_id(answer_id)))
            .await
            .map_err(|e| e.with_fallback(DELETE_ANSWER_FAILED))
    }
}
