/// 业务错误码，随信封中的 `code` 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,
    InvalidApiKey = 2001,
    TokenMissing = 2002,
    TokenInvalid = 2003,
    TokenExpired = 2004,
    SessionInvalid = 2005,

    // 用户 / 管理员
    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserRoleInvalid = 3002,
    UserEmailInvalid = 3003,
    UserNameInvalid = 3004,
    CanNotDeleteCurrentUser = 3005,

    // 候选人
    CandidateNotFound = 4000,
    CandidateAlreadyExists = 4001,
    ApplicationNotFound = 4002,
    PositionNotFound = 4100,
    StatusNotFound = 4200,

    // 考试
    ExamNotFound = 5000,
    QuestionNotFound = 5001,
    QuestionLimitExceeded = 5002,
    AnswerKeyInvalid = 5003,
    CategoryNotFound = 5004,
    ExamAlreadyAssigned = 5005,
    ExamNotAssigned = 5006,
    ExamAlreadyCompleted = 5007,
    ExamHasNoQuestions = 5008,

    // 学习资料
    StudyMaterialNotFound = 6000,

    // 面试
    InterviewNotFound = 7000,
    InterviewAdminInvalid = 7001,
}

impl ErrorCode {
    /// 存储层返回的错误按 HTTP 语义归类时使用的默认码
    pub fn for_status(status: actix_web::http::StatusCode) -> Self {
        use actix_web::http::StatusCode;
        match status {
            StatusCode::BAD_REQUEST => ErrorCode::BadRequest,
            StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
            StatusCode::FORBIDDEN => ErrorCode::Forbidden,
            StatusCode::NOT_FOUND => ErrorCode::NotFound,
            StatusCode::CONFLICT => ErrorCode::Conflict,
            StatusCode::TOO_MANY_REQUESTS => ErrorCode::RateLimitExceeded,
            _ => ErrorCode::InternalServerError,
        }
    }
}
