/*!
 * 登录与注册的限流中间件
 *
 * 固定窗口计数：同一策略下同一客户端 IP 在窗口内最多放行 `max_requests` 次，
 * 超出后返回 429，`Retry-After` 为当前窗口剩余秒数。
 *
 * ```rust,ignore
 * web::scope("/api/admin").service(
 *     web::resource("/login")
 *         .wrap(RateLimit::login())
 *         .route(web::post().to(admin_login)),
 * )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 键: `{策略}:{ip}`，值: 窗口开始时间与已放行次数
static WINDOWS: Lazy<Cache<String, Window>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

enum Verdict {
    Allowed,
    Limited { retry_after: u64 },
}

#[derive(Clone)]
pub struct RateLimit {
    policy: &'static str,
    max_requests: u32,
    window: Duration,
}

impl RateLimit {
    pub fn new(policy: &'static str, max_requests: u32, window_secs: u64) -> Self {
        Self {
            policy,
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    /// 管理员与候选人登录：5 次/分钟/IP
    pub fn login() -> Self {
        Self::new("login", 5, 60)
    }

    /// 注册：3 次/分钟/IP
    pub fn register() -> Self {
        Self::new("register", 3, 60)
    }

    async fn check(&self, client: &str) -> Verdict {
        let key = format!("{}:{}", self.policy, client);
        let now = Instant::now();

        let window = match WINDOWS.get(&key).await {
            Some(w) if now.duration_since(w.started) < self.window => w,
            _ => Window {
                started: now,
                count: 0,
            },
        };

        if window.count >= self.max_requests {
            let elapsed = now.duration_since(window.started);
            let remaining = self.window.saturating_sub(elapsed);
            // 向上取整，至少 1 秒
            let retry_after = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            return Verdict::Limited {
                retry_after: retry_after.max(1),
            };
        }

        WINDOWS
            .insert(
                key,
                Window {
                    count: window.count + 1,
                    ..window
                },
            )
            .await;
        Verdict::Allowed
    }
}

/// 优先使用连接信息中的真实地址，其次是代理头里的第一个合法 IP
fn client_ip(req: &ServiceRequest) -> String {
    let info = req.connection_info();
    if let Some(ip) = info.realip_remote_addr().filter(|ip| is_valid_ip(ip)) {
        return ip.to_string();
    }

    ["X-Forwarded-For", "X-Real-IP"]
        .iter()
        .filter_map(|name| req.headers().get(*name))
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|ip| is_valid_ip(ip))
        .map(str::to_string)
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

fn too_many_requests(limit: u32, retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Limit", limit.to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: Rc::new(self.clone()),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: Rc<RateLimit>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let client = client_ip(&req);
            match limit.check(&client).await {
                Verdict::Allowed => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Verdict::Limited { retry_after } => {
                    warn!(
                        "Rate limit '{}' exceeded for {} ({} per {}s)",
                        limit.policy,
                        client,
                        limit.max_requests,
                        limit.window.as_secs()
                    );
                    Ok(req.into_response(
                        too_many_requests(limit.max_requests, retry_after).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test, web};

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!((login.policy, login.max_requests), ("login", 5));
        assert_eq!(login.window, Duration::from_secs(60));

        let register = RateLimit::register();
        assert_eq!((register.policy, register.max_requests), ("register", 3));
    }

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("10.0.0.1"));
        assert!(is_valid_ip("::1"));
        assert!(!is_valid_ip("not-an-ip"));
    }

    #[tokio::test]
    async fn test_policies_count_separately() {
        let a = RateLimit::new("test_policy_a", 1, 60);
        let b = RateLimit::new("test_policy_b", 1, 60);

        assert!(matches!(a.check("10.1.1.1").await, Verdict::Allowed));
        assert!(matches!(b.check("10.1.1.1").await, Verdict::Allowed));
        assert!(matches!(a.check("10.1.1.2").await, Verdict::Allowed));
        assert!(matches!(
            a.check("10.1.1.1").await,
            Verdict::Limited { retry_after } if (1..=60).contains(&retry_after)
        ));
    }

    #[actix_web::test]
    async fn test_requests_over_limit_are_rejected() {
        let app = actix_test::init_service(App::new().route(
            "/limited",
            web::post()
                .to(ok_handler)
                .wrap(RateLimit::new("test_over_limit", 2, 60)),
        ))
        .await;

        for _ in 0..2 {
            let req = actix_test::TestRequest::post().uri("/limited").to_request();
            assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = actix_test::TestRequest::post().uri("/limited").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get("X-RateLimit-Limit").unwrap(), "2");
        let retry_after: u64 = resp
            .headers()
            .get("Retry-After")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=60).contains(&retry_after));
    }
}
