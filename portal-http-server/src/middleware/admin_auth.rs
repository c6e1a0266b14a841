use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use portal_lib::core::auth::{bearer_token, decode_token};

/// Guards the lookup-scaffold routes: every request under the admin
/// scope must carry a bearer token whose role is Admin.
pub struct AdminAuth;

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthMiddleware { service }))
    }
}

pub struct AdminAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method();
        let path = req.path();
        let request_info = format!("{method} {path}");

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|hv| hv.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_string);

        let token = match token {
            Some(token) => token,
            None => {
                let err = actix_web::error::ErrorUnauthorized("Missing bearer token");
                log::info!(
                    "{} {}",
                    request_info,
                    err.as_response_error().status_code().as_u16()
                );
                return Box::pin(async { Err(err) });
            }
        };

        let claims = match decode_token(&token) {
            Ok(claims) => claims,
            Err(_) => {
                let err = actix_web::error::ErrorUnauthorized("Invalid or expired token");
                log::info!(
                    "{} {}",
                    request_info,
                    err.as_response_error().status_code().as_u16()
                );
                return Box::pin(async { Err(err) });
            }
        };

        if !claims.role.is_admin() {
            let err = actix_web::error::ErrorForbidden("Admin role required");
            log::info!(
                "{} {}",
                request_info,
                err.as_response_error().status_code().as_u16()
            );
            return Box::pin(async { Err(err) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}
