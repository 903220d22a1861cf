use std::sync::Arc;

use salvo::{
    catcher::Catcher,
    cors::{Any, Cors},
    http::{Method, ResBody},
    oapi::{Info, License},
    prelude::*,
};

use crate::{
    core::database::db::DbPool,
    features::member::{
        repository::MemberRepositoryImpl,
        router::{SharedMemberService, get_member_router},
        service::MemberServiceImpl,
    },
};

#[endpoint(tags("system"))]
async fn health_check(res: &mut Response) {
    res.render("JPA Shop member API");
}

pub fn get_salvo_service(pool: DbPool) -> Service {
    let member_repository = MemberRepositoryImpl::new(pool);
    let member_service: SharedMemberService =
        Arc::new(MemberServiceImpl::new(member_repository));

    build_service(member_service)
}

/// Assembles routes, middleware and API docs around an already constructed
/// member service.
pub fn build_service(member_service: SharedMemberService) -> Service {
    let health_router = Router::with_path("health-check").get(health_check);

    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(vec!["Content-Type"])
        .into_handler();

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(affix_state::inject(member_service))
        .hoop(CatchPanic::new())
        .hoop(Compression::new().min_length(1024))
        .push(get_member_router())
        .push(health_router);

    let doc_info = Info::new("JPA Shop Member API", "2.0.0")
        .description("Member registration, listing and renaming")
        .license(License::new("MIT"));
    let doc = OpenApi::new("JPA Shop Member API", "2.0.0")
        .info(doc_info)
        .merge_router(&router);

    let router = Router::new()
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
        .push(router);

    Service::new(router)
        .hoop(cors)
        .catcher(Catcher::default().hoop(handle404).hoop(handle_bad_request))
}

#[handler]
async fn handle404(res: &mut Response, ctrl: &mut FlowCtrl) {
    if StatusCode::NOT_FOUND == res.status_code.unwrap_or(StatusCode::NOT_FOUND) {
        res.render("JPA Shop Not Found");
        ctrl.skip_rest();
    }
}

/// Renders body and path parse failures with the same `{"message"}` shape as
/// validation errors.
#[handler]
async fn handle_bad_request(res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code != Some(StatusCode::BAD_REQUEST) {
        return;
    }

    let message = match &res.body {
        ResBody::Error(err) => err.brief.clone(),
        _ => return,
    };

    res.body = ResBody::None;
    res.render(Json(serde_json::json!({ "message": message })));
    ctrl.skip_rest();
}
