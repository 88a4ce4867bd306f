use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{academy_modules_service::AcademyModulesService, plans_service::PlansService},
};
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/academy-modules", get(get_academy_modules))
        .route("/api/v1/plans", get(get_plans))
}

async fn get_academy_modules(
    State(academy_modules_service): State<Arc<dyn AcademyModulesService>>,
    State(pagination_config): State<Arc<input::PaginationConfig>>,
    RawQuery(query): RawQuery,
) -> Result<Json<output::Page<output::AcademyModule>>, Error> {
    let request = input::parse_pagination(
        query.as_deref(),
        &pagination_config.academy_modules,
        pagination_config.max_rows,
    )?;

    let page = academy_modules_service.find_many(request).await?;

    Ok(Json(page))
}

async fn get_plans(
    State(plans_service): State<Arc<dyn PlansService>>,
    State(pagination_config): State<Arc<input::PaginationConfig>>,
    RawQuery(query): RawQuery,
) -> Result<Json<output::Page<output::Plan>>, Error> {
    let request = input::parse_pagination(
        query.as_deref(),
        &pagination_config.plans,
        pagination_config.max_rows,
    )?;

    let page = plans_service.find_many(request).await?;

    Ok(Json(page))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{AcademyModulesRepositoryImpl, PlansRepositoryImpl},
        service::{
            academy_modules_service::{AcademyModulesServiceImpl, MockAcademyModulesService},
            plans_service::{MockPlansService, PlansServiceImpl},
        },
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use query_state::OrderRule;
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    async fn seeded_state() -> ApplicationState {
        let academy_modules_repository =
            AcademyModulesRepositoryImpl::load(&data_file("academy_modules.json"))
                .await
                .unwrap();
        let plans_repository = PlansRepositoryImpl::load(&data_file("plans.json"))
            .await
            .unwrap();

        ApplicationState {
            academy_modules_service: Arc::new(AcademyModulesServiceImpl::new(Arc::new(
                academy_modules_repository,
            ))),
            plans_service: Arc::new(PlansServiceImpl::new(Arc::new(plans_repository))),
            pagination_config: Arc::new(input::PaginationConfig::new(10, 50)),
        }
    }

    async fn get(state: ApplicationState, uri: &str) -> Response {
        routing()
            .with_state(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn strings(page: &Value, field: &str) -> Vec<String> {
        page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item[field].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn academy_modules_default_order_is_newest_first() {
        let response = get(seeded_state().await, "/api/v1/academy-modules").await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        assert_eq!(page["total"], 6);
        assert_eq!(page["page"], 1);
        assert_eq!(page["rows"], 10);
        assert_eq!(
            strings(&page, "title"),
            [
                "Streaming Pipelines",
                "Query Planning",
                "Testing Web Applications",
                "Design Systems",
                "Async Services",
                "Ownership and Borrowing",
            ]
        );
    }

    #[tokio::test]
    async fn academy_modules_search_fans_out() {
        // "grace" matches teacher of two modules, no title
        let uri = "/api/v1/academy-modules?searchFilters=%7B%22title%22%3A%22grace%22%2C%22teacher%22%3A%22grace%22%7D";

        let response = get(seeded_state().await, uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        assert_eq!(page["total"], 2);
        assert_eq!(
            strings(&page, "title"),
            ["Streaming Pipelines", "Async Services"]
        );
    }

    #[tokio::test]
    async fn academy_modules_filters_ranges_and_pages() {
        let uri = "/api/v1/academy-modules\
            ?filters=%7B%22published%22%3Atrue%7D\
            &rangedFilters=%5B%7B%22key%22%3A%22createdAt%22%2C%22start%22%3A%222024-01-01%22%2C%22end%22%3A%222024-02-29%22%7D%5D\
            &orderKey=title&orderRule=asc&page=2&rows=2";

        let response = get(seeded_state().await, uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        assert_eq!(page["total"], 3);
        assert_eq!(page["page"], 2);
        assert_eq!(page["rows"], 2);
        assert_eq!(strings(&page, "title"), ["Testing Web Applications"]);
    }

    #[tokio::test]
    async fn plans_search_and_order() {
        let uri = "/api/v1/plans?searchFilters=%7B%22name%22%3A%22starter%22%7D&orderKey=price&orderRule=desc";

        let response = get(seeded_state().await, uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        assert_eq!(strings(&page, "name"), ["Starter Yearly", "Starter"]);
        assert_eq!(page["items"][0]["interval"], "yearly");
    }

    #[tokio::test]
    async fn malformed_query_is_unprocessable() {
        for uri in [
            "/api/v1/plans?filters=%7Bbroken",
            "/api/v1/plans?page=0",
            "/api/v1/plans?orderRule=upwards",
            "/api/v1/plans?rows=51",
            "/api/v1/plans?orderKey=password",
            "/api/v1/academy-modules?filters=%7B%22lessons%22%3A%22many%22%7D",
        ] {
            let response = get(seeded_state().await, uri).await;

            assert_eq!(
                response.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "uri: {uri}"
            );
        }
    }

    #[tokio::test]
    async fn handler_forwards_parsed_request() {
        let mut academy_modules_service = MockAcademyModulesService::new();
        academy_modules_service
            .expect_find_many()
            .withf(|request| {
                request.page == 3
                    && request.rows == 10
                    && request.order_key.as_deref() == Some("createdAt")
                    && request.order_rule == Some(OrderRule::Desc)
            })
            .times(1)
            .returning(|request| {
                Ok(output::Page {
                    items: Vec::new(),
                    total: 0,
                    page: request.page,
                    rows: request.rows,
                })
            });
        let state = ApplicationState {
            academy_modules_service: Arc::new(academy_modules_service),
            plans_service: Arc::new(MockPlansService::new()),
            pagination_config: Arc::new(input::PaginationConfig::new(10, 50)),
        };

        let response = get(state, "/api/v1/academy-modules?page=3").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["page"], 3);
    }
}
