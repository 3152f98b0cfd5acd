//! End-to-end tests: the real `HttpFetcher` against a local axum server
//! serving canned schedule and landing documents.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use nhl_goals::api::{Endpoints, HttpFetcher, fetch_all};
use nhl_goals::config::ApiConfig;
use nhl_goals::domain::GameId;
use nhl_goals::service::{BlockingGoalPipeline, GoalPipeline};

async fn schedule(Path(date): Path<String>) -> Response {
    match date.as_str() {
        "2024-01-21" => axum::Json(json!({
            "previousStartDate": "2024-01-14",
            "gameWeek": [
                { "date": "2024-01-21", "games": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] },
                { "date": "2024-01-22", "games": [{ "id": 4 }] },
            ],
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn landing(Path(id): Path<u64>) -> Response {
    let base = |scoring: Option<Value>| {
        let mut doc = json!({
            "id": id,
            "season": 20232024,
            "gameDate": "2024-01-21",
            "homeTeam": { "abbrev": "PHI" },
            "awayTeam": { "abbrev": "OTT" },
            "summary": {},
        });
        if let Some(scoring) = scoring {
            doc["summary"]["scoring"] = scoring;
        }
        doc
    };
    match id {
        1 => axum::Json(base(Some(json!([{
            "period": 1,
            "goals": [
                {
                    "period": 1,
                    "timeInPeriod": "11:57",
                    "name": { "default": "E. Zamula" },
                    "teamAbbrev": { "default": "PHI" },
                    "homeScore": 1,
                    "awayScore": 0,
                    "strength": "PP",
                },
                {
                    "period": 1,
                    "timeInPeriod": "16:40",
                    "name": { "default": "E. Zamula" },
                    "teamAbbrev": { "default": "PHI" },
                    "homeScore": 2,
                    "awayScore": 0,
                    "strength": "EV",
                },
            ],
        }]))))
        .into_response(),
        2 => axum::Json(base(None)).into_response(),
        4 => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/v1/schedule/{date}", get(schedule))
        .route("/v1/gamecenter/{id}/landing", get(landing));
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

fn http_pipeline(addr: SocketAddr) -> GoalPipeline<HttpFetcher> {
    let Ok(config) = ApiConfig::new(format!("http://{addr}/v1"), 5, "nhl-goals-tests") else {
        panic!("valid config");
    };
    let Ok(fetcher) = HttpFetcher::new(&config) else {
        panic!("client build failed");
    };
    GoalPipeline::new(fetcher, Endpoints::from_config(&config))
}

#[tokio::test]
async fn fetch_all_drops_not_found_and_non_json() {
    let addr = spawn_server().await;
    let pipeline = http_pipeline(addr);
    let endpoints = pipeline.endpoints();
    let urls = vec![
        endpoints.game_landing(GameId::new(1)),
        endpoints.game_landing(GameId::new(2)),
        endpoints.game_landing(GameId::new(3)),
        endpoints.game_landing(GameId::new(4)),
    ];

    let docs = fetch_all(pipeline.source(), urls).await;
    assert_eq!(docs.len(), 2);
    let ids: Vec<u64> = docs.iter().filter_map(|d| d["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn unreachable_host_yields_no_documents() {
    let pipeline = http_pipeline(SocketAddr::from(([127, 0, 0, 1], 9)));
    let docs = fetch_all(pipeline.source(), vec![pipeline.endpoints().schedule_now()]).await;
    assert!(docs.is_empty());
}

#[tokio::test]
async fn collects_goals_over_http() {
    let addr = spawn_server().await;
    let pipeline = http_pipeline(addr);

    let Ok(games) = pipeline.resolve_games(Some("2024-01-21"), None).await else {
        panic!("resolve failed");
    };
    let ids: Vec<u64> = games.iter().map(|g| g.game_id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let Ok(goals) = pipeline.collect_goals(Some("2024-01-21"), Some("2024-01-21")).await else {
        panic!("pipeline failed");
    };
    assert_eq!(goals.len(), 2);
    let (Some(first), Some(second)) = (goals.first(), goals.get(1)) else {
        panic!("expected two goals");
    };
    assert_eq!((first.home_score, first.away_score, first.strength.as_str()), (1, 0, "PP"));
    assert_eq!((second.home_score, second.away_score, second.strength.as_str()), (2, 0, "EV"));
    assert!(second.scores_follow(first));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_pipeline_works_inside_runtime() {
    let addr = spawn_server().await;
    let Ok(blocking) = BlockingGoalPipeline::new(http_pipeline(addr)) else {
        panic!("runtime build failed");
    };

    let Ok(goals) = blocking.collect_goals(Some("2024-01-21"), Some("2024-01-22")) else {
        panic!("blocking pipeline failed");
    };
    assert_eq!(goals.len(), 2);
    assert!(goals.iter().all(|g| g.game_id == GameId::new(1)));
}
