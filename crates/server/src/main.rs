// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use gaffer::TransitionPolicy;
use gaffer_api::{
    ApiError, CreateMonthRequest, CupOverviewResponse, EndSeasonRequest, EndSeasonResponse,
    FixtureDto, FixtureFilter, FixtureUploadRequest, LeagueTableResponse, MonthResolutionResponse,
    RegisterTeamRequest, RegisterTeamResponse, ScoreUploadRequest, TeamProfileResponse,
    UpdateTeamRequest, UploadOutcome,
};
use gaffer_domain::{CupCompetition, CupGroupTeam, Division, ManagerMonth, ManagerOfTheMonth};
use gaffer_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Gaffer Server - HTTP server for the fantasy league administration
/// system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a mutex: one request at a time
/// touches the store, matching the system's execution model.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error wrapper translating `ApiError` into HTTP responses.
struct HttpError(ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// A season over the wire, dates formatted `yyyy-mm-dd`.
#[derive(Debug, Serialize, Deserialize)]
struct SeasonDto {
    season_id: i64,
    name: String,
    start_date: String,
    end_date: String,
    is_current: bool,
}

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

fn season_to_dto(season: &gaffer_domain::Season) -> Result<SeasonDto, HttpError> {
    let format = |date: time::Date| {
        date.format(DATE_FORMAT).map_err(|e| {
            HttpError(ApiError::Internal {
                message: format!("Unformattable date: {e}"),
            })
        })
    };
    Ok(SeasonDto {
        season_id: season.season_id.unwrap_or_default(),
        name: season.name.clone(),
        start_date: format(season.start_date)?,
        end_date: format(season.end_date)?,
        is_current: season.is_current,
    })
}

/// Query parameters for fixture listings.
#[derive(Debug, Deserialize)]
struct FixtureQuery {
    played: Option<bool>,
    gameweek: Option<i32>,
    division: Option<i64>,
    team: Option<i64>,
}

async fn handle_list_seasons(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<SeasonDto>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let seasons = persistence.seasons().map_err(ApiError::from)?;
    drop(persistence);
    let dtos = seasons
        .iter()
        .map(season_to_dto)
        .collect::<Result<Vec<SeasonDto>, HttpError>>()?;
    Ok(Json(dtos))
}

async fn handle_current_season(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SeasonDto>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let season = persistence.current_season().map_err(ApiError::from)?;
    drop(persistence);
    Ok(Json(season_to_dto(&season)?))
}

async fn handle_divisions(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<Division>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let divisions = persistence.divisions(season_id).map_err(ApiError::from)?;
    Ok(Json(divisions))
}

async fn handle_league_table(
    AxumState(app_state): AxumState<AppState>,
    Path((season_id, division_id)): Path<(i64, i64)>,
) -> Result<Json<LeagueTableResponse>, HttpError> {
    info!(season_id, division_id, "Handling league_table request");
    let mut persistence = app_state.persistence.lock().await;
    let table = gaffer_api::league_table(&mut persistence, season_id, division_id)?;
    Ok(Json(table))
}

async fn handle_list_fixtures(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
    Query(query): Query<FixtureQuery>,
) -> Result<Json<Vec<FixtureDto>>, HttpError> {
    let filter = FixtureFilter {
        played: query.played,
        gameweek: query.gameweek,
        division_id: query.division,
        team_id: query.team,
    };
    let mut persistence = app_state.persistence.lock().await;
    let fixtures = gaffer_api::list_fixtures(&mut persistence, season_id, filter)?;
    Ok(Json(fixtures))
}

async fn handle_register_team(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<RegisterTeamRequest>,
) -> Result<Json<RegisterTeamResponse>, HttpError> {
    info!(name = %request.name, "Handling register_team request");
    let mut persistence = app_state.persistence.lock().await;
    let response = gaffer_api::register_team(&mut persistence, &request)?;
    Ok(Json(response))
}

async fn handle_team_profile(
    AxumState(app_state): AxumState<AppState>,
    Path((season_id, team_id)): Path<(i64, i64)>,
) -> Result<Json<TeamProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let profile = gaffer_api::team_profile(&mut persistence, season_id, team_id)?;
    Ok(Json(profile))
}

async fn handle_upload_scores(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ScoreUploadRequest>,
) -> Result<Json<UploadOutcome>, HttpError> {
    info!(
        season_id = request.season_id,
        gameweek_id = request.gameweek_id,
        "Handling upload_scores request"
    );
    let mut persistence = app_state.persistence.lock().await;
    let outcome = gaffer_api::upload_scores(&mut persistence, &request)?;
    Ok(Json(outcome))
}

async fn handle_upload_fixtures(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<FixtureUploadRequest>,
) -> Result<Json<UploadOutcome>, HttpError> {
    info!(
        season_id = request.season_id,
        "Handling upload_fixtures request"
    );
    let mut persistence = app_state.persistence.lock().await;
    let outcome = gaffer_api::upload_fixtures(&mut persistence, &request)?;
    Ok(Json(outcome))
}

async fn handle_activate_season(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(season_id, "Handling activate_season request");
    let mut persistence = app_state.persistence.lock().await;
    persistence
        .set_current_season(season_id)
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn handle_activate_gameweek(
    AxumState(app_state): AxumState<AppState>,
    Path((season_id, gameweek_id)): Path<(i64, i64)>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    persistence
        .set_current_gameweek(season_id, gameweek_id)
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn handle_update_team(
    AxumState(app_state): AxumState<AppState>,
    Path(team_id): Path<i64>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    gaffer_api::update_team(&mut persistence, team_id, &request)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn handle_list_cups(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<CupCompetition>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let cups = persistence.cups(season_id).map_err(ApiError::from)?;
    Ok(Json(cups))
}

async fn handle_add_group_team(
    AxumState(app_state): AxumState<AppState>,
    Path((cup_id, group_id, team_id)): Path<(i64, i64, i64)>,
) -> Result<Json<CupGroupTeam>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let entry = gaffer_api::add_group_team(&mut persistence, cup_id, group_id, team_id)?;
    Ok(Json(entry))
}

async fn handle_generate_group_matches(
    AxumState(app_state): AxumState<AppState>,
    Path((_cup_id, group_id)): Path<(i64, i64)>,
) -> Result<Json<usize>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let created = gaffer_api::generate_group_matches(&mut persistence, group_id)?;
    Ok(Json(created))
}

async fn handle_month_awards(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<ManagerOfTheMonth>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let awards = persistence.month_awards(season_id).map_err(ApiError::from)?;
    Ok(Json(awards))
}

async fn handle_cup_overview(
    AxumState(app_state): AxumState<AppState>,
    Path(cup_id): Path<i64>,
) -> Result<Json<CupOverviewResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let overview = gaffer_api::cup_overview(&mut persistence, cup_id)?;
    Ok(Json(overview))
}

async fn handle_list_months(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<Vec<ManagerMonth>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let months = persistence
        .manager_months(season_id)
        .map_err(ApiError::from)?;
    Ok(Json(months))
}

async fn handle_create_month(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<CreateMonthRequest>,
) -> Result<Json<ManagerMonth>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let month = gaffer_api::create_manager_month(&mut persistence, &request)?;
    Ok(Json(month))
}

async fn handle_resolve_month(
    AxumState(app_state): AxumState<AppState>,
    Path(month_id): Path<i64>,
) -> Result<Json<MonthResolutionResponse>, HttpError> {
    info!(month_id, "Handling resolve_month request");
    let mut persistence = app_state.persistence.lock().await;
    let resolution = gaffer_api::resolve_manager_month(&mut persistence, month_id)?;
    Ok(Json(resolution))
}

async fn handle_end_season(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<EndSeasonRequest>,
) -> Result<Json<EndSeasonResponse>, HttpError> {
    info!(season_id = request.season_id, "Handling end_season request");
    let mut persistence = app_state.persistence.lock().await;
    let outcome =
        gaffer_api::end_season(&mut persistence, &request, &TransitionPolicy::default())?;
    Ok(Json(outcome))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/seasons", get(handle_list_seasons))
        .route("/seasons/current", get(handle_current_season))
        .route("/seasons/{season_id}/divisions", get(handle_divisions))
        .route(
            "/league_table/{season_id}/{division_id}",
            get(handle_league_table),
        )
        .route("/fixtures/{season_id}", get(handle_list_fixtures))
        .route(
            "/seasons/{season_id}/activate",
            post(handle_activate_season),
        )
        .route(
            "/seasons/{season_id}/gameweeks/{gameweek_id}/activate",
            post(handle_activate_gameweek),
        )
        .route("/teams/register", post(handle_register_team))
        .route("/teams/{team_id}/update", post(handle_update_team))
        .route(
            "/teams/{season_id}/{team_id}/profile",
            get(handle_team_profile),
        )
        .route("/scores/upload", post(handle_upload_scores))
        .route("/fixtures/upload", post(handle_upload_fixtures))
        .route("/seasons/{season_id}/cups", get(handle_list_cups))
        .route("/cups/{cup_id}", get(handle_cup_overview))
        .route(
            "/cups/{cup_id}/groups/{group_id}/teams/{team_id}",
            post(handle_add_group_team),
        )
        .route(
            "/cups/{cup_id}/groups/{group_id}/matches/generate",
            post(handle_generate_group_matches),
        )
        .route("/motm_winners/{season_id}", get(handle_month_awards))
        .route("/manager_months/{season_id}", get(handle_list_months))
        .route("/manager_months", post(handle_create_month))
        .route(
            "/manager_months/{month_id}/resolve",
            post(handle_resolve_month),
        )
        .route("/seasons/end", post(handle_end_season))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Gaffer Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode as HttpStatusCode};
    use gaffer_persistence::SeasonSpec;
    use time::macros::date;
    use tower::ServiceExt;

    #[allow(clippy::expect_used)]
    fn test_state() -> AppState {
        let persistence =
            Persistence::new_in_memory().expect("in-memory database should initialize");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    #[allow(clippy::expect_used)]
    async fn seed_season(state: &AppState) -> i64 {
        let mut persistence = state.persistence.lock().await;
        let season = persistence
            .create_season(&SeasonSpec {
                name: String::from("2025/26"),
                start_date: date!(2025 - 08 - 01),
                end_date: date!(2026 - 05 - 31),
            })
            .expect("season should be created");
        let season_id = season.season_id.expect("created season has an id");
        persistence
            .set_current_season(season_id)
            .expect("season should become current");
        season_id
    }

    #[allow(clippy::expect_used)]
    #[tokio::test]
    async fn seasons_endpoint_lists_seeded_seasons() {
        let state = test_state();
        seed_season(&state).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/seasons")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let seasons: Vec<SeasonDto> =
            serde_json::from_slice(&bytes).expect("body should deserialize");
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].name, "2025/26");
        assert_eq!(seasons[0].start_date, "2025-08-01");
        assert!(seasons[0].is_current);
    }

    #[allow(clippy::expect_used)]
    #[tokio::test]
    async fn current_season_endpoint_404s_when_none_is_set() {
        let app = build_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/seasons/current")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[allow(clippy::expect_used)]
    #[tokio::test]
    async fn league_table_endpoint_404s_for_unknown_division() {
        let state = test_state();
        let season_id = seed_season(&state).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/league_table/{season_id}/999"))
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[allow(clippy::expect_used)]
    #[tokio::test]
    async fn register_team_round_trips_through_http() {
        let state = test_state();
        let season_id = seed_season(&state).await;
        {
            let mut persistence = state.persistence.lock().await;
            persistence
                .create_division(season_id, gaffer_domain::Division::PREMIER_LEAGUE)
                .expect("division should be created");
        }
        let app = build_router(state);

        let request_body = serde_json::json!({
            "season_id": season_id,
            "division_id": 1,
            "name": "Dave's XI",
            "manager_name": "Dave",
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/teams/register")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let registered: RegisterTeamResponse =
            serde_json::from_slice(&bytes).expect("body should deserialize");
        assert_eq!(registered.name, "Dave's XI");
    }
}
