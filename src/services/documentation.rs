use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the courtside scoreboard.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::board_stream,
        crate::routes::scoreboard::initialize_match,
        crate::routes::scoreboard::get_board,
        crate::routes::scoreboard::score_point,
        crate::routes::scoreboard::undo,
        crate::routes::scoreboard::toggle_court,
        crate::routes::scoreboard::set_auto_court_change,
        crate::routes::scoreboard::reset_match,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::board::BoardView,
            crate::dto::board::TeamPanel,
            crate::dto::phase::VisibleMatchPhase,
            crate::dto::commands::InitializeMatchRequest,
            crate::dto::commands::AutoCourtChangeRequest,
            crate::dto::commands::ResetMatchRequest,
            crate::dto::sse::MatchWonEvent,
            crate::dto::sse::FeedbackCueEvent,
            crate::state::match_state::Team,
            crate::state::match_state::StartSide,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events streams"),
        (name = "match", description = "Scoreboard commands"),
    )
)]
pub struct ApiDoc;
