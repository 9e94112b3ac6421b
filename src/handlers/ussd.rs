use axum::{
    Form,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::CareError;
use crate::menu::{ResolveCtx, resolve};
use crate::router::CareState;
use crate::types::{Trail, UssdRequest};

/// POST /ussd — the gateway callback, one call per session step.
///
/// Order matters: record effects commit first, then notifications fire.
/// A notifier failure is logged and swallowed so the subscriber still gets
/// the screen their booking already committed for; a store failure aborts
/// with a 500 since no menu state can be trusted without it.
pub async fn ussd_callback(
    State(state): State<CareState>,
    Form(req): Form<UssdRequest>,
) -> Result<Response, CareError> {
    let trail = Trail::parse(&req.text);
    let schedule = state.storage.vaccine_schedule().await?;
    let resolved = resolve(&trail, &ResolveCtx { schedule: &schedule });

    state
        .storage
        .apply_effects(&req.phone_number, resolved.effects())
        .await?;

    let recipients = [req.phone_number.clone()];
    for message in resolved.notifications() {
        if let Err(e) = state.notifier.send(message, &recipients).await {
            warn!(phone = %req.phone_number, error = %e, "SMS dispatch failed");
        }
    }

    info!(
        session = %req.session_id,
        trail = %trail,
        terminal = resolved.is_terminal(),
        "resolved USSD step"
    );
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        resolved.render(),
    )
        .into_response())
}
