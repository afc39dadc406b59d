//! HTTP handlers for venue, slot, and reservation endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    CancelReservationResponse, ListSlotsParams, RegistrationResponse, ReserveSlotRequest,
    ReserveSlotResponse, SlotResponse, VenueResponse,
};
use crate::adapters::http::auth::CurrentMember;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::booking::{
    CancelReservationCommand, CancelReservationHandler, ListRegistrationsHandler,
    ListRegistrationsQuery, ListSlotsHandler, ListSlotsQuery, ListVenuesHandler,
    ReserveSlotCommand, ReserveSlotHandler,
};
use crate::domain::foundation::RegistrationId;
use crate::ports::SlotRepository;

/// Shared state for booking endpoints.
#[derive(Clone)]
pub struct BookingAppState {
    pub slots: Arc<dyn SlotRepository>,
}

impl BookingAppState {
    /// Create handlers on demand from the shared state.
    pub fn list_venues_handler(&self) -> ListVenuesHandler {
        ListVenuesHandler::new(self.slots.clone())
    }

    pub fn list_slots_handler(&self) -> ListSlotsHandler {
        ListSlotsHandler::new(self.slots.clone())
    }

    pub fn reserve_slot_handler(&self) -> ReserveSlotHandler {
        ReserveSlotHandler::new(self.slots.clone())
    }

    pub fn cancel_reservation_handler(&self) -> CancelReservationHandler {
        CancelReservationHandler::new(self.slots.clone())
    }

    pub fn list_registrations_handler(&self) -> ListRegistrationsHandler {
        ListRegistrationsHandler::new(self.slots.clone())
    }
}

/// GET /api/bookings/venues - venue reference data
pub async fn list_venues(
    State(state): State<BookingAppState>,
) -> Result<Json<Vec<VenueResponse>>, ApiError> {
    let result = state.list_venues_handler().handle().await?;

    Ok(Json(result.venues.into_iter().map(Into::into).collect()))
}

/// GET /api/bookings/slots - upcoming slots inside a date window
pub async fn list_slots(
    State(state): State<BookingAppState>,
    Query(params): Query<ListSlotsParams>,
) -> Result<Json<Vec<SlotResponse>>, ApiError> {
    let query = match params.window_days {
        Some(days) => ListSlotsQuery { window_days: days },
        None => ListSlotsQuery::default(),
    };
    let result = state.list_slots_handler().handle(query).await?;

    Ok(Json(result.slots.into_iter().map(Into::into).collect()))
}

/// POST /api/bookings/reservations - reserve one seat in a slot
pub async fn reserve_slot(
    State(state): State<BookingAppState>,
    CurrentMember(member): CurrentMember,
    Json(request): Json<ReserveSlotRequest>,
) -> Result<(StatusCode, Json<ReserveSlotResponse>), ApiError> {
    let result = state
        .reserve_slot_handler()
        .handle(ReserveSlotCommand {
            member,
            slot_id: request.slot_id,
        })
        .await?;

    let response = ReserveSlotResponse {
        registration: result.registration.into(),
        slot: result.slot.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/bookings/reservations - the caller's reservations
pub async fn list_registrations(
    State(state): State<BookingAppState>,
    CurrentMember(member): CurrentMember,
) -> Result<Json<Vec<RegistrationResponse>>, ApiError> {
    let result = state
        .list_registrations_handler()
        .handle(ListRegistrationsQuery { member })
        .await?;

    Ok(Json(
        result.registrations.into_iter().map(Into::into).collect(),
    ))
}

/// DELETE /api/bookings/reservations/:id - cancel one of the caller's
/// reservations
pub async fn cancel_reservation(
    State(state): State<BookingAppState>,
    CurrentMember(member): CurrentMember,
    Path(registration_id): Path<RegistrationId>,
) -> Result<Json<CancelReservationResponse>, ApiError> {
    let result = state
        .cancel_reservation_handler()
        .handle(CancelReservationCommand {
            member,
            registration_id,
        })
        .await?;

    Ok(Json(CancelReservationResponse {
        slot: result.slot.into(),
    }))
}
