// ABOUTME: Reservation repository implementation
// ABOUTME: Lists a guest's reservations joined with the reserved properties

use super::ReservationRepository;
use crate::constants::{listing, tables};
use crate::database::QueryParams;
use crate::database_plugins::QueryExecutor;
use crate::models::Row;
use async_trait::async_trait;
use lightbnb_core::errors::StoreResult;

/// `ReservationRepository` over any executor
pub struct ReservationRepositoryImpl<E> {
    executor: E,
}

impl<E: QueryExecutor> ReservationRepositoryImpl<E> {
    /// Create a new `ReservationRepository` with the given executor
    #[must_use]
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: QueryExecutor> ReservationRepository for ReservationRepositoryImpl<E> {
    async fn get_all_reservations(
        &self,
        guest_id: i64,
        limit: Option<u32>,
    ) -> StoreResult<Vec<Row>> {
        let mut params = QueryParams::new();
        let guest = params.push(guest_id);
        let limit = params.push(limit.unwrap_or(listing::DEFAULT_RESERVATION_LIMIT));
        let query = params.finish(format!(
            "SELECT * FROM {reservations} JOIN {properties} \
             ON {reservations}.property_id = {properties}.id \
             WHERE guest_id = {guest} LIMIT {limit}",
            reservations = tables::RESERVATIONS,
            properties = tables::PROPERTIES,
        ));
        self.executor.run(&query).await
    }
}
