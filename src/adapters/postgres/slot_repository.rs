//! PostgreSQL implementation of SlotRepository.
//!
//! The commit operations take a row lock on the slot (`SELECT ... FOR
//! UPDATE`), re-validate capacity under the lock, and apply the counter
//! update and the registration row change in the same transaction.

use crate::domain::foundation::{
    DomainError, ErrorCode, MemberAccount, RegistrationId, SlotId, Timestamp, VenueId,
};
use crate::domain::venue::{Registration, Venue, VenueSlot};
use crate::ports::SlotRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SlotRepository port.
pub struct PostgresSlotRepository {
    pool: PgPool,
}

impl PostgresSlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: Uuid,
    name: String,
    address: String,
    fee_cents: i64,
    capacity: i32,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue {
            id: VenueId::from_uuid(row.id),
            name: row.name,
            address: row.address,
            fee_cents: row.fee_cents,
            capacity: row.capacity,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SlotRow {
    id: Uuid,
    venue_id: Uuid,
    date: NaiveDate,
    time_slot: String,
    fee_cents: i64,
    capacity: i32,
    registered_count: i32,
    remaining_slots: i32,
    version: i32,
}

impl From<SlotRow> for VenueSlot {
    fn from(row: SlotRow) -> Self {
        VenueSlot {
            id: SlotId::from_uuid(row.id),
            venue_id: VenueId::from_uuid(row.venue_id),
            date: row.date,
            time_slot: row.time_slot,
            fee_cents: row.fee_cents,
            capacity: row.capacity,
            registered_count: row.registered_count,
            remaining_slots: row.remaining_slots,
            version: row.version,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    member_account: String,
    slot_id: Uuid,
    venue_id: Uuid,
    date: NaiveDate,
    time_slot: String,
    registered_at: DateTime<Utc>,
    paid: bool,
    payment_date: Option<DateTime<Utc>>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration {
            id: RegistrationId::from_uuid(row.id),
            member_account: MemberAccount::new(row.member_account).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid account: {}", e))
            })?,
            slot_id: SlotId::from_uuid(row.slot_id),
            venue_id: VenueId::from_uuid(row.venue_id),
            date: row.date,
            time_slot: row.time_slot,
            registered_at: Timestamp::from_datetime(row.registered_at),
            paid: row.paid,
            payment_date: row.payment_date.map(Timestamp::from_datetime),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

const SLOT_COLUMNS: &str = "id, venue_id, date, time_slot, fee_cents, capacity, \
     registered_count, remaining_slots, version";

#[async_trait]
impl SlotRepository for PostgresSlotRepository {
    async fn list_venues(&self) -> Result<Vec<Venue>, DomainError> {
        let rows: Vec<VenueRow> = sqlx::query_as(
            "SELECT id, name, address, fee_cents, capacity FROM venues ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list venues", e))?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn find_venue_by_name(&self, name: &str) -> Result<Option<Venue>, DomainError> {
        let row: Option<VenueRow> = sqlx::query_as(
            "SELECT id, name, address, fee_cents, capacity FROM venues WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load venue", e))?;

        Ok(row.map(Venue::from))
    }

    async fn find_slot(&self, id: &SlotId) -> Result<Option<VenueSlot>, DomainError> {
        let row: Option<SlotRow> = sqlx::query_as(&format!(
            "SELECT {} FROM venue_slots WHERE id = $1",
            SLOT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load slot", e))?;

        Ok(row.map(VenueSlot::from))
    }

    async fn list_slots(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VenueSlot>, DomainError> {
        let rows: Vec<SlotRow> = sqlx::query_as(&format!(
            "SELECT {} FROM venue_slots WHERE date >= $1 AND date <= $2 \
             ORDER BY date, time_slot",
            SLOT_COLUMNS
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list slots", e))?;

        Ok(rows.into_iter().map(VenueSlot::from).collect())
    }

    async fn find_registration(
        &self,
        id: &RegistrationId,
        account: &MemberAccount,
    ) -> Result<Option<Registration>, DomainError> {
        let row: Option<RegistrationRow> = sqlx::query_as(
            r#"
            SELECT id, member_account, slot_id, venue_id, date, time_slot,
                   registered_at, paid, payment_date
            FROM registrations WHERE id = $1 AND member_account = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(account.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load registration", e))?;

        row.map(Registration::try_from).transpose()
    }

    async fn list_registrations(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<Registration>, DomainError> {
        let rows: Vec<RegistrationRow> = sqlx::query_as(
            r#"
            SELECT id, member_account, slot_id, venue_id, date, time_slot,
                   registered_at, paid, payment_date
            FROM registrations WHERE member_account = $1
            ORDER BY registered_at DESC
            "#,
        )
        .bind(account.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list registrations", e))?;

        rows.into_iter().map(Registration::try_from).collect()
    }

    async fn commit_reservation(
        &self,
        slot: &VenueSlot,
        registration: &Registration,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // Lock the slot row and re-validate against the stored counters.
        let remaining: Option<(i32,)> =
            sqlx::query_as("SELECT remaining_slots FROM venue_slots WHERE id = $1 FOR UPDATE")
                .bind(slot.id.as_uuid())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to lock slot", e))?;

        match remaining {
            None => {
                return Err(DomainError::new(ErrorCode::SlotNotFound, "Slot not found"));
            }
            Some((n,)) if n <= 0 => {
                return Err(DomainError::new(
                    ErrorCode::SlotFull,
                    "This slot is fully booked",
                ));
            }
            Some(_) => {}
        }

        sqlx::query(
            r#"
            UPDATE venue_slots SET
                registered_count = registered_count + 1,
                remaining_slots = remaining_slots - 1,
                version = version + 1
            WHERE id = $1
            "#,
        )
        .bind(slot.id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update slot counters", e))?;

        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, member_account, slot_id, venue_id, date, time_slot,
                registered_at, paid, payment_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(registration.id.as_uuid())
        .bind(registration.member_account.as_str())
        .bind(registration.slot_id.as_uuid())
        .bind(registration.venue_id.as_uuid())
        .bind(registration.date)
        .bind(&registration.time_slot)
        .bind(registration.registered_at.as_datetime())
        .bind(registration.paid)
        .bind(registration.payment_date.map(|t| *t.as_datetime()))
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to insert registration", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit reservation", e))
    }

    async fn commit_cancellation(
        &self,
        slot: &VenueSlot,
        registration_id: &RegistrationId,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // The row delete is the serialization point: only one cancel of a
        // given registration can see rows_affected == 1.
        let deleted = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(registration_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete registration", e))?;
        if deleted.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                "Registration not found",
            ));
        }

        let updated = sqlx::query(
            r#"
            UPDATE venue_slots SET
                registered_count = registered_count - 1,
                remaining_slots = remaining_slots + 1,
                version = version + 1
            WHERE id = $1 AND registered_count > 0
            "#,
        )
        .bind(slot.id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update slot counters", e))?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Slot counter underflow",
            ));
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit cancellation", e))
    }
}
