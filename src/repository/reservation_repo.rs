use crate::model::reservation::{NewReservation, Reservation, RESERVATION_STATUS_CONFIRMED};
use crate::repository::insert::insert_with_fresh_id;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, error};

#[async_trait]
pub trait ReservationRepository : Send + Sync {
    async fn create(&self, reservation: NewReservation) -> RepositoryResult<Reservation>;
    async fn list(&self) -> RepositoryResult<Vec<Reservation>>;
}

pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteReservationRepository { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {

    // Slots are not checked against existing bookings.
    #[tracing::instrument(skip(self, reservation), fields(date = %reservation.date, time = %reservation.time))]
    async fn create(&self, reservation: NewReservation) -> RepositoryResult<Reservation> {
        info!(reservation = ?reservation, "Creating new reservation");
        let pool = &self.pool;
        let reservation = &reservation;
        let created_at = Utc::now();

        let result = insert_with_fresh_id("reservations", |id| async move {
            sqlx::query(
                r#"
                INSERT INTO reservations (id, client_name, client_email, client_phone,
                                          service_type, "date", "time", description,
                                          status, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&reservation.client_name)
            .bind(&reservation.client_email)
            .bind(&reservation.client_phone)
            .bind(&reservation.service_type)
            .bind(&reservation.date)
            .bind(&reservation.time)
            .bind(&reservation.description)
            .bind(RESERVATION_STATUS_CONFIRMED)
            .bind(created_at)
            .execute(pool)
            .await?;

            Ok::<Reservation, RepositoryError>(Reservation {
                id,
                client_name: reservation.client_name.clone(),
                client_email: reservation.client_email.clone(),
                client_phone: reservation.client_phone.clone(),
                service_type: reservation.service_type.clone(),
                date: reservation.date.clone(),
                time: reservation.time.clone(),
                description: reservation.description.clone(),
                status: RESERVATION_STATUS_CONFIRMED.to_string(),
                created_at,
            })
        })
        .await;

        match result {
            Ok(created) => {
                info!(id = %created.id, "Reservation created successfully");
                Ok(created)
            },
            Err(e) => {
                error!("Failed to create reservation: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Reservation>> {
        info!("Listing reservations");
        let result = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, client_name, client_email, client_phone, service_type,
                   "date", "time", description, status, created_at
            FROM reservations
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(reservations) => {
                info!("Fetched {} reservations", reservations.len());
                Ok(reservations)
            },
            Err(e) => {
                error!("Failed to list reservations: {}", e);
                Err(e.into())
            }
        }
    }
}
