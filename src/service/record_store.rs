use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{info, error, instrument};

use crate::config::DatabaseConfig;
use crate::dto::invoice_dto::{CreateInvoiceRequest, InvoiceReceipt};
use crate::dto::payload::check_request;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteReceipt};
use crate::dto::reservation_dto::{CreateReservationRequest, ReservationReceipt};
use crate::model::invoice::Invoice;
use crate::model::quote::Quote;
use crate::model::reservation::Reservation;
use crate::repository::db::connect;
use crate::repository::invoice_repo::{InvoiceRepository, SqliteInvoiceRepository};
use crate::repository::quote_repo::{QuoteRepository, SqliteQuoteRepository};
use crate::repository::repository_error::RepositoryResult;
use crate::repository::reservation_repo::{ReservationRepository, SqliteReservationRepository};
use crate::repository::schema::init_schema;
use crate::util::error::ServiceError;
use crate::util::pricing::estimate_price;

/// Create and list operations over quotes, reservations and invoices.
///
/// Every create validates its request before touching storage, so a
/// rejected request never leaves a row behind.
#[async_trait]
pub trait RecordStore: Send + Sync {
	async fn create_quote(&self, request: CreateQuoteRequest) -> Result<QuoteReceipt, ServiceError>;
	async fn create_reservation(&self, request: CreateReservationRequest) -> Result<ReservationReceipt, ServiceError>;
	async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<InvoiceReceipt, ServiceError>;

	/// Newest first.
	async fn list_quotes(&self) -> Result<Vec<Quote>, ServiceError>;
	async fn list_reservations(&self) -> Result<Vec<Reservation>, ServiceError>;
	async fn list_invoices(&self) -> Result<Vec<Invoice>, ServiceError>;
}

/// Handle injected into the routers.
pub type SharedRecordStore = Arc<dyn RecordStore>;

pub struct RecordStoreImpl {
	pub quote_repo: Arc<dyn QuoteRepository>,
	pub reservation_repo: Arc<dyn ReservationRepository>,
	pub invoice_repo: Arc<dyn InvoiceRepository>,
}

impl RecordStoreImpl {
	/// Open the database and make sure the tables exist.
	pub async fn open(config: &DatabaseConfig) -> RepositoryResult<(Self, SqlitePool)> {
		let pool = connect(config).await?;
		init_schema(&pool).await?;
		Ok((RecordStoreImpl::from_pool(pool.clone()), pool))
	}

	/// Build on a pool whose schema is already initialized.
	pub fn from_pool(pool: SqlitePool) -> Self {
		RecordStoreImpl {
			quote_repo: Arc::new(SqliteQuoteRepository::new(pool.clone())),
			reservation_repo: Arc::new(SqliteReservationRepository::new(pool.clone())),
			invoice_repo: Arc::new(SqliteInvoiceRepository::new(pool)),
		}
	}
}

#[async_trait]
impl RecordStore for RecordStoreImpl {
	#[instrument(skip(self, request))]
	async fn create_quote(&self, request: CreateQuoteRequest) -> Result<QuoteReceipt, ServiceError> {
		info!("Registering new quote");
		check_request(&request)?;
		let price = estimate_price(request.service_type.as_deref().unwrap_or_default());
		let res = self.quote_repo.create(request.into_new_quote(price)).await;
		match &res {
			Ok(quote) => info!(id = %quote.id, price, "Quote registered successfully"),
			Err(e) => error!("Failed to register quote: {e}"),
		}
		res.map(|quote| QuoteReceipt::from(&quote)).map_err(ServiceError::from)
	}

	#[instrument(skip(self, request))]
	async fn create_reservation(&self, request: CreateReservationRequest) -> Result<ReservationReceipt, ServiceError> {
		info!("Registering new reservation");
		check_request(&request)?;
		let res = self.reservation_repo.create(request.into_new_reservation()).await;
		match &res {
			Ok(reservation) => info!(id = %reservation.id, "Reservation registered successfully"),
			Err(e) => error!("Failed to register reservation: {e}"),
		}
		res.map(|reservation| ReservationReceipt::from(&reservation)).map_err(ServiceError::from)
	}

	#[instrument(skip(self, request))]
	async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<InvoiceReceipt, ServiceError> {
		info!("Registering new invoice");
		check_request(&request)?;
		let amount = request.parse_amount()?;
		let invoice_date = chrono::Local::now().format("%Y-%m-%d").to_string();
		let res = self.invoice_repo.create(request.into_new_invoice(amount, invoice_date)).await;
		match &res {
			Ok(invoice) => info!(id = %invoice.id, "Invoice registered successfully"),
			Err(e) => error!("Failed to register invoice: {e}"),
		}
		res.map(|invoice| InvoiceReceipt::from(&invoice)).map_err(ServiceError::from)
	}

	#[instrument(skip(self))]
	async fn list_quotes(&self) -> Result<Vec<Quote>, ServiceError> {
		info!("Listing quotes");
		let res = self.quote_repo.list().await;
		match &res {
			Ok(quotes) => info!("Fetched {} quotes", quotes.len()),
			Err(e) => error!("Failed to list quotes: {e}"),
		}
		res.map_err(ServiceError::from)
	}

	#[instrument(skip(self))]
	async fn list_reservations(&self) -> Result<Vec<Reservation>, ServiceError> {
		info!("Listing reservations");
		let res = self.reservation_repo.list().await;
		match &res {
			Ok(reservations) => info!("Fetched {} reservations", reservations.len()),
			Err(e) => error!("Failed to list reservations: {e}"),
		}
		res.map_err(ServiceError::from)
	}

	#[instrument(skip(self))]
	async fn list_invoices(&self) -> Result<Vec<Invoice>, ServiceError> {
		info!("Listing invoices");
		let res = self.invoice_repo.list().await;
		match &res {
			Ok(invoices) => info!("Fetched {} invoices", invoices.len()),
			Err(e) => error!("Failed to list invoices: {e}"),
		}
		res.map_err(ServiceError::from)
	}
}
