use crate::model::invoice::{Invoice, NewInvoice, INVOICE_STATUS_PENDING};
use crate::repository::insert::insert_with_fresh_id;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, error};

#[async_trait]
pub trait InvoiceRepository : Send + Sync {
    async fn create(&self, invoice: NewInvoice) -> RepositoryResult<Invoice>;
    async fn list(&self) -> RepositoryResult<Vec<Invoice>>;
}

pub struct SqliteInvoiceRepository {
    pool: SqlitePool,
}

impl SqliteInvoiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteInvoiceRepository { pool }
    }
}

#[async_trait]
impl InvoiceRepository for SqliteInvoiceRepository {

    #[tracing::instrument(skip(self, invoice), fields(amount = invoice.amount))]
    async fn create(&self, invoice: NewInvoice) -> RepositoryResult<Invoice> {
        info!(invoice = ?invoice, "Creating new invoice");
        let pool = &self.pool;
        let invoice = &invoice;
        let created_at = Utc::now();

        let result = insert_with_fresh_id("invoices", |id| async move {
            sqlx::query(
                r#"
                INSERT INTO invoices (id, quote_id, client_name, client_email,
                                      service_type, amount, status, invoice_date, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&invoice.quote_id)
            .bind(&invoice.client_name)
            .bind(&invoice.client_email)
            .bind(&invoice.service_type)
            .bind(invoice.amount)
            .bind(INVOICE_STATUS_PENDING)
            .bind(&invoice.invoice_date)
            .bind(created_at)
            .execute(pool)
            .await?;

            Ok::<Invoice, RepositoryError>(Invoice {
                id,
                quote_id: invoice.quote_id.clone(),
                client_name: invoice.client_name.clone(),
                client_email: invoice.client_email.clone(),
                service_type: invoice.service_type.clone(),
                amount: invoice.amount,
                status: INVOICE_STATUS_PENDING.to_string(),
                invoice_date: invoice.invoice_date.clone(),
                created_at,
            })
        })
        .await;

        match result {
            Ok(created) => {
                info!(id = %created.id, "Invoice created successfully");
                Ok(created)
            },
            Err(e) => {
                error!("Failed to create invoice: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Invoice>> {
        info!("Listing invoices");
        let result = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, quote_id, client_name, client_email, service_type,
                   amount, status, invoice_date, created_at
            FROM invoices
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(invoices) => {
                info!("Fetched {} invoices", invoices.len());
                Ok(invoices)
            },
            Err(e) => {
                error!("Failed to list invoices: {}", e);
                Err(e.into())
            }
        }
    }
}
