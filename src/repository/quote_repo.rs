use crate::model::quote::{NewQuote, Quote, QUOTE_STATUS_PENDING};
use crate::repository::insert::insert_with_fresh_id;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, error};

#[async_trait]
pub trait QuoteRepository : Send + Sync {
    async fn create(&self, quote: NewQuote) -> RepositoryResult<Quote>;
    async fn list(&self) -> RepositoryResult<Vec<Quote>>;
}

pub struct SqliteQuoteRepository {
    pool: SqlitePool,
}

impl SqliteQuoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteQuoteRepository { pool }
    }
}

#[async_trait]
impl QuoteRepository for SqliteQuoteRepository {

    #[tracing::instrument(skip(self, quote), fields(service_type = %quote.service_type))]
    async fn create(&self, quote: NewQuote) -> RepositoryResult<Quote> {
        info!(quote = ?quote, "Creating new quote");
        let pool = &self.pool;
        let quote = &quote;
        let created_at = Utc::now();

        let result = insert_with_fresh_id("quotes", |id| async move {
            sqlx::query(
                r#"
                INSERT INTO quotes (id, client_name, client_email, client_phone,
                                    service_type, description, price, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&quote.client_name)
            .bind(&quote.client_email)
            .bind(&quote.client_phone)
            .bind(&quote.service_type)
            .bind(&quote.description)
            .bind(quote.price)
            .bind(QUOTE_STATUS_PENDING)
            .bind(created_at)
            .execute(pool)
            .await?;

            Ok::<Quote, RepositoryError>(Quote {
                id,
                client_name: quote.client_name.clone(),
                client_email: quote.client_email.clone(),
                client_phone: quote.client_phone.clone(),
                service_type: quote.service_type.clone(),
                description: quote.description.clone(),
                price: quote.price,
                status: QUOTE_STATUS_PENDING.to_string(),
                created_at,
            })
        })
        .await;

        match result {
            Ok(created) => {
                info!(id = %created.id, "Quote created successfully");
                Ok(created)
            },
            Err(e) => {
                error!("Failed to create quote: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Quote>> {
        info!("Listing quotes");
        let result = sqlx::query_as::<_, Quote>(
            r#"
            SELECT id, client_name, client_email, client_phone, service_type,
                   description, price, status, created_at
            FROM quotes
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(quotes) => {
                info!("Fetched {} quotes", quotes.len());
                Ok(quotes)
            },
            Err(e) => {
                error!("Failed to list quotes: {}", e);
                Err(e.into())
            }
        }
    }
}
