use async_trait::async_trait;
use sqlx::MySqlPool;

use super::ContactStore;
use crate::models::contact::Contact;

#[derive(Clone)]
pub struct MySqlContactStore {
    pool: MySqlPool,
}

impl MySqlContactStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for MySqlContactStore {
    #[tracing::instrument(name = "Insert contact", skip(self, contact), fields(id = %contact.id))]
    async fn insert(&self, contact: &Contact) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, email, phone, company, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contact.id.to_string())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.company)
        .bind(&contact.message)
        .bind(contact.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        let _: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
