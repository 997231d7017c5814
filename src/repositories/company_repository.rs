use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::company::Company;
use crate::utils::errors::AppError;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        contact_email: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (id, name, contact_email, contact_phone, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(contact_email)
        .bind(contact_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error creating company: {}", e);
            AppError::Database(e)
        })?;

        Ok(company)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Error finding company {}: {}", id, e);
                AppError::Database(e)
            })?;

        Ok(company)
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM companies
            WHERE ($1 OR is_active)
            ORDER BY name
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing companies: {}", e);
            AppError::Database(e)
        })?;

        Ok(companies)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        contact_email: Option<String>,
        contact_phone: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Company, AppError> {
        // Obtener empresa actual para el update de campos parciales
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $2, contact_email = $3, contact_phone = $4, is_active = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(contact_email.or(current.contact_email))
        .bind(contact_phone.or(current.contact_phone))
        .bind(is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error updating company {}: {}", id, e);
            AppError::Database(e)
        })?;

        Ok(company)
    }

    /// Baja lógica: la empresa desaparece de los listados por defecto
    pub async fn soft_delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE companies SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deactivating company {}: {}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Company not found".to_string()));
        }

        Ok(())
    }
}
