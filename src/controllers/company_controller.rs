//! Controller de empresas de transporte

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::repositories::company_repository::CompanyRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_not_empty;

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        request.validate()?;
        validate_not_empty("name", &request.name)?;

        let company = self
            .repository
            .create(
                request.name.trim().to_string(),
                request.contact_email,
                request.contact_phone,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(company),
            "Empresa creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        Ok(CompanyResponse::from(company))
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.list(include_inactive).await?;
        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        request.validate()?;

        let company = self
            .repository
            .update(
                id,
                request.name,
                request.contact_email,
                request.contact_phone,
                request.is_active,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(company),
            "Empresa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.soft_delete(id).await
    }
}
