// Application state shared across handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{
    error::AuthError, models::Role, password::PasswordService, repository::UserDirectory,
    token::TokenService, AuthService, User,
};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::inventory::InventoryLedger;
use crate::orders::OrderService;
use crate::promotions::PromotionEngine;
use crate::session::{SessionStore, ShopState};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: SessionStore,
    pub order_service: OrderService,
    pub auth_service: AuthService,
    /// Seed accounts, hashed once at startup and copied into every new session
    seed_users: Arc<Vec<User>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AuthError> {
        Self::with_password_service(config, PasswordService::new())
    }

    pub fn with_password_service(
        config: AppConfig,
        password_service: PasswordService,
    ) -> Result<Self, AuthError> {
        let token_service =
            TokenService::new(config.jwt_secret.clone(), config.access_token_ttl_secs);
        let auth_service = AuthService::new(password_service, token_service);

        let seed_users = vec![
            auth_service.seed_account(
                &config.seed_admin.username,
                &config.seed_admin.password,
                Role::Admin,
            )?,
            auth_service.seed_account(
                &config.seed_customer.username,
                &config.seed_customer.password,
                Role::Customer,
            )?,
        ];

        Ok(Self {
            order_service: OrderService::new(
                Arc::new(Catalog::standard()),
                Arc::new(PromotionEngine::standard()),
            ),
            auth_service,
            sessions: SessionStore::new(),
            seed_users: Arc::new(seed_users),
            config: Arc::new(config),
        })
    }

    /// State with minimal Argon2 cost so tests stay fast
    #[cfg(test)]
    pub fn for_tests(config: AppConfig) -> Result<Self, AuthError> {
        Self::with_password_service(config, PasswordService::with_params(8, 1, 1)?)
    }

    pub fn catalog(&self) -> &Catalog {
        self.order_service.catalog()
    }

    /// A fresh shop: seeded accounts, opening stock, no orders, nobody logged in
    pub fn new_shop(&self) -> ShopState {
        ShopState::new(
            UserDirectory::from_users(self.seed_users.iter().cloned()),
            InventoryLedger::standard(self.config.low_stock_ratio),
        )
    }

    /// Open a new session and return its id
    pub async fn open_session(&self) -> Uuid {
        self.sessions.create(self.new_shop()).await
    }
}
