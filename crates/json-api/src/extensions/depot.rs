//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use ordering_app::{
    auth::Principal,
    domain::{admins::records::AdminUuid, users::records::UserUuid},
};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The calling user; admins are refused with 403.
    fn user_uuid_or_403(&self) -> Result<UserUuid, StatusError>;

    /// The calling admin; users are refused with 403.
    fn admin_uuid_or_403(&self) -> Result<AdminUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.obtain::<Principal>()
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn user_uuid_or_403(&self) -> Result<UserUuid, StatusError> {
        match self.principal_or_401()? {
            Principal::User(user) => Ok(user),
            Principal::Admin(_) => {
                Err(StatusError::forbidden().brief("This endpoint is only available to users"))
            }
        }
    }

    fn admin_uuid_or_403(&self) -> Result<AdminUuid, StatusError> {
        match self.principal_or_401()? {
            Principal::Admin(admin) => Ok(admin),
            Principal::User(_) => {
                Err(StatusError::forbidden().brief("This endpoint is only available to admins"))
            }
        }
    }
}
