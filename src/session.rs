//! Owner sign-in and sign-out.

use crate::api::OwnerApi;
use crate::config::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::error::{DashboardError, Result};
use crate::models::{Credentials, TokenPair};
use crate::token_store::TokenStore;

/// Sign in as the shop owner and persist the issued token pair.
///
/// Any previously stored tokens are dropped before the request goes out, so
/// a failed attempt leaves the store signed out. Accounts whose role is not
/// `owner` are rejected exactly like a wrong password and nothing is written.
pub fn sign_in(
    api: &dyn OwnerApi,
    store: &mut dyn TokenStore,
    credentials: &Credentials,
) -> Result<TokenPair> {
    if !credentials.is_complete() {
        return Err(DashboardError::MissingCredentials);
    }

    clear_tokens(store)?;

    let resp = api.login(credentials)?;
    if !resp.is_owner() {
        tracing::info!(role = %resp.role, "rejected sign-in for non-owner role");
        return Err(DashboardError::WrongCredentials);
    }

    let pair = TokenPair::from(resp);
    store.set(ACCESS_TOKEN_KEY, &pair.access)?;
    store.set(REFRESH_TOKEN_KEY, &pair.refresh)?;
    tracing::info!("owner signed in");
    Ok(pair)
}

pub fn sign_out(store: &mut dyn TokenStore) -> Result<()> {
    clear_tokens(store)
}

pub fn is_signed_in(store: &dyn TokenStore) -> Result<bool> {
    Ok(store.get(ACCESS_TOKEN_KEY)?.is_some())
}

fn clear_tokens(store: &mut dyn TokenStore) -> Result<()> {
    store.remove(ACCESS_TOKEN_KEY)?;
    store.remove(REFRESH_TOKEN_KEY)
}
