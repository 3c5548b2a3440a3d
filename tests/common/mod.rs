//! Shared fixtures for the owner dashboard integration tests.
//!
//! Provides record builders pinned to a fixed UTC offset and a scripted
//! `OwnerApi` that records the calls made against it.

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use owner_dashboard::error::{DashboardError, Result};
use owner_dashboard::models::{
    Credentials, LoginResponse, OwnerAccount, TransactionRecord, TransactionType,
};
use owner_dashboard::OwnerApi;
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
}

pub fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

pub fn income(amount: i64, ts: DateTime<FixedOffset>) -> TransactionRecord {
    TransactionRecord::new(TransactionType::Income, dec(amount), ts)
}

pub fn expense(amount: i64, ts: DateTime<FixedOffset>) -> TransactionRecord {
    TransactionRecord::new(TransactionType::Expense, dec(amount), ts)
}

/// `[{income,100,day0},{expense,30,day0},{income,50,day2}]` starting 2024-03-01.
pub fn three_day_scenario() -> Vec<TransactionRecord> {
    vec![
        income(100, at(2024, 3, 1, 9)),
        expense(30, at(2024, 3, 1, 15)),
        income(50, at(2024, 3, 3, 11)),
    ]
}

/// One income record per day for `days` days starting at `start`.
pub fn daily_income(start: NaiveDate, days: u32) -> Vec<TransactionRecord> {
    start
        .iter_days()
        .take(days as usize)
        .enumerate()
        .map(|(i, d)| {
            let ts = FixedOffset::east_opt(0)
                .unwrap()
                .from_local_datetime(&d.and_hms_opt(12, 0, 0).unwrap())
                .unwrap();
            income(i as i64 + 1, ts)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// FakeApi
// ---------------------------------------------------------------------------

pub enum LoginOutcome {
    Respond(LoginResponse),
    Reject,
    Unreachable,
}

pub enum FetchOutcome {
    Accounts(Vec<OwnerAccount>),
    Unavailable(u16),
}

pub struct FakeApi {
    login: Mutex<LoginOutcome>,
    fetch: Mutex<FetchOutcome>,
    pub login_calls: Mutex<Vec<Credentials>>,
    pub tokens_seen: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new(login: LoginOutcome, fetch: FetchOutcome) -> Self {
        Self {
            login: Mutex::new(login),
            fetch: Mutex::new(fetch),
            login_calls: Mutex::new(Vec::new()),
            tokens_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn owner() -> Self {
        Self::new(
            LoginOutcome::Respond(login_response("owner")),
            FetchOutcome::Accounts(Vec::new()),
        )
    }

    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self::new(
            LoginOutcome::Respond(login_response("owner")),
            FetchOutcome::Accounts(vec![OwnerAccount {
                id: None,
                transactions: records,
            }]),
        )
    }

    pub fn set_fetch(&self, outcome: FetchOutcome) {
        *self.fetch.lock().unwrap() = outcome;
    }

    pub fn login_count(&self) -> usize {
        self.login_calls.lock().unwrap().len()
    }
}

pub fn login_response(role: &str) -> LoginResponse {
    LoginResponse {
        access: "access-abc".to_string(),
        refresh: "refresh-xyz".to_string(),
        role: role.to_string(),
    }
}

impl OwnerApi for FakeApi {
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.login_calls.lock().unwrap().push(credentials.clone());
        match &*self.login.lock().unwrap() {
            LoginOutcome::Respond(resp) => Ok(resp.clone()),
            LoginOutcome::Reject => Err(DashboardError::WrongCredentials),
            LoginOutcome::Unreachable => Err(DashboardError::Status {
                endpoint: "auth/login".to_string(),
                status: 503,
            }),
        }
    }

    fn owner_accounts(&self, access_token: &str) -> Result<Vec<OwnerAccount>> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(access_token.to_string());
        match &*self.fetch.lock().unwrap() {
            FetchOutcome::Accounts(accounts) => Ok(accounts.clone()),
            FetchOutcome::Unavailable(status) => Err(DashboardError::Status {
                endpoint: "transaction/owner-accounts".to_string(),
                status: *status,
            }),
        }
    }
}
