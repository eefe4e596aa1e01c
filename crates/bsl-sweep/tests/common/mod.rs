#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bsl_core::models::appointment::Appointment;
use bsl_messaging::error::MessagingError;
use bsl_messaging::gateway::{DeliveryReceipt, MessagingGateway};
use bsl_storage::error::StorageError;
use bsl_storage::memory::MemoryStore;
use bsl_storage::query::Query;
use bsl_storage::store::{BoxFuture, RecordStore};
use bsl_sweep::SweepContext;
use bsl_sweep::certificate::CertificateIssuer;
use bsl_sweep::error::SweepError;
use jiff::{SignedDuration, Timestamp};
use serde_json::Value;

#[derive(Default)]
pub struct RecordingGateway {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_to: Mutex<Option<String>>,
}

impl RecordingGateway {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_for(&self, number: &str) {
        *self.fail_to.lock().unwrap() = Some(number.to_string());
    }
}

impl MessagingGateway for RecordingGateway {
    fn send_text<'a>(
        &'a self,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DeliveryReceipt, MessagingError>> {
        Box::pin(async move {
            if self.fail_to.lock().unwrap().as_deref() == Some(to) {
                return Err(MessagingError::Http("connection reset".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(DeliveryReceipt::default())
        })
    }
}

#[derive(Default)]
pub struct FakeCertificates {
    pub issued: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

impl CertificateIssuer for FakeCertificates {
    fn issue<'a>(
        &'a self,
        appointment: &'a Appointment,
        _to: &'a str,
    ) -> BoxFuture<'a, Result<String, SweepError>> {
        Box::pin(async move {
            if *self.fail.lock().unwrap() {
                return Err(SweepError::Certificate("renderer unavailable".to_string()));
            }
            self.issued.lock().unwrap().push(appointment.id.clone());
            Ok(format!("https://certs.example/{}.pdf", appointment.id))
        })
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub gateway: Arc<RecordingGateway>,
    pub certificates: Arc<FakeCertificates>,
    pub ctx: SweepContext,
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let gateway = Arc::new(RecordingGateway::default());
    let certificates = Arc::new(FakeCertificates::default());
    let ctx = SweepContext {
        store: store.clone(),
        gateway: gateway.clone(),
        certificates: certificates.clone(),
    };
    Harness {
        store,
        gateway,
        certificates,
        ctx,
    }
}

/// Store whose queries always fail; reads and writes by id succeed.
#[derive(Default)]
pub struct UnqueryableStore {
    pub inner: MemoryStore,
}

impl RecordStore for UnqueryableStore {
    fn find<'a>(&'a self, _query: &'a Query) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async { Err(StorageError::Unavailable("query timed out".to_string())) })
    }

    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        self.inner.get(collection, id)
    }

    fn insert<'a>(
        &'a self,
        collection: &'a str,
        record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        self.inner.insert(collection, record)
    }

    fn update<'a>(
        &'a self,
        collection: &'a str,
        record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        self.inner.update(collection, record)
    }
}

/// Harness whose selection queries fail.
pub fn unqueryable_harness() -> (Arc<UnqueryableStore>, Harness) {
    let base = harness();
    let store = Arc::new(UnqueryableStore::default());
    let ctx = SweepContext {
        store: store.clone(),
        gateway: base.gateway.clone(),
        certificates: base.certificates.clone(),
    };
    (store, Harness { ctx, ..base })
}

pub const NO_DELAY: Duration = Duration::ZERO;

pub fn now() -> Timestamp {
    "2025-03-03T15:00:00Z".parse().unwrap()
}

/// RFC 3339 timestamp `minutes` from [`now`], negative for the past.
pub fn at(minutes: i64) -> String {
    now()
        .checked_add(SignedDuration::from_mins(minutes))
        .unwrap()
        .to_string()
}

pub async fn insert(store: &MemoryStore, collection: &str, record: Value) {
    store.insert(collection, record).await.unwrap();
}

pub async fn get(store: &MemoryStore, collection: &str, id: &str) -> Value {
    store.get(collection, id).await.unwrap()
}
