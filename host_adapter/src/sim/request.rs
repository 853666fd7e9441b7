use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::{
    engine::request::Request,
    enums::referrer_policy::ReferrerPolicy,
    util::{
        engine_arc::{Counted, EngineArc},
        engine_string::EngineString,
    },
};

struct SimRequestState {
    url: EngineString,
    referrer: Mutex<EngineString>,
    last_policy_set: Mutex<Option<ReferrerPolicy>>,
    set_referrer_calls: AtomicUsize,
}

#[derive(Clone)]
pub struct SimRequest {
    inner: EngineArc<Counted<SimRequestState>>,
}

impl SimRequest {
    pub fn new(url: &str) -> Self {
        Self::with_referrer(url, "")
    }

    pub fn with_referrer(url: &str, referrer: &str) -> Self {
        Self {
            inner: EngineArc::new(SimRequestState {
                url: url.into(),
                referrer: Mutex::new(referrer.into()),
                last_policy_set: Mutex::new(None),
                set_referrer_calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn referrer(&self) -> String {
        self.inner.referrer.lock().to_string_lossy()
    }

    /// The policy passed to the most recent `set_referrer`, if any.
    pub fn referrer_policy_set(&self) -> Option<ReferrerPolicy> {
        *self.inner.last_policy_set.lock()
    }

    pub fn set_referrer_calls(&self) -> usize {
        self.inner.set_referrer_calls.load(Ordering::SeqCst)
    }
}

impl Request for SimRequest {
    fn url(&self) -> EngineString {
        self.inner.url.clone()
    }

    fn referrer_url(&self) -> EngineString {
        self.inner.referrer.lock().clone()
    }

    fn set_referrer(&self, referrer_url: &EngineString, policy: ReferrerPolicy) {
        *self.inner.referrer.lock() = referrer_url.clone();
        *self.inner.last_policy_set.lock() = Some(policy);
        self.inner.set_referrer_calls.fetch_add(1, Ordering::SeqCst);
    }
}
