use crate::{enums::referrer_policy::ReferrerPolicy, util::engine_string::EngineString};

/// A network request, mutable until it has been sent.
pub trait Request: Send + Sync {
    fn url(&self) -> EngineString;

    /// Empty when no referrer was set.
    fn referrer_url(&self) -> EngineString;

    fn set_referrer(&self, referrer_url: &EngineString, policy: ReferrerPolicy);
}
